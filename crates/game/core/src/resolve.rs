//! Per-cell entity resolution.
//!
//! Chooses the single occupant shown on a cell from the static dungeon
//! catalogs and the session's consumed-entity sets. Precedence, highest
//! first: player, key, treasure, living enemy, trap, door, chest.
use crate::dungeon::{CellEntities, Dungeon, TileKind, TreasureKind};
use crate::state::{GameState, Position};

/// The one thing drawn on top of a cell's tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Occupant {
    Player,
    Key { id: String },
    Treasure { id: String, kind: TreasureKind },
    Enemy { id: String, kind: String },
    Trap { kind: String },
    Door { id: String, locked: bool },
    Chest { id: String, locked: bool },
}

/// What a renderer should show for one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Fog,
    Wall,
    Open {
        tile: TileKind,
        occupant: Option<Occupant>,
    },
}

impl CellView {
    pub fn occupant(&self) -> Option<&Occupant> {
        match self {
            CellView::Open { occupant, .. } => occupant.as_ref(),
            _ => None,
        }
    }
}

pub fn resolve_cell(dungeon: &Dungeon, state: &GameState, position: Position) -> CellView {
    let Some(tile) = dungeon.tile(position) else {
        return CellView::Fog;
    };

    if position == state.player_position() {
        return CellView::Open {
            tile,
            occupant: Some(Occupant::Player),
        };
    }
    if !state.discovered_tiles.is_discovered(position) {
        return CellView::Fog;
    }
    if tile.is_wall() {
        return CellView::Wall;
    }

    let occupant = dungeon
        .entities_at(position)
        .and_then(|cell| top_occupant(dungeon, state, cell));
    CellView::Open { tile, occupant }
}

/// Resolves every cell, row-major (`rows[y][x]`).
pub fn resolve_grid(dungeon: &Dungeon, state: &GameState) -> Vec<Vec<CellView>> {
    (0..dungeon.height() as i32)
        .map(|y| {
            (0..dungeon.width() as i32)
                .map(|x| resolve_cell(dungeon, state, Position::new(x, y)))
                .collect()
        })
        .collect()
}

fn top_occupant(dungeon: &Dungeon, state: &GameState, cell: &CellEntities) -> Option<Occupant> {
    if let Some(key) = cell
        .keys
        .iter()
        .map(|&i| &dungeon.keys()[i])
        .find(|key| !state.is_collected_key(&key.id))
    {
        return Some(Occupant::Key { id: key.id.clone() });
    }

    if let Some(treasure) = cell
        .treasures
        .iter()
        .map(|&i| &dungeon.treasures()[i])
        .find(|treasure| !state.is_consumed_treasure(&treasure.id))
    {
        return Some(Occupant::Treasure {
            id: treasure.id.clone(),
            kind: treasure.kind.clone(),
        });
    }

    if let Some(enemy) = cell
        .enemies
        .iter()
        .map(|&i| &dungeon.enemies()[i])
        .find(|enemy| enemy.alive && !state.is_defeated_enemy(&enemy.id))
    {
        return Some(Occupant::Enemy {
            id: enemy.id.clone(),
            kind: enemy.kind.clone(),
        });
    }

    if let Some(&i) = cell.traps.first() {
        return Some(Occupant::Trap {
            kind: dungeon.traps()[i].kind.clone(),
        });
    }

    if let Some(&i) = cell.doors.first() {
        let door = &dungeon.doors()[i];
        return Some(Occupant::Door {
            id: door.id.clone(),
            locked: door.locked,
        });
    }

    cell.chests
        .iter()
        .map(|&i| &dungeon.chests()[i])
        .find(|chest| !state.is_opened_chest(&chest.id))
        .map(|chest| Occupant::Chest {
            id: chest.id.clone(),
            locked: chest.locked,
        })
}
