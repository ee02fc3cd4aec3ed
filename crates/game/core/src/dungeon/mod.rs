//! Immutable dungeon description: tile grid plus static entity catalogs.
//!
//! [`DungeonLayout`] mirrors the authority's wire record field for field.
//! [`Dungeon`] is the validated form the rest of the client works with; it is
//! never mutated after construction.
mod entities;
mod grid;
mod index;

pub use entities::{Chest, Door, Enemy, Key, Placed, Room, Trap, Treasure, TreasureKind};
pub use grid::{Grid, GridDimensions, TileKind};
pub use index::{CellEntities, EntityIndex};

use crate::error::DungeonError;
use crate::state::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display palette selector. Has no gameplay meaning.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Cave,
    Castle,
    Crypt,
    Forest,
    Ice,
    Fire,
}

/// Generation difficulty requested from the authority.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// Unvalidated dungeon record as exchanged with the authority.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DungeonLayout {
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Row-major tile codes, `grid[y][x]`.
    pub grid: Vec<Vec<u8>>,
    pub player_start: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty: Difficulty,
    #[cfg_attr(feature = "serde", serde(default))]
    pub theme: Theme,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rooms: Vec<Room>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub treasures: Vec<Treasure>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<Enemy>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traps: Vec<Trap>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub doors: Vec<Door>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chests: Vec<Chest>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keys: Vec<Key>,
}

impl DungeonLayout {
    /// Empty layout where every cell is `fill`. Mostly useful for fixtures.
    pub fn filled(id: impl Into<String>, width: u32, height: u32, fill: TileKind) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            grid: vec![vec![fill.code(); width as usize]; height as usize],
            player_start: Position::ORIGIN,
            difficulty: Difficulty::default(),
            theme: Theme::default(),
            rooms: Vec::new(),
            treasures: Vec::new(),
            enemies: Vec::new(),
            traps: Vec::new(),
            doors: Vec::new(),
            chests: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Overwrites one cell; out-of-range positions are ignored.
    pub fn set_tile(&mut self, position: Position, tile: TileKind) {
        if position.x < 0 || position.y < 0 {
            return;
        }
        if let Some(cell) = self
            .grid
            .get_mut(position.y as usize)
            .and_then(|row| row.get_mut(position.x as usize))
        {
            *cell = tile.code();
        }
    }
}

/// Validated, read-only dungeon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DungeonLayout", into = "DungeonLayout"))]
pub struct Dungeon {
    id: String,
    grid: Grid,
    player_start: Position,
    difficulty: Difficulty,
    theme: Theme,
    rooms: Vec<Room>,
    treasures: Vec<Treasure>,
    enemies: Vec<Enemy>,
    traps: Vec<Trap>,
    doors: Vec<Door>,
    chests: Vec<Chest>,
    keys: Vec<Key>,
    index: EntityIndex,
}

impl Dungeon {
    pub fn from_layout(layout: DungeonLayout) -> Result<Self, DungeonError> {
        let dimensions = GridDimensions::new(layout.width, layout.height);
        let grid = Grid::from_rows(dimensions, &layout.grid)?;

        match grid.tile(layout.player_start) {
            None => {
                return Err(DungeonError::StartOutOfBounds {
                    position: layout.player_start,
                });
            }
            Some(tile) if tile.is_wall() => {
                return Err(DungeonError::StartOnWall {
                    position: layout.player_start,
                });
            }
            Some(_) => {}
        }

        let mut index = EntityIndex::default();
        register(&mut index, dimensions, &layout.treasures, |c| &mut c.treasures)?;
        register(&mut index, dimensions, &layout.enemies, |c| &mut c.enemies)?;
        register(&mut index, dimensions, &layout.traps, |c| &mut c.traps)?;
        register(&mut index, dimensions, &layout.doors, |c| &mut c.doors)?;
        register(&mut index, dimensions, &layout.chests, |c| &mut c.chests)?;
        register(&mut index, dimensions, &layout.keys, |c| &mut c.keys)?;

        Ok(Self {
            id: layout.id,
            grid,
            player_start: layout.player_start,
            difficulty: layout.difficulty,
            theme: layout.theme,
            rooms: layout.rooms,
            treasures: layout.treasures,
            enemies: layout.enemies,
            traps: layout.traps,
            doors: layout.doors,
            chests: layout.chests,
            keys: layout.keys,
            index,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.grid.dimensions().width
    }

    pub fn height(&self) -> u32 {
        self.grid.dimensions().height
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.grid.tile(position)
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn traps(&self) -> &[Trap] {
        &self.traps
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn chests(&self) -> &[Chest] {
        &self.chests
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    /// Entities registered on a cell, if any.
    pub fn entities_at(&self, position: Position) -> Option<&CellEntities> {
        self.index.get(position)
    }

    pub fn into_layout(self) -> DungeonLayout {
        let dimensions = self.grid.dimensions();
        DungeonLayout {
            id: self.id,
            width: dimensions.width,
            height: dimensions.height,
            grid: self.grid.to_rows(),
            player_start: self.player_start,
            difficulty: self.difficulty,
            theme: self.theme,
            rooms: self.rooms,
            treasures: self.treasures,
            enemies: self.enemies,
            traps: self.traps,
            doors: self.doors,
            chests: self.chests,
            keys: self.keys,
        }
    }
}

impl TryFrom<DungeonLayout> for Dungeon {
    type Error = DungeonError;

    fn try_from(layout: DungeonLayout) -> Result<Self, Self::Error> {
        Self::from_layout(layout)
    }
}

impl From<Dungeon> for DungeonLayout {
    fn from(dungeon: Dungeon) -> Self {
        dungeon.into_layout()
    }
}

fn register<T: Placed>(
    index: &mut EntityIndex,
    dimensions: GridDimensions,
    entities: &[T],
    bucket: impl Fn(&mut CellEntities) -> &mut Vec<usize>,
) -> Result<(), DungeonError> {
    for (i, entity) in entities.iter().enumerate() {
        let position = entity.position();
        if !dimensions.contains(position) {
            return Err(DungeonError::EntityOutOfBounds {
                category: T::CATEGORY,
                id: entity.label(),
                position,
            });
        }
        bucket(index.slot(position)).push(i);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> DungeonLayout {
        let mut layout = DungeonLayout::filled("d1", 4, 3, TileKind::Floor);
        layout.player_start = Position::new(1, 1);
        layout
    }

    #[test]
    fn overlapping_entities_are_preserved() {
        let mut layout = open_room();
        layout.treasures.push(Treasure {
            id: "t1".into(),
            x: 2,
            y: 1,
            kind: TreasureKind::Gold,
        });
        layout.traps.push(Trap {
            x: 2,
            y: 1,
            kind: "spike".into(),
        });
        layout.traps.push(Trap {
            x: 2,
            y: 1,
            kind: "pit".into(),
        });

        let dungeon = Dungeon::from_layout(layout).unwrap();
        let cell = dungeon.entities_at(Position::new(2, 1)).unwrap();
        assert_eq!(cell.treasures, vec![0]);
        assert_eq!(cell.traps, vec![0, 1]);
        assert!(dungeon.entities_at(Position::new(0, 0)).is_none());
    }

    #[test]
    fn rejects_entity_outside_grid() {
        let mut layout = open_room();
        layout.keys.push(Key {
            id: "k1".into(),
            x: 4,
            y: 0,
            kind: None,
        });

        let err = Dungeon::from_layout(layout).unwrap_err();
        assert_eq!(
            err,
            DungeonError::EntityOutOfBounds {
                category: "key",
                id: "k1".into(),
                position: Position::new(4, 0),
            }
        );
    }

    #[test]
    fn rejects_start_on_wall() {
        let mut layout = open_room();
        layout.set_tile(Position::new(1, 1), TileKind::Wall);
        assert!(matches!(
            Dungeon::from_layout(layout),
            Err(DungeonError::StartOnWall { .. })
        ));
    }

    #[test]
    fn difficulty_cycles_through_all_levels() {
        let mut seen = Vec::new();
        let mut current = Difficulty::Easy;
        for _ in 0..3 {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, Difficulty::ALL);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Hard);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_authority_record() {
        let json = r#"{
            "id": "abc",
            "grid": [[1,1,1],[1,0,1],[1,1,1]],
            "width": 3,
            "height": 3,
            "player_start": {"x": 1, "y": 1},
            "difficulty": "easy",
            "theme": "crypt",
            "rooms": [{"x":0,"y":0,"width":3,"height":3,"center_x":1,"center_y":1}],
            "treasures": [{"id":"t","x":1,"y":1,"type":"potion"}],
            "enemies": [{"id":"enemy_0","x":1,"y":1,"type":"rat","hp":20,"attack":5,"alive":true}],
            "traps": [{"x":1,"y":1,"type":"spike"}]
        }"#;

        let dungeon: Dungeon = serde_json::from_str(json).unwrap();
        assert_eq!(dungeon.theme(), Theme::Crypt);
        assert_eq!(dungeon.difficulty(), Difficulty::Easy);
        assert_eq!(dungeon.treasures()[0].kind, TreasureKind::Potion);
        assert!(dungeon.doors().is_empty());
        assert_eq!(dungeon.rooms()[0].center(), Position::new(1, 1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_record_fails_to_decode() {
        let json = r#"{
            "id": "abc",
            "grid": [[0,0],[0]],
            "width": 2,
            "height": 2,
            "player_start": {"x": 0, "y": 0}
        }"#;
        assert!(serde_json::from_str::<Dungeon>(json).is_err());
    }
}
