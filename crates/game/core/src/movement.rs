//! Local movement rules.
//!
//! [`candidate`] is shared by both movement strategies: a step that would
//! leave the grid is a no-op before anything else is consulted.
//! [`apply_local`] is the complete local-grid strategy, where the client is
//! its own authority and only `Floor` cells are enterable.
use crate::discovery::Neighborhood;
use crate::dungeon::{Dungeon, GridDimensions, TileKind};
use crate::state::{Direction, GameState, Position};

/// Why a local move was refused. None of these change the state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cannot move while in combat")]
    InCombat,

    #[error("the hero has fallen")]
    Defeated,

    #[error("{position} is at the {direction} edge of the map")]
    AtBoundary {
        position: Position,
        direction: Direction,
    },

    #[error("{destination} is blocked by a {tile}")]
    Blocked {
        destination: Position,
        tile: TileKind,
    },
}

/// Result of an accepted local move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalMove {
    pub from: Position,
    pub to: Position,
    /// Cells that were fogged before this move.
    pub revealed: Neighborhood,
}

/// Destination one step from `origin`, or `None` when the step would be
/// clamped back onto `origin`.
pub fn candidate(
    dimensions: GridDimensions,
    origin: Position,
    direction: Direction,
) -> Option<Position> {
    let (dx, dy) = direction.delta();
    let clamped = dimensions.clamp(origin.offset(dx, dy));
    (clamped != origin).then_some(clamped)
}

/// Moves the player one step on the local grid.
///
/// On success the position, discovery map and move counter are updated
/// together; on error nothing is touched.
pub fn apply_local(
    dungeon: &Dungeon,
    state: &mut GameState,
    direction: Direction,
) -> Result<LocalMove, MoveError> {
    if state.in_combat {
        return Err(MoveError::InCombat);
    }
    if state.player_hp <= 0 && state.max_hp() > 0 {
        return Err(MoveError::Defeated);
    }

    let from = state.player_position();
    let to = candidate(dungeon.dimensions(), from, direction).ok_or(MoveError::AtBoundary {
        position: from,
        direction,
    })?;

    match dungeon.tile(to) {
        Some(TileKind::Floor) => {}
        Some(tile) => {
            return Err(MoveError::Blocked {
                destination: to,
                tile,
            });
        }
        None => {
            return Err(MoveError::AtBoundary {
                position: from,
                direction,
            });
        }
    }

    state.set_player_position(to);
    state.moves += 1;
    let revealed = state.discovered_tiles.reveal_around(to);

    Ok(LocalMove { from, to, revealed })
}
