//! Validation errors for data received from the remote authority.
//!
//! Movement rejections live next to the rules that produce them
//! ([`crate::movement::MoveError`]); this module only covers structural
//! problems in dungeons and session snapshots. Both indicate malformed data
//! and are reported by clients as transport failures.

use crate::dungeon::{GridDimensions, TileKind};
use crate::state::Position;

/// A dungeon layout that cannot be turned into a [`crate::Dungeon`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    #[error("dungeon dimensions must be positive (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("grid has {actual} rows, expected {expected}")]
    RowCount { expected: u32, actual: usize },

    #[error("grid row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: u32,
        actual: usize,
    },

    #[error("unknown tile code {code} at {position:?}")]
    UnknownTile { position: Position, code: u8 },

    #[error("{category} {id:?} at {position:?} lies outside the grid")]
    EntityOutOfBounds {
        category: &'static str,
        id: String,
        position: Position,
    },

    #[error("player start {position:?} lies outside the grid")]
    StartOutOfBounds { position: Position },

    #[error("player start {position:?} is a wall")]
    StartOnWall { position: Position },
}

/// A session snapshot that is inconsistent with the dungeon it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("discovery map is {actual:?}, dungeon is {expected:?}")]
    DiscoveryDimensions {
        expected: GridDimensions,
        actual: GridDimensions,
    },

    #[error("player position {position:?} lies outside the grid")]
    PlayerOutOfBounds { position: Position },

    #[error("player position {position:?} is a {tile:?} cell")]
    PlayerOnWall { position: Position, tile: TileKind },
}
