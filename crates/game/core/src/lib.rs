//! Client-side game model and rules shared across frontends.
//!
//! `game-core` defines the dungeon description handed out by the remote
//! authority, the mutable per-session [`GameState`], and the pure rules the
//! client evaluates locally: fog-of-war discovery, movement validation and
//! per-cell entity resolution. Nothing here performs I/O; the authority
//! boundary lives in `client-authority`.
pub mod config;
pub mod discovery;
pub mod dungeon;
pub mod error;
pub mod hero;
pub mod movement;
pub mod resolve;
pub mod state;

pub use config::GameConfig;
pub use discovery::{DiscoveryMap, DiscoveryShapeError, Neighborhood, neighborhood};
pub use dungeon::{
    CellEntities, Chest, Difficulty, Door, Dungeon, DungeonLayout, Enemy, EntityIndex, Grid,
    GridDimensions, Key, Placed, Room, Theme, TileKind, Trap, Treasure, TreasureKind,
};
pub use error::{DungeonError, StateError};
pub use hero::{HeroClass, HeroGender, HeroProfile, HeroRoster};
pub use movement::{LocalMove, MoveError, apply_local, candidate};
pub use resolve::{CellView, Occupant, resolve_cell, resolve_grid};
pub use state::{Direction, GameState, InventoryItem, Position};
