//! Remote authority abstraction.
//!
//! The authority owns dungeon generation, rule arbitration and combat
//! resolution. The client only ever asks it to do things and renders the
//! answers.
use std::time::Duration;

use async_trait::async_trait;
use game_core::{Difficulty, Direction, Dungeon, GameState, HeroRoster, Theme};

use crate::types::{CombatAction, CombatOutcome, HeroSelection, MoveOutcome};

// ============================================================================
// Error Types
// ============================================================================

/// Failure talking to the authority.
///
/// Every variant is a transport failure from the client's point of view: the
/// request did not produce usable data and nothing should be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthorityError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Authority returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AuthorityError {
    /// Maps a non-success status and its `detail` message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 {
            Self::NotFound(message)
        } else {
            Self::Status { status, message }
        }
    }
}

// ============================================================================
// Authority Trait
// ============================================================================

/// Operations the client consumes from the remote authority.
#[async_trait]
pub trait GameAuthority: Send + Sync {
    /// Human readable backend name for logs.
    fn name(&self) -> &str;

    /// Generate a new dungeon. `theme` is picked by the authority when `None`.
    async fn generate_dungeon(
        &self,
        difficulty: Difficulty,
        theme: Option<Theme>,
    ) -> Result<Dungeon, AuthorityError>;

    /// Open a new session on an existing dungeon.
    async fn start_session(
        &self,
        dungeon_id: &str,
        hero: HeroSelection,
    ) -> Result<GameState, AuthorityError>;

    /// Full session snapshot.
    async fn fetch_session(&self, session_id: &str) -> Result<GameState, AuthorityError>;

    /// Ask the authority to move the player one step.
    async fn move_player(
        &self,
        session_id: &str,
        direction: Direction,
    ) -> Result<MoveOutcome, AuthorityError>;

    /// Resolve one combat round.
    async fn combat_action(
        &self,
        session_id: &str,
        action: CombatAction,
    ) -> Result<CombatOutcome, AuthorityError>;

    /// Static hero catalog.
    async fn fetch_heroes(&self) -> Result<HeroRoster, AuthorityError>;

    /// Health check. Returns the authority's greeting.
    async fn ping(&self) -> Result<String, AuthorityError>;
}
