//! Tickets for authority round trips and the completions they produce.
//!
//! The controller never awaits anything. It issues a [`Ticket`] stamped with
//! the current session generation, a frontend runs it through
//! [`crate::dispatch::execute`] on whatever executor it likes, and the
//! resulting [`Completion`] is handed back to the controller, which discards
//! it if the generation has moved on in the meantime.
use client_authority::{AuthorityError, CombatAction, CombatOutcome, HeroSelection, MoveOutcome};
use game_core::{Difficulty, Direction, Dungeon, GameState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub request: Request,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Generate a dungeon, then open a session on it.
    Start {
        difficulty: Difficulty,
        hero: HeroSelection,
    },
    /// Move, then refresh the full session.
    Move {
        session_id: String,
        direction: Direction,
    },
    /// One combat round, refreshing the session when combat ends.
    Combat {
        session_id: String,
        action: CombatAction,
    },
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Start { .. } => "start",
            Request::Move { .. } => "move",
            Request::Combat { .. } => "combat",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Outcome,
}

impl Completion {
    /// Completion for a ticket whose round trip never finished, so the
    /// controller still clears its in-flight slot.
    pub fn aborted(ticket: &Ticket, error: AuthorityError) -> Self {
        let outcome = match ticket.request {
            Request::Start { .. } => Outcome::Started(Err(error)),
            Request::Move { .. } => Outcome::Moved(Err(error)),
            Request::Combat { .. } => Outcome::Fought(Err(error)),
        };
        Self {
            generation: ticket.generation,
            outcome,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Outcome {
    Started(Result<(Dungeon, GameState), AuthorityError>),
    Moved(Result<MoveReply, AuthorityError>),
    Fought(Result<CombatReply, AuthorityError>),
}

/// Move result plus the session snapshot fetched right after it.
#[derive(Clone, Debug)]
pub struct MoveReply {
    pub outcome: MoveOutcome,
    pub state: GameState,
}

/// Combat result; `refreshed` is present exactly when combat ended.
#[derive(Clone, Debug)]
pub struct CombatReply {
    pub outcome: CombatOutcome,
    pub refreshed: Option<GameState>,
}
