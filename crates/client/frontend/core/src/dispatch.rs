//! Runs tickets against the authority.
use std::time::Instant;

use client_authority::{AuthorityError, CombatAction, GameAuthority, HeroSelection};
use game_core::{Difficulty, Direction, Dungeon, GameState};
use tracing::debug;

use crate::request::{CombatReply, Completion, MoveReply, Outcome, Request, Ticket};

/// Performs every authority call a ticket needs and packages the result.
///
/// Multi-step requests stop at the first failure, so a completion carries
/// either everything needed to apply it or a single error.
pub async fn execute(authority: &dyn GameAuthority, ticket: Ticket) -> Completion {
    let Ticket {
        generation,
        request,
    } = ticket;
    let name = request.name();
    let started = Instant::now();

    let outcome = match request {
        Request::Start { difficulty, hero } => {
            Outcome::Started(start(authority, difficulty, hero).await)
        }
        Request::Move {
            session_id,
            direction,
        } => Outcome::Moved(move_and_refresh(authority, &session_id, direction).await),
        Request::Combat { session_id, action } => {
            Outcome::Fought(fight(authority, &session_id, action).await)
        }
    };

    debug!(
        request = name,
        generation,
        elapsed_ms = started.elapsed().as_millis() as u64,
        backend = authority.name(),
        "request completed"
    );

    Completion {
        generation,
        outcome,
    }
}

async fn start(
    authority: &dyn GameAuthority,
    difficulty: Difficulty,
    hero: HeroSelection,
) -> Result<(Dungeon, GameState), AuthorityError> {
    let dungeon = authority.generate_dungeon(difficulty, None).await?;
    debug!(dungeon = dungeon.id(), theme = %dungeon.theme(), "dungeon generated");
    let state = authority.start_session(dungeon.id(), hero).await?;
    Ok((dungeon, state))
}

async fn move_and_refresh(
    authority: &dyn GameAuthority,
    session_id: &str,
    direction: Direction,
) -> Result<MoveReply, AuthorityError> {
    let outcome = authority.move_player(session_id, direction).await?;
    debug!(session = session_id, %direction, success = outcome.success, "move resolved");
    let state = authority.fetch_session(session_id).await?;
    Ok(MoveReply { outcome, state })
}

async fn fight(
    authority: &dyn GameAuthority,
    session_id: &str,
    action: CombatAction,
) -> Result<CombatReply, AuthorityError> {
    let outcome = authority.combat_action(session_id, action).await?;
    debug!(
        session = session_id,
        %action,
        ended = outcome.combat_ended,
        defeated = outcome.player_defeated,
        "combat round resolved"
    );
    let refreshed = if outcome.combat_ended {
        Some(authority.fetch_session(session_id).await?)
    } else {
        None
    };
    Ok(CombatReply { outcome, refreshed })
}
