//! Controller error taxonomy.
//!
//! | Variant             | Meaning                                   | Handling                  |
//! |---------------------|-------------------------------------------|---------------------------|
//! | `InvalidTransition` | input not allowed in the current state    | dropped silently          |
//! | `Transport`         | authority call failed                     | logged, state unchanged   |
//! | `Malformed`         | authority answered with inconsistent data | logged, state unchanged   |
//! | `StaleResponse`     | answer for an abandoned session           | discarded before mutation |
use client_authority::AuthorityError;
use game_core::StateError;

/// Why an input was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("not available on the {0} screen")]
    WrongView(&'static str),

    #[error("cannot move while in combat")]
    InCombat,

    #[error("not in combat")]
    NotInCombat,

    #[error("the hero has fallen")]
    Defeated,

    #[error("edge of the map")]
    AtBoundary,

    #[error("the way is blocked")]
    Blocked,

    #[error("a request is already in flight")]
    RequestInFlight,
}

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("ignored input: {0}")]
    InvalidTransition(#[from] Rejection),

    #[error("authority request failed: {0}")]
    Transport(#[from] AuthorityError),

    #[error("authority sent inconsistent state: {0}")]
    Malformed(#[from] StateError),

    #[error("discarded response for generation {issued} (current {current})")]
    StaleResponse { issued: u64, current: u64 },
}

impl ControlError {
    /// Input noise that should not be surfaced anywhere.
    pub fn is_silent(&self) -> bool {
        matches!(self, ControlError::InvalidTransition(_))
    }

    /// Failures the player should see in the message log.
    pub fn is_reportable(&self) -> bool {
        matches!(self, ControlError::Transport(_) | ControlError::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_transitions_are_silent() {
        assert!(ControlError::from(Rejection::InCombat).is_silent());
        assert!(!ControlError::StaleResponse { issued: 1, current: 2 }.is_silent());
        let transport = ControlError::from(AuthorityError::Network("down".into()));
        assert!(!transport.is_silent());
        assert!(transport.is_reportable());
    }
}
