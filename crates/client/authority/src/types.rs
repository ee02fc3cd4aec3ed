//! Wire records exchanged with the authority that are not part of the game
//! model itself.
use game_core::{Difficulty, Direction, HeroClass, HeroGender, Theme};
use serde::{Deserialize, Serialize};

/// Combat actions accepted while in the combat sub-state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CombatAction {
    Attack,
    Flee,
}

/// Class and gender chosen on the hero-select screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSelection {
    pub hero_class: HeroClass,
    pub gender: HeroGender,
}

impl HeroSelection {
    pub const fn new(hero_class: HeroClass, gender: HeroGender) -> Self {
        Self { hero_class, gender }
    }
}

/// Response to a move request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub in_combat: bool,
    #[serde(default)]
    pub combat_enemy: Option<String>,
}

/// Response to one combat round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    #[serde(default)]
    pub combat_log: Vec<String>,
    #[serde(default)]
    pub combat_ended: bool,
    pub player_hp: i32,
    #[serde(default)]
    pub player_defeated: bool,
}

// ===== request bodies =====

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub difficulty: Difficulty,
    pub theme: Option<Theme>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MoveRequest {
    pub direction: Direction,
}

#[derive(Debug, Serialize)]
pub(crate) struct CombatRequest {
    pub action_type: CombatAction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Greeting {
    pub message: String,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Extracts a message from an error response, falling back to the raw body.
    pub(crate) fn message(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_move_outcome_with_missing_optionals() {
        let outcome: MoveOutcome = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, None);
        assert!(!outcome.in_combat);

        let outcome: MoveOutcome = serde_json::from_str(
            r#"{"success": true, "message": "An orc blocks your path!", "in_combat": true, "combat_enemy": "enemy_3"}"#,
        )
        .unwrap();
        assert_eq!(outcome.combat_enemy.as_deref(), Some("enemy_3"));
    }

    #[test]
    fn decodes_combat_outcome() {
        let outcome: CombatOutcome = serde_json::from_str(
            r#"{"combat_log": ["You hit the rat for 7", "The rat bites you for 2"],
                "combat_ended": false, "player_hp": 88, "player_defeated": false}"#,
        )
        .unwrap();
        assert_eq!(outcome.combat_log.len(), 2);
        assert_eq!(outcome.player_hp, 88);
    }

    #[test]
    fn request_bodies_use_wire_names() {
        let body = serde_json::to_value(CombatRequest {
            action_type: CombatAction::Flee,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"action_type": "flee"}));

        let body = serde_json::to_value(HeroSelection::new(HeroClass::Thief, HeroGender::Female))
            .unwrap();
        assert_eq!(body, serde_json::json!({"hero_class": "thief", "gender": "female"}));

        let body = serde_json::to_value(GenerateRequest {
            difficulty: Difficulty::Hard,
            theme: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"difficulty": "hard", "theme": null}));
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(ErrorBody::message(r#"{"detail": "Game not found"}"#), "Game not found");
        assert_eq!(ErrorBody::message("gateway down"), "gateway down");
        assert_eq!(ErrorBody::message(""), "Unknown error");
    }
}
