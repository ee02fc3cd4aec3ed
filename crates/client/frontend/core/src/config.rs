//! Frontend configuration structures and loaders.
//!
//! This module contains UI-side configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use game_core::Difficulty;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub channels: ChannelConfig,
    pub messages: MessageConfig,
    pub movement: MovementStrategy,
    pub default_difficulty: Difficulty,
}

impl FrontendConfig {
    pub const fn new(channels: ChannelConfig, messages: MessageConfig) -> Self {
        Self {
            channels,
            messages,
            movement: MovementStrategy::RemoteAuthority,
            default_difficulty: Difficulty::Medium,
        }
    }

    pub fn with_movement(mut self, movement: MovementStrategy) -> Self {
        self.movement = movement;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_COMPLETION_BUFFER` - Pending response queue size (default: 16)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `MOVEMENT_STRATEGY` - `remote` or `local` (default: remote)
    /// - `DEFAULT_DIFFICULTY` - Preselected difficulty on the menu (default: medium)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Channel configuration
        if let Some(capacity) = read_env::<usize>("CLI_COMPLETION_BUFFER") {
            config.channels.completion_buffer = capacity.max(1);
        }

        // Message configuration
        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(movement) = read_env::<MovementStrategy>("MOVEMENT_STRATEGY") {
            config.movement = movement;
        }

        if let Some(difficulty) = read_env::<Difficulty>("DEFAULT_DIFFICULTY") {
            config.default_difficulty = difficulty;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    /// Capacity of the channel carrying authority responses back to the UI.
    pub completion_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            completion_buffer: 16,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Who decides whether a move is legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MovementStrategy {
    /// Validity is `Floor` only; position, discovery and move count are
    /// updated locally and the authority is never contacted.
    #[strum(to_string = "local", serialize = "local-grid")]
    LocalGrid,
    /// The authority arbitrates every move and applies its side effects.
    #[default]
    #[strum(to_string = "remote", serialize = "remote-authority")]
    RemoteAuthority,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
