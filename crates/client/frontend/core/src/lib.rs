//! Cross-frontend primitives for presenting the game.
//!
//! Houses the screen state machine, the movement and combat controllers, the
//! request/response plumbing towards the authority, message logging and the
//! view-model types that both the CLI and future graphical clients reuse.
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod frontend;
pub mod message;
pub mod request;
pub mod session;
pub mod view;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig, MovementStrategy};
pub use controller::{Applied, Dispatch, GameController};
pub use dispatch::execute;
pub use error::{ControlError, Rejection};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageKind, MessageLog};
pub use request::{CombatReply, Completion, MoveReply, Outcome, Request, Ticket};
pub use session::Session;
pub use view::{HeroSelectState, MenuState, View};
pub use view_model::{
    CombatSnapshot, Frame, GameFrame, HeroEntry, HeroSelectFrame, MenuFrame, PlayerSnapshot,
};
