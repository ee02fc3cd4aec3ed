//! Terminal UI frontend for the Dungeon game.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the `GameController` and the authority from the composition root
//! - Maps key presses onto controller inputs
//! - Runs authority requests on spawned tasks and feeds completions back
//! - Renders a fresh view-model frame after every change

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
