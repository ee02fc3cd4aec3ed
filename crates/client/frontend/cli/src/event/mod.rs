//! Event handling for CLI client.
//!
//! This module contains the event loop that coordinates keyboard input,
//! authority completions, and UI updates.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
