//! Event loop orchestrating user input, authority completions, and rendering.
//!
//! This module coordinates three concerns:
//! - Keyboard input, translated into [`GameController`] commands
//! - Authority requests, executed on spawned tasks and returned as completions
//! - Rendering a fresh view-model frame after every change

use std::sync::Arc;

use anyhow::Result;
use client_authority::GameAuthority;
use client_frontend_core::{Completion, GameController};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the controller for the lifetime of the UI.
pub struct EventLoop {
    pub(crate) controller: GameController,
    pub(crate) authority: Arc<dyn GameAuthority>,
    pub(crate) input: InputHandler,
    pub(crate) tx_completion: mpsc::Sender<Completion>,
    pub(crate) rx_completion: mpsc::Receiver<Completion>,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        controller: GameController,
        authority: Arc<dyn GameAuthority>,
        completion_buffer: usize,
        cli_config: CliConfig,
    ) -> Self {
        let (tx_completion, rx_completion) = mpsc::channel(completion_buffer.max(1));
        Self {
            controller,
            authority,
            input: InputHandler::new(),
            tx_completion,
            rx_completion,
            cli_config,
        }
    }

    /// Runs until the player quits and hands the controller back.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<GameController> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                Some(completion) = self.rx_completion.recv() => {
                    self.handle_completion(completion);
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.controller)
    }
}
