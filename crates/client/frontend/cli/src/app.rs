//! Glue code tying the controller, the authority, and the terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use client_authority::GameAuthority;
use client_frontend_core::{Frontend, FrontendConfig, GameController};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal::TerminalGuard;

/// Terminal frontend implementing [`Frontend`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(
        &mut self,
        controller: GameController,
        authority: Arc<dyn GameAuthority>,
    ) -> Result<()> {
        tracing::info!(
            "CLI frontend starting (movement: {}, authority: {})",
            controller.movement(),
            authority.name()
        );

        let event_loop = EventLoop::new(
            controller,
            authority,
            self.frontend_config.channels.completion_buffer,
            self.cli_config.clone(),
        );

        let mut screen = TerminalGuard::enter()?;
        let controller = event_loop.run(screen.tui()).await?;
        drop(screen);

        tracing::info!(
            "CLI frontend exiting from the {} screen",
            controller.view().name()
        );

        Ok(())
    }
}
