//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::Frame;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render a frame freshly derived from the controller.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let frame = Frame::from_controller(&self.controller, self.cli_config.ui.message_lines());

        let ctx = ui::RenderContext {
            frame: &frame,
            ui: &self.cli_config.ui,
        };

        ui::render(terminal, &ctx)
    }
}
