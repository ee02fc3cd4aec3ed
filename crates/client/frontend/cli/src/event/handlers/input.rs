//! Input handling (keyboard and controller commands).

use anyhow::Result;
use client_frontend_core::{ControlError, Dispatch};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    input::{KeyAction, Screen},
    presentation::terminal::Tui,
};

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the controller.
    ///
    /// Returns `true` when the loop should stop.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let screen = Screen::of(self.controller.view());
        let action = self.input.handle_key(key, screen);

        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested from the {} screen", self.controller.view().name());
                return Ok(true);
            }
            KeyAction::None => return Ok(false),
            _ => {}
        }

        if let Err(e) = self.apply_action(action) {
            if e.is_silent() {
                tracing::trace!(?action, "{}", e);
            } else {
                tracing::warn!(?action, "{}", e);
            }
        }

        self.render(terminal)?;
        Ok(false)
    }

    fn apply_action(&mut self, action: KeyAction) -> Result<(), ControlError> {
        match action {
            KeyAction::Back => self.controller.back_to_menu(),
            KeyAction::Confirm => match Screen::of(self.controller.view()) {
                Screen::Menu => self.controller.enter_hero_select(),
                Screen::HeroSelect => {
                    let ticket = self.controller.prepare_start()?;
                    self.spawn_request(ticket);
                    Ok(())
                }
                Screen::Game => Ok(()),
            },
            KeyAction::CycleDifficulty { forward } => {
                self.controller.cycle_difficulty(forward).map(|_| ())
            }
            KeyAction::SelectDifficulty(difficulty) => {
                self.controller.select_difficulty(difficulty)
            }
            KeyAction::CycleClass { forward } => self.controller.cycle_class(forward),
            KeyAction::ToggleGender => self.controller.toggle_gender(),
            KeyAction::Move(direction) => {
                match self.controller.prepare_move(direction)? {
                    Dispatch::Local(_) => {}
                    Dispatch::Remote(ticket) => self.spawn_request(ticket),
                }
                Ok(())
            }
            KeyAction::Combat(combat) => {
                let ticket = self.controller.prepare_combat(combat)?;
                self.spawn_request(ticket);
                Ok(())
            }
            KeyAction::ToggleInventory => self.controller.toggle_inventory().map(|_| ()),
            KeyAction::Quit | KeyAction::None => Ok(()),
        }
    }
}
