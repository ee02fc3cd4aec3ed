//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_authority::CombatAction;
use client_frontend_core::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{Difficulty, Direction};

/// Which key map applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    HeroSelect,
    Game,
}

impl Screen {
    pub fn of(view: &View) -> Self {
        match view {
            View::Menu(_) => Screen::Menu,
            View::HeroSelect(_) => Screen::HeroSelect,
            View::Game(_) => Screen::Game,
        }
    }
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Return to the menu.
    Back,
    /// Accept the current selection (menu, hero select).
    Confirm,
    CycleDifficulty { forward: bool },
    SelectDifficulty(Difficulty),
    CycleClass { forward: bool },
    ToggleGender,
    Move(Direction),
    Combat(CombatAction),
    ToggleInventory,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into controller commands for the active screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, screen: Screen) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Enter => match screen {
                Screen::Game => KeyAction::None,
                _ => KeyAction::Confirm,
            },
            KeyCode::Tab if screen == Screen::HeroSelect => KeyAction::ToggleGender,
            KeyCode::Char(ch) => self.handle_char(ch.to_ascii_lowercase(), screen),
            code => match (direction_of(code), screen) {
                (Some(direction), Screen::Menu) => cycle_difficulty(direction),
                (Some(direction), Screen::HeroSelect) => cycle_class(direction),
                (Some(direction), Screen::Game) => KeyAction::Move(direction),
                (None, _) => KeyAction::None,
            },
        }
    }

    fn handle_char(&self, ch: char, screen: Screen) -> KeyAction {
        if ch == 'q' {
            return KeyAction::Quit;
        }

        match screen {
            Screen::Menu => match ch {
                '1' => KeyAction::SelectDifficulty(Difficulty::Easy),
                '2' => KeyAction::SelectDifficulty(Difficulty::Medium),
                '3' => KeyAction::SelectDifficulty(Difficulty::Hard),
                _ => wasd(ch).map_or(KeyAction::None, cycle_difficulty),
            },
            Screen::HeroSelect => match ch {
                'g' => KeyAction::ToggleGender,
                _ => wasd(ch).map_or(KeyAction::None, cycle_class),
            },
            Screen::Game => match ch {
                'i' => KeyAction::ToggleInventory,
                '1' => KeyAction::Combat(CombatAction::Attack),
                '2' => KeyAction::Combat(CombatAction::Flee),
                _ => wasd(ch).map_or(KeyAction::None, KeyAction::Move),
            },
        }
    }
}

fn wasd(ch: char) -> Option<Direction> {
    match ch {
        'w' => Some(Direction::Up),
        'a' => Some(Direction::Left),
        's' => Some(Direction::Down),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

// Difficulties are laid out horizontally, hero classes vertically.
fn cycle_difficulty(direction: Direction) -> KeyAction {
    match direction {
        Direction::Left => KeyAction::CycleDifficulty { forward: false },
        Direction::Right => KeyAction::CycleDifficulty { forward: true },
        _ => KeyAction::None,
    }
}

fn cycle_class(direction: Direction) -> KeyAction {
    match direction {
        Direction::Up | Direction::Left => KeyAction::CycleClass { forward: false },
        Direction::Down | Direction::Right => KeyAction::CycleClass { forward: true },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('w')), Screen::Game),
            KeyAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('D')), Screen::Game),
            KeyAction::Move(Direction::Right)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), Screen::Game),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), Screen::Game),
            KeyAction::Move(Direction::Down)
        );
    }

    #[test]
    fn maps_combat_and_inventory_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), Screen::Game),
            KeyAction::Combat(CombatAction::Attack)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('2')), Screen::Game),
            KeyAction::Combat(CombatAction::Flee)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('i')), Screen::Game),
            KeyAction::ToggleInventory
        );
    }

    #[test]
    fn same_key_means_different_things_per_screen() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), Screen::Menu),
            KeyAction::SelectDifficulty(Difficulty::Easy)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Right), Screen::Menu),
            KeyAction::CycleDifficulty { forward: true }
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), Screen::Menu),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), Screen::HeroSelect),
            KeyAction::CycleClass { forward: false }
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), Screen::HeroSelect),
            KeyAction::ToggleGender
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Screen::HeroSelect),
            KeyAction::Confirm
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Screen::Game),
            KeyAction::None
        );
    }

    #[test]
    fn maps_back_and_quit() {
        let handler = InputHandler::new();
        for screen in [Screen::Menu, Screen::HeroSelect, Screen::Game] {
            assert_eq!(handler.handle_key(key(KeyCode::Esc), screen), KeyAction::Back);
            assert_eq!(
                handler.handle_key(key(KeyCode::Char('q')), screen),
                KeyAction::Quit
            );
        }

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, Screen::Game), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), Screen::Game),
            KeyAction::None
        );
    }
}
