//! Screen-level state machine.
//!
//! ```text
//!   Menu ──► HeroSelect ──► Game
//!    ▲           │           │
//!    └───────────┴───────────┘  back to menu
//! ```
use game_core::{Difficulty, HeroClass, HeroGender};

use crate::session::Session;

/// The active screen and the data only that screen owns.
#[derive(Clone, Debug)]
pub enum View {
    Menu(MenuState),
    HeroSelect(HeroSelectState),
    Game(Box<Session>),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Menu(_) => "menu",
            View::HeroSelect(_) => "hero-select",
            View::Game(_) => "game",
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            View::Game(session) => Some(session),
            _ => None,
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            View::Game(session) => Some(session),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSelectState {
    pub difficulty: Difficulty,
    pub class: HeroClass,
    pub gender: HeroGender,
    /// Set while the generate + start round trip is in flight.
    pub loading: bool,
}

impl HeroSelectState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            class: HeroClass::ALL[0],
            gender: HeroGender::default(),
            loading: false,
        }
    }

    pub(crate) fn cycle_class(&mut self, forward: bool) {
        let count = HeroClass::ALL.len();
        let current = HeroClass::ALL
            .iter()
            .position(|class| *class == self.class)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.class = HeroClass::ALL[next];
    }
}
