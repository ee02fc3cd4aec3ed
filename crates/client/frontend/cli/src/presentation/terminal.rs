//! Alternate-screen lifecycle for the dungeon view.
use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen with a hidden cursor.
///
/// Dropping the guard is the only way the shell gets its screen back, so an
/// early return, an error or a panic inside the loop all restore it exactly
/// once.
pub struct TerminalGuard {
    tui: Tui,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let tui = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match tui {
            Ok(tui) => Ok(Self { tui }),
            Err(e) => {
                let _ = leave();
                Err(e).context("failed to enter the alternate screen")
            }
        }
    }

    pub fn tui(&mut self) -> &mut Tui {
        &mut self.tui
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = leave() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

fn leave() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}
