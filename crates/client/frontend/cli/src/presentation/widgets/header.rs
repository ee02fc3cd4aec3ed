//! Header widget displaying the dungeon and progress summary.

use client_frontend_core::GameFrame;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::menu::capitalize;
use crate::presentation::theme::RatatuiTheme;

/// Render the header panel with theme, difficulty, move count and status.
pub fn render(frame: &mut Frame, area: Rect, game: &GameFrame, theme: &RatatuiTheme) {
    let status = if game.defeated {
        " [DEFEATED]"
    } else if game.combat.is_some() {
        " [COMBAT]"
    } else if game.busy {
        " [...]"
    } else {
        ""
    };

    let text = vec![Line::from(vec![
        Span::raw("Dungeon: "),
        Span::styled(capitalize(&game.theme.to_string()), theme.accent()),
        Span::raw(" | Difficulty: "),
        Span::styled(
            capitalize(&game.difficulty.to_string()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Moves: "),
        Span::styled(
            game.player.moves.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Explored: "),
        Span::styled(
            format!("{}/{}", game.discovered, game.width * game.height),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(
            status,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent())
            .title("Game"),
    );

    frame.render_widget(paragraph, area);
}
