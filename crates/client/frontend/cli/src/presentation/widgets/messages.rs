//! Message log panel.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

/// Render `messages` oldest first; callers pass only what fits.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = messages
        .iter()
        .map(|entry| {
            let mut spans = Vec::with_capacity(3);
            if let Some(moves) = entry.moves {
                spans.push(Span::styled(
                    format!("[{moves}] "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                entry.text.as_str(),
                theme.style_message(entry.kind),
            ));
            if entry.repeats > 1 {
                spans.push(Span::styled(
                    format!(" (x{})", entry.repeats),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
