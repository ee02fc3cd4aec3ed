//! Main menu: title banner and difficulty picker.

use client_frontend_core::MenuFrame;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::footer;

pub fn render(frame: &mut Frame, area: Rect, menu: &MenuFrame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Difficulty options
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_options(frame, chunks[1], menu);
    footer::render(frame, chunks[2], footer::MENU_KEYS);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "DUNGEON",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Explore. Loot. Survive.",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_options(frame: &mut Frame, area: Rect, menu: &MenuFrame) {
    let items: Vec<ListItem> = menu
        .options
        .iter()
        .enumerate()
        .map(|(idx, difficulty)| {
            let is_selected = *difficulty == menu.selected;
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{}. ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    capitalize(&difficulty.to_string()),
                    if is_selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Cyan)
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Choose Difficulty ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
