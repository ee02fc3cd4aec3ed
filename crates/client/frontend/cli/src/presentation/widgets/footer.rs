//! Footer line listing key bindings.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const MENU_KEYS: &[(&str, &str)] = &[
    ("←/→", "Difficulty"),
    ("1-3", "Pick"),
    ("Enter", "Choose hero"),
    ("q", "Quit"),
];

pub const HERO_SELECT_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "Class"),
    ("g/Tab", "Gender"),
    ("Enter", "Start"),
    ("Esc", "Menu"),
    ("q", "Quit"),
];

pub const GAME_KEYS: &[(&str, &str)] = &[
    ("wasd/←↑↓→", "Move"),
    ("1", "Attack"),
    ("2", "Flee"),
    ("i", "Inventory"),
    ("Esc", "Menu"),
    ("q", "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::Gray),
        ));
    }

    let footer =
        Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
