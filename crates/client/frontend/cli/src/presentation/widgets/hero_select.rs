//! Hero selection: class list, profile panel and the start indicator.

use client_frontend_core::{HeroEntry, HeroSelectFrame};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{footer, menu::capitalize, messages};
use crate::{config::UiConfig, presentation::theme::RatatuiTheme};

pub fn render(frame: &mut Frame, area: Rect, select: &HeroSelectFrame, ui: &UiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Title
            Constraint::Min(0),                          // Classes + profile
            Constraint::Length(ui.message_panel_height), // Messages
            Constraint::Length(2),                       // Footer
        ])
        .split(area);

    render_title(frame, chunks[0], select);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    render_classes(frame, columns[0], select);
    render_profile(frame, columns[1], select.selected());

    messages::render(frame, chunks[2], &select.messages, &RatatuiTheme::default());
    footer::render(frame, chunks[3], footer::HERO_SELECT_KEYS);
}

fn render_title(frame: &mut Frame, area: Rect, select: &HeroSelectFrame) {
    let mut spans = vec![
        Span::raw("Difficulty: "),
        Span::styled(
            capitalize(&select.difficulty.to_string()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Gender: "),
        Span::styled(
            capitalize(&select.gender.to_string()),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if select.loading {
        spans.push(Span::styled(
            " [ENTERING THE DUNGEON...]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Choose Your Hero "),
    );
    frame.render_widget(title, area);
}

fn render_classes(frame: &mut Frame, area: Rect, select: &HeroSelectFrame) {
    let items: Vec<ListItem> = select
        .heroes
        .iter()
        .map(|entry| {
            let glyph = entry
                .profile
                .as_ref()
                .map(|profile| format!("{} ", profile.emoji))
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(
                    if entry.selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(glyph),
                Span::styled(
                    entry.class.title(),
                    if entry.selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Classes"));
    frame.render_widget(list, area);
}

fn render_profile(frame: &mut Frame, area: Rect, entry: Option<&HeroEntry>) {
    let block = Block::default().borders(Borders::ALL).title("Profile");

    let Some(profile) = entry.and_then(|entry| entry.profile.as_ref()) else {
        let empty = Paragraph::new("Hero stats unavailable")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::raw(value),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", profile.emoji, profile.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        stat("HP:      ", profile.hp.to_string()),
        stat("Attack:  ", profile.attack.to_string()),
        stat("Defense: ", profile.defense.to_string()),
        stat("Magic:   ", profile.magic.to_string()),
        stat("Agility: ", profile.agility.to_string()),
        stat("Dice:    ", profile.dice()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
