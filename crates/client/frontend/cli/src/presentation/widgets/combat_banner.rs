//! Banner shown while fighting or after defeat.

use client_frontend_core::GameFrame;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, game: &GameFrame) {
    let (line, color) = if game.defeated {
        (
            Line::from(Span::styled(
                "You have been defeated. Press Esc to return to the menu.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Color::Red,
        )
    } else if let Some(combat) = &game.combat {
        let enemy = combat.enemy_kind.as_deref().unwrap_or("an enemy");
        let mut spans = vec![
            Span::styled(
                format!("Fighting {enemy}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(attack) = combat.enemy_attack {
            spans.push(Span::raw(format!(" (attack {attack})")));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[1]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Attack  "));
        spans.push(Span::styled("[2]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Flee"));
        (Line::from(spans), Color::LightRed)
    } else {
        return;
    };

    let banner = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(banner, area);
}
