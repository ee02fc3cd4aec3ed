//! Player stats widget displaying health, attributes and hero information.

use client_frontend_core::GameFrame;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::menu::capitalize;
use crate::presentation::theme::RatatuiTheme;

/// Render the player stats panel.
pub fn render(frame: &mut Frame, area: Rect, game: &GameFrame, theme: &RatatuiTheme) {
    let player = &game.player;
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::White));

    let mut lines = Vec::new();

    let hero = match (&player.emoji, &player.name) {
        (Some(emoji), Some(name)) => format!("{emoji} {name}"),
        (None, Some(name)) => name.clone(),
        _ => player
            .class
            .map(|class| class.title().to_string())
            .unwrap_or_else(|| "Adventurer".to_string()),
    };
    lines.push(Line::from(Span::styled(hero, theme.accent())));
    if let (Some(class), Some(gender)) = (player.class, player.gender) {
        lines.push(Line::from(Span::styled(
            format!("{} {}", capitalize(&gender.to_string()), class.title()),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        label("Health: "),
        Span::styled(
            format!("{}/{}", player.hp, player.max_hp),
            theme.style_health(player.hp, player.max_hp),
        ),
    ]));
    lines.push(Line::from(vec![
        label("Level: "),
        Span::raw(format!("{} ({} exp)", player.level, player.exp)),
    ]));
    lines.push(Line::from(vec![
        label("Attack: "),
        Span::raw(player.attack.to_string()),
    ]));
    lines.push(Line::from(vec![
        label("Defense: "),
        Span::raw(player.defense.to_string()),
    ]));
    lines.push(Line::from(vec![
        label("Magic: "),
        Span::raw(player.magic.to_string()),
    ]));
    lines.push(Line::from(vec![
        label("Agility: "),
        Span::raw(player.agility.to_string()),
    ]));
    if let Some(dice) = &player.dice {
        lines.push(Line::from(vec![label("Dice: "), Span::raw(dice.as_str())]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        label("Items: "),
        Span::raw(game.inventory.len().to_string()),
    ]));

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Player"));

    frame.render_widget(paragraph, area);
}
