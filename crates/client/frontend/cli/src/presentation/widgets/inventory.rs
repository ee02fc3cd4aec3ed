//! Inventory overlay.

use game_core::InventoryItem;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, items: &[InventoryItem]) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightCyan))
        .title(format!(" Inventory ({}) ", items.len()))
        .title_alignment(Alignment::Center);

    if items.is_empty() {
        let empty = Paragraph::new("Your pack is empty.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let mut spans = Vec::with_capacity(2);
            if item.has_emoji() {
                spans.push(Span::raw(format!("{} ", item.emoji)));
            } else {
                spans.push(Span::styled("- ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::raw(item.name.as_str()));
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(rows).block(block), area);
}
