//! Map widget drawing the resolved grid around the player.
//!
//! Dungeons larger than the panel scroll so the player stays centered,
//! clamped at the map edges.

use client_frontend_core::GameFrame;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    game: &GameFrame,
    theme: &RatatuiTheme,
    show_coordinates: bool,
) {
    let title = if show_coordinates {
        format!("Map {}", game.player.position)
    } else {
        "Map".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(title);

    let inner = block.inner(area);
    let origin_x = viewport_origin(game.player.position.x, game.width, inner.width);
    let origin_y = viewport_origin(game.player.position.y, game.height, inner.height);

    let lines: Vec<Line> = game
        .cells
        .iter()
        .skip(origin_y)
        .take(usize::from(inner.height))
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .skip(origin_x)
                .take(usize::from(inner.width))
                .map(|cell| {
                    let (glyph, style) = theme.render_cell(cell);
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// First visible index along one axis so `center` sits mid-panel.
fn viewport_origin(center: i32, extent: u32, visible: u16) -> usize {
    let extent = extent as usize;
    let visible = usize::from(visible);
    if extent <= visible {
        return 0;
    }

    let center = usize::try_from(center.max(0)).unwrap_or(0);
    center.saturating_sub(visible / 2).min(extent - visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_maps_do_not_scroll() {
        assert_eq!(viewport_origin(3, 10, 20), 0);
        assert_eq!(viewport_origin(9, 10, 10), 0);
    }

    #[test]
    fn large_maps_center_then_clamp() {
        assert_eq!(viewport_origin(2, 100, 20), 0);
        assert_eq!(viewport_origin(50, 100, 20), 40);
        assert_eq!(viewport_origin(99, 100, 20), 80);
    }
}
