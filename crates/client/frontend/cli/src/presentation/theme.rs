//! Ratatui glyphs and colors for the CLI.
//!
//! Map cells are always a single terminal column wide, so occupants are drawn
//! with ASCII glyphs rather than the roster's emoji.

use client_frontend_core::MessageKind;
use game_core::{CellView, Occupant, Theme, TileKind, TreasureKind};
use ratatui::style::{Color, Modifier, Style};

pub const FOG_GLYPH: char = '░';
pub const PLAYER_GLYPH: char = '@';

/// Colors that change with the dungeon's theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Palette {
    floor: Color,
    wall: Color,
    accent: Color,
}

/// Ratatui-specific theme for one dungeon.
#[derive(Clone, Copy, Debug)]
pub struct RatatuiTheme {
    palette: Palette,
}

impl RatatuiTheme {
    pub fn for_dungeon(theme: Theme) -> Self {
        let (floor, wall, accent) = match theme {
            Theme::Cave => (Color::DarkGray, Color::Gray, Color::Yellow),
            Theme::Castle => (Color::Gray, Color::White, Color::LightBlue),
            Theme::Crypt => (Color::DarkGray, Color::Magenta, Color::LightMagenta),
            Theme::Forest => (Color::Green, Color::LightGreen, Color::LightYellow),
            Theme::Ice => (Color::LightCyan, Color::Cyan, Color::White),
            Theme::Fire => (Color::Red, Color::LightRed, Color::Yellow),
        };
        Self {
            palette: Palette {
                floor,
                wall,
                accent,
            },
        }
    }

    /// Title and border color for this dungeon.
    pub fn accent(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    pub fn render_cell(&self, cell: &CellView) -> (char, Style) {
        match cell {
            CellView::Fog => (FOG_GLYPH, Style::default().fg(Color::DarkGray)),
            CellView::Wall => ('#', Style::default().fg(self.palette.wall)),
            CellView::Open {
                occupant: Some(occupant),
                ..
            } => self.render_occupant(occupant),
            CellView::Open {
                tile,
                occupant: None,
            } => self.render_tile(*tile),
        }
    }

    pub fn render_tile(&self, tile: TileKind) -> (char, Style) {
        match tile {
            TileKind::Floor => ('.', Style::default().fg(self.palette.floor)),
            TileKind::Wall => ('#', Style::default().fg(self.palette.wall)),
            TileKind::Door => ('+', Style::default().fg(Color::Green)),
            TileKind::Chest => ('c', Style::default().fg(Color::Gray)),
        }
    }

    pub fn render_occupant(&self, occupant: &Occupant) -> (char, Style) {
        match occupant {
            Occupant::Player => (
                PLAYER_GLYPH,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Occupant::Key { .. } => (
                'k',
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Occupant::Treasure { kind, .. } => {
                let (glyph, color) = match kind {
                    TreasureKind::Gold => ('$', Color::Yellow),
                    TreasureKind::Potion => ('!', Color::LightMagenta),
                    TreasureKind::Weapon => (')', Color::LightCyan),
                    TreasureKind::Armor => ('[', Color::Cyan),
                    TreasureKind::Other(_) => ('*', Color::White),
                };
                (glyph, Style::default().fg(color))
            }
            Occupant::Enemy { kind, .. } => (
                enemy_glyph(kind),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Occupant::Trap { .. } => ('^', Style::default().fg(Color::Magenta)),
            Occupant::Door { locked: true, .. } => ('+', Style::default().fg(Color::LightRed)),
            Occupant::Door { locked: false, .. } => ('/', Style::default().fg(Color::Green)),
            Occupant::Chest { locked: true, .. } => ('C', Style::default().fg(Color::Yellow)),
            Occupant::Chest { locked: false, .. } => ('c', Style::default().fg(Color::Gray)),
        }
    }

    pub fn style_health(&self, current: i32, maximum: i32) -> Style {
        if maximum <= 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = i64::from(current.max(0)) * 100 / i64::from(maximum);
        let color = match percent {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    pub fn style_message(&self, kind: MessageKind) -> Style {
        match kind {
            MessageKind::Arrival => self.accent(),
            MessageKind::Exploration => Style::default().fg(Color::White),
            MessageKind::Combat => Style::default().fg(Color::Yellow),
            MessageKind::Defeat => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            MessageKind::Failure => Style::default().fg(Color::LightRed),
        }
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::for_dungeon(Theme::default())
    }
}

/// First letter of the enemy type, `e` when the type is blank.
fn enemy_glyph(kind: &str) -> char {
    kind.chars()
        .find(|ch| ch.is_ascii_alphabetic())
        .map(|ch| ch.to_ascii_lowercase())
        .unwrap_or('e')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_glyph_uses_type_initial() {
        assert_eq!(enemy_glyph("Goblin"), 'g');
        assert_eq!(enemy_glyph("  orc"), 'o');
        assert_eq!(enemy_glyph(""), 'e');
    }

    #[test]
    fn fog_hides_everything() {
        let theme = RatatuiTheme::default();
        assert_eq!(theme.render_cell(&CellView::Fog).0, FOG_GLYPH);
    }

    #[test]
    fn occupant_wins_over_tile() {
        let theme = RatatuiTheme::for_dungeon(Theme::Crypt);
        let cell = CellView::Open {
            tile: TileKind::Floor,
            occupant: Some(Occupant::Door {
                id: "d1".into(),
                locked: true,
            }),
        };
        assert_eq!(theme.render_cell(&cell).0, '+');
    }

    #[test]
    fn health_colors_by_ratio() {
        let theme = RatatuiTheme::default();
        assert_eq!(theme.style_health(100, 100).fg, Some(Color::Green));
        assert_eq!(theme.style_health(30, 100).fg, Some(Color::LightRed));
        assert_eq!(theme.style_health(-5, 100).fg, Some(Color::Red));
        assert_eq!(theme.style_health(0, 0).fg, Some(Color::Gray));
    }

    #[test]
    fn huge_health_values_do_not_overflow() {
        let theme = RatatuiTheme::default();
        assert_eq!(theme.style_health(i32::MAX, i32::MAX).fg, Some(Color::Green));
        assert_eq!(theme.style_health(30_000_000, 100_000_000).fg, Some(Color::LightRed));
    }

    #[test]
    fn arrival_lines_use_the_dungeon_accent() {
        let theme = RatatuiTheme::for_dungeon(Theme::Ice);
        assert_eq!(theme.style_message(MessageKind::Arrival), theme.accent());
    }
}
