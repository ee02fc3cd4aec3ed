//! UI rendering entry point.
//!
//! Routes each view-model [`Frame`] to the widgets that draw its screen.
use anyhow::Result;
use client_frontend_core::{Frame, GameFrame};
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    config::UiConfig,
    presentation::{theme::RatatuiTheme, widgets},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub frame: &'a Frame,
    pub ui: &'a UiConfig,
}

/// Render the terminal UI for the current screen.
///
/// - **Menu**: title banner with the difficulty picker
/// - **HeroSelect**: class list, profile panel and messages
/// - **Game**: map, stats, messages, optional combat banner and inventory overlay
pub fn render<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| match ctx.frame {
        Frame::Menu(menu) => widgets::menu::render(frame, frame.area(), menu),
        Frame::HeroSelect(select) => {
            widgets::hero_select::render(frame, frame.area(), select, ctx.ui);
        }
        Frame::Game(game) => render_game_ui(frame, game, ctx.ui),
    })?;

    Ok(())
}

/// Render the game screen (header, banner, map + stats, messages, footer).
fn render_game_ui(frame: &mut ratatui::Frame, game: &GameFrame, ui: &UiConfig) {
    let theme = RatatuiTheme::for_dungeon(game.theme);
    let show_banner = game.combat.is_some() || game.defeated;

    let mut constraints = vec![Constraint::Length(3)]; // Header
    if show_banner {
        constraints.push(Constraint::Length(3)); // Combat / defeat banner
    }
    constraints.extend([
        Constraint::Min(0),                          // Map + stats
        Constraint::Length(ui.message_panel_height), // Messages
        Constraint::Length(2),                       // Footer
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut rows = chunks.iter().copied();
    let mut next = || rows.next().unwrap_or_default();

    widgets::header::render(frame, next(), game, &theme);
    if show_banner {
        widgets::combat_banner::render(frame, next(), game);
    }

    let body = next();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(body);
    widgets::map::render(frame, columns[0], game, &theme, ui.show_coordinates);
    widgets::player_stats::render(frame, columns[1], game, &theme);

    widgets::messages::render(frame, next(), &game.messages, &theme);
    widgets::footer::render(frame, next(), widgets::footer::GAME_KEYS);

    if game.show_inventory {
        let area = centered_rect(50, 60, body);
        widgets::inventory::render(frame, area, &game.inventory);
    }
}

/// Create a centered rectangle for modal overlays.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_authority::mock::{MockAuthority, sample_roster};
    use client_frontend_core::{FrontendConfig, GameController, execute};
    use ratatui::backend::TestBackend;

    fn draw(controller: &GameController) -> String {
        let ui = UiConfig::default();
        let frame = Frame::from_controller(controller, ui.message_lines());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        render(&mut terminal, &RenderContext { frame: &frame, ui: &ui }).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn menu_lists_difficulties() {
        let controller = GameController::new(&FrontendConfig::default(), sample_roster());
        let screen = draw(&controller);

        assert!(screen.contains("DUNGEON"));
        assert!(screen.contains("Easy"));
        assert!(screen.contains("Hard"));
    }

    #[tokio::test]
    async fn game_screen_shows_player_and_fog() {
        let authority = MockAuthority::new();
        let mut controller = GameController::new(&FrontendConfig::default(), sample_roster());
        controller.enter_hero_select().unwrap();
        let ticket = controller.prepare_start().unwrap();
        controller.apply(execute(&authority, ticket).await).unwrap();

        controller.toggle_inventory().unwrap();
        let screen = draw(&controller);

        assert!(screen.contains('@'));
        assert!(screen.contains(crate::presentation::theme::FOG_GLYPH));
        assert!(screen.contains("Inventory (0)"));
        assert!(screen.contains("You enter a"));
    }
}
