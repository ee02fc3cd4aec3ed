//! Widgets composing the terminal screens.
pub mod combat_banner;
pub mod footer;
pub mod header;
pub mod hero_select;
pub mod inventory;
pub mod map;
pub mod menu;
pub mod messages;
pub mod player_stats;
