//! Per-session player state.
//!
//! [`GameState`] is the authority's session record. The client treats every
//! numeric field as authoritative and replaces the whole snapshot on refresh;
//! the only local edits are discovery reveals, local-grid moves and the
//! transient HP patch applied between combat rounds.
mod common;
mod inventory;

use std::collections::BTreeSet;

pub use common::{Direction, Position};
pub use inventory::InventoryItem;

use crate::config::GameConfig;
use crate::discovery::DiscoveryMap;
use crate::dungeon::Dungeon;
use crate::error::StateError;
use crate::hero::{HeroClass, HeroGender, HeroProfile};

/// Mutable snapshot of one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dungeon_id: String,

    pub player_x: i32,
    pub player_y: i32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub player_hp: i32,
    /// Zero when the authority does not report a separate maximum.
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_max_hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_attack: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_defense: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_magic: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_agility: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub player_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_exp: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub hero_class: Option<HeroClass>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hero_gender: Option<HeroGender>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hero_stats: Option<HeroProfile>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub moves: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<InventoryItem>,
    pub discovered_tiles: DiscoveryMap,

    #[cfg_attr(feature = "serde", serde(default))]
    pub collected_treasures: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub opened_chests: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub collected_keys: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defeated_enemies: BTreeSet<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub in_combat: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_enemy: Option<String>,
}

impl GameState {
    /// Session placed on the dungeon's start cell with only that cell
    /// discovered, the way the authority opens a new game.
    pub fn fresh(id: impl Into<String>, dungeon: &Dungeon) -> Self {
        let start = dungeon.player_start();
        let mut discovered_tiles = DiscoveryMap::hidden(dungeon.dimensions());
        discovered_tiles.discover(start);

        Self {
            id: id.into(),
            dungeon_id: dungeon.id().to_string(),
            player_x: start.x,
            player_y: start.y,
            player_hp: 0,
            player_max_hp: 0,
            player_attack: 0,
            player_defense: 0,
            player_magic: 0,
            player_agility: 0,
            player_level: GameConfig::DEFAULT_PLAYER_LEVEL,
            player_exp: 0,
            hero_class: None,
            hero_gender: None,
            hero_stats: None,
            moves: 0,
            inventory: Vec::new(),
            discovered_tiles,
            collected_treasures: BTreeSet::new(),
            opened_chests: BTreeSet::new(),
            collected_keys: BTreeSet::new(),
            defeated_enemies: BTreeSet::new(),
            in_combat: false,
            combat_enemy: None,
        }
    }

    /// Copies the base stats of a roster profile into the session.
    pub fn with_hero(mut self, class: HeroClass, gender: HeroGender, profile: HeroProfile) -> Self {
        self.player_hp = profile.hp;
        self.player_max_hp = profile.hp;
        self.player_attack = profile.attack;
        self.player_defense = profile.defense;
        self.player_magic = profile.magic;
        self.player_agility = profile.agility;
        self.hero_class = Some(class);
        self.hero_gender = Some(gender);
        self.hero_stats = Some(profile);
        self
    }

    pub fn player_position(&self) -> Position {
        Position::new(self.player_x, self.player_y)
    }

    pub fn set_player_position(&mut self, position: Position) {
        self.player_x = position.x;
        self.player_y = position.y;
    }

    /// Best known maximum HP: the reported maximum, the hero's base HP, or
    /// the current HP, whichever is largest.
    pub fn max_hp(&self) -> i32 {
        let base = self.hero_stats.as_ref().map_or(0, |profile| profile.hp);
        self.player_max_hp.max(base).max(self.player_hp)
    }

    pub fn is_consumed_treasure(&self, id: &str) -> bool {
        self.collected_treasures.contains(id)
    }

    pub fn is_opened_chest(&self, id: &str) -> bool {
        self.opened_chests.contains(id)
    }

    pub fn is_collected_key(&self, id: &str) -> bool {
        self.collected_keys.contains(id)
    }

    pub fn is_defeated_enemy(&self, id: &str) -> bool {
        self.defeated_enemies.contains(id)
    }

    /// Checks the snapshot against the dungeon it claims to belong to.
    pub fn validate_against(&self, dungeon: &Dungeon) -> Result<(), StateError> {
        let expected = dungeon.dimensions();
        let actual = self.discovered_tiles.dimensions();
        if expected != actual {
            return Err(StateError::DiscoveryDimensions { expected, actual });
        }

        let position = self.player_position();
        match dungeon.tile(position) {
            None => Err(StateError::PlayerOutOfBounds { position }),
            Some(tile) if tile.is_wall() => Err(StateError::PlayerOnWall { position, tile }),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
fn default_level() -> u32 {
    GameConfig::DEFAULT_PLAYER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{DungeonLayout, TileKind};

    fn dungeon() -> Dungeon {
        let mut layout = DungeonLayout::filled("d", 5, 5, TileKind::Floor);
        layout.player_start = Position::new(2, 2);
        layout.set_tile(Position::new(0, 0), TileKind::Wall);
        Dungeon::from_layout(layout).unwrap()
    }

    #[test]
    fn fresh_session_discovers_only_the_start() {
        let dungeon = dungeon();
        let state = GameState::fresh("g", &dungeon);

        assert_eq!(state.player_position(), Position::new(2, 2));
        assert_eq!(state.discovered_tiles.count(), 1);
        assert!(state.discovered_tiles.is_discovered(Position::new(2, 2)));
        assert_eq!(state.validate_against(&dungeon), Ok(()));
    }

    #[test]
    fn validation_catches_player_on_wall() {
        let dungeon = dungeon();
        let mut state = GameState::fresh("g", &dungeon);
        state.set_player_position(Position::ORIGIN);

        assert!(matches!(
            state.validate_against(&dungeon),
            Err(StateError::PlayerOnWall { .. })
        ));

        state.set_player_position(Position::new(7, 0));
        assert!(matches!(
            state.validate_against(&dungeon),
            Err(StateError::PlayerOutOfBounds { .. })
        ));
    }

    #[test]
    fn validation_catches_mismatched_discovery() {
        let dungeon = dungeon();
        let mut state = GameState::fresh("g", &dungeon);
        state.discovered_tiles =
            DiscoveryMap::hidden(crate::dungeon::GridDimensions::new(4, 5));

        assert!(matches!(
            state.validate_against(&dungeon),
            Err(StateError::DiscoveryDimensions { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_minimal_authority_session() {
        let json = r#"{
            "id": "game-1",
            "dungeon_id": "d",
            "player_x": 1,
            "player_y": 0,
            "player_hp": 100,
            "player_attack": 10,
            "player_defense": 5,
            "inventory": ["gold"],
            "discovered_tiles": [[false, true], [false, false]],
            "defeated_enemies": [],
            "collected_treasures": ["t1"],
            "moves": 3
        }"#;

        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.player_level, 1);
        assert_eq!(state.max_hp(), 100);
        assert!(state.is_consumed_treasure("t1"));
        assert!(!state.in_combat);
        assert_eq!(state.inventory[0].name, "gold");
        assert_eq!(state.discovered_tiles.count(), 1);
    }
}
