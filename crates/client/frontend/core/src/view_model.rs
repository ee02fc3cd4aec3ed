//! View-model snapshots derived from the controller.
//!
//! Frames are rebuilt from the dungeon and session state every time they are
//! requested; nothing here is cached between frames.
use game_core::{
    CellView, Difficulty, HeroClass, HeroGender, HeroProfile, InventoryItem, Position, Theme,
    resolve_grid,
};

use crate::controller::GameController;
use crate::message::MessageEntry;
use crate::session::Session;
use crate::view::View;

/// High-level snapshot used by presentation layers.
#[derive(Clone, Debug)]
pub enum Frame {
    Menu(MenuFrame),
    HeroSelect(HeroSelectFrame),
    Game(Box<GameFrame>),
}

impl Frame {
    pub fn from_controller(controller: &GameController, message_limit: usize) -> Self {
        match controller.view() {
            View::Menu(menu) => Frame::Menu(MenuFrame {
                selected: menu.difficulty,
                options: Difficulty::ALL,
            }),
            View::HeroSelect(select) => Frame::HeroSelect(HeroSelectFrame {
                difficulty: select.difficulty,
                gender: select.gender,
                loading: select.loading,
                heroes: HeroClass::ALL
                    .iter()
                    .map(|&class| HeroEntry {
                        class,
                        selected: class == select.class,
                        profile: controller.roster().profile(class, select.gender).cloned(),
                    })
                    .collect(),
                messages: collect_messages(controller, message_limit),
            }),
            View::Game(session) => Frame::Game(Box::new(GameFrame::from_session(
                session,
                controller.is_busy(),
                collect_messages(controller, message_limit),
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MenuFrame {
    pub selected: Difficulty,
    pub options: [Difficulty; 3],
}

#[derive(Clone, Debug)]
pub struct HeroSelectFrame {
    pub difficulty: Difficulty,
    pub gender: HeroGender,
    pub loading: bool,
    pub heroes: Vec<HeroEntry>,
    pub messages: Vec<MessageEntry>,
}

impl HeroSelectFrame {
    pub fn selected(&self) -> Option<&HeroEntry> {
        self.heroes.iter().find(|entry| entry.selected)
    }
}

/// One row of the hero picker. `profile` is `None` when the roster is empty.
#[derive(Clone, Debug)]
pub struct HeroEntry {
    pub class: HeroClass,
    pub selected: bool,
    pub profile: Option<HeroProfile>,
}

#[derive(Clone, Debug)]
pub struct GameFrame {
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub width: u32,
    pub height: u32,
    /// Resolved cells, `cells[y][x]`.
    pub cells: Vec<Vec<CellView>>,
    pub player: PlayerSnapshot,
    pub inventory: Vec<InventoryItem>,
    pub show_inventory: bool,
    pub combat: Option<CombatSnapshot>,
    pub defeated: bool,
    pub busy: bool,
    pub discovered: usize,
    pub messages: Vec<MessageEntry>,
}

impl GameFrame {
    pub fn from_session(session: &Session, busy: bool, messages: Vec<MessageEntry>) -> Self {
        let dungeon = session.dungeon();
        let state = session.state();

        let combat = state.in_combat.then(|| {
            let enemy = state
                .combat_enemy
                .as_deref()
                .and_then(|id| dungeon.enemy(id));
            CombatSnapshot {
                enemy_id: state.combat_enemy.clone(),
                enemy_kind: enemy.map(|enemy| enemy.kind.clone()),
                enemy_attack: enemy.map(|enemy| enemy.attack),
            }
        });

        Self {
            theme: dungeon.theme(),
            difficulty: dungeon.difficulty(),
            width: dungeon.width(),
            height: dungeon.height(),
            cells: resolve_grid(dungeon, state),
            player: PlayerSnapshot::from_session(session),
            inventory: state.inventory.clone(),
            show_inventory: session.show_inventory(),
            combat,
            defeated: session.is_defeated(),
            busy,
            discovered: state.discovered_tiles.count(),
            messages,
        }
    }

    pub fn cell(&self, position: Position) -> Option<&CellView> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        self.cells
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
    }
}

#[derive(Clone, Debug)]
pub struct PlayerSnapshot {
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub agility: i32,
    pub level: u32,
    pub exp: u32,
    pub moves: u32,
    pub class: Option<HeroClass>,
    pub gender: Option<HeroGender>,
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub dice: Option<String>,
}

impl PlayerSnapshot {
    fn from_session(session: &Session) -> Self {
        let state = session.state();
        let profile = state.hero_stats.as_ref();
        Self {
            position: state.player_position(),
            hp: state.player_hp,
            max_hp: state.max_hp(),
            attack: state.player_attack,
            defense: state.player_defense,
            magic: state.player_magic,
            agility: state.player_agility,
            level: state.player_level,
            exp: state.player_exp,
            moves: state.moves,
            class: state.hero_class,
            gender: state.hero_gender,
            name: profile.map(|profile| profile.name.clone()),
            emoji: profile.map(|profile| profile.emoji.clone()),
            dice: profile.map(HeroProfile::dice),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CombatSnapshot {
    pub enemy_id: Option<String>,
    pub enemy_kind: Option<String>,
    pub enemy_attack: Option<i32>,
}

fn collect_messages(controller: &GameController, limit: usize) -> Vec<MessageEntry> {
    let mut messages: Vec<_> = controller.messages().recent(limit).cloned().collect();
    messages.reverse();
    messages
}
