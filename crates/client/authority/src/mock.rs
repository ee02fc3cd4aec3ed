//! In-memory authority for tests and offline runs.
//!
//! Keeps dungeons and sessions in process memory and resolves moves and
//! combat with fixed, deterministic rules so that controller behavior can be
//! asserted exactly. Every call is counted per [`Operation`], and a failure
//! can be queued for the next call of any operation.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use game_core::{
    Difficulty, Direction, Dungeon, DungeonLayout, GameState, HeroClass, HeroGender, HeroProfile,
    HeroRoster, InventoryItem, Position, Theme, TileKind, candidate,
};

use crate::traits::{AuthorityError, GameAuthority};
use crate::types::{CombatAction, CombatOutcome, HeroSelection, MoveOutcome};

/// Damage dealt by a trap when stepped on.
pub const TRAP_DAMAGE: i32 = 10;
/// Experience granted for a defeated enemy.
pub const ENEMY_EXP: u32 = 10;

/// Operations recorded by [`MockAuthority`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Operation {
    GenerateDungeon,
    StartSession,
    FetchSession,
    Move,
    Combat,
    FetchHeroes,
    Ping,
}

#[derive(Default)]
struct World {
    layout: Option<DungeonLayout>,
    roster: HeroRoster,
    dungeons: HashMap<String, Dungeon>,
    sessions: HashMap<String, GameState>,
    enemy_hp: HashMap<(String, String), i32>,
    scripted_combat: VecDeque<CombatOutcome>,
    failures: HashMap<Operation, VecDeque<AuthorityError>>,
    calls: HashMap<Operation, usize>,
    next_id: u64,
}

impl World {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn record(&mut self, operation: Operation) -> Result<(), AuthorityError> {
        *self.calls.entry(operation).or_default() += 1;
        match self
            .failures
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn session_mut(&mut self, session_id: &str) -> Result<&mut GameState, AuthorityError> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| AuthorityError::NotFound("Game not found".into()))
    }
}

/// Mock authority for testing without network.
#[derive(Clone, Default)]
pub struct MockAuthority {
    world: Arc<Mutex<World>>,
}

impl MockAuthority {
    /// Authority serving [`walled_room`] dungeons and the [`sample_roster`].
    pub fn new() -> Self {
        Self::with_layout(walled_room(7, 5))
    }

    /// Authority whose generated dungeons are copies of `layout`.
    pub fn with_layout(layout: DungeonLayout) -> Self {
        let authority = Self::default();
        {
            let mut world = authority.lock();
            world.layout = Some(layout);
            world.roster = sample_roster();
        }
        authority
    }

    pub fn set_roster(&self, roster: HeroRoster) {
        self.lock().roster = roster;
    }

    /// Queue a failure returned by the next call of `operation`.
    pub fn fail_next(&self, operation: Operation, error: AuthorityError) {
        self.lock()
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Queue a combat response used instead of the built-in resolution.
    ///
    /// The scripted HP and end-of-combat flags are applied to the stored
    /// session as well, so a later refresh agrees with the response.
    pub fn script_combat(&self, outcome: CombatOutcome) {
        self.lock().scripted_combat.push_back(outcome);
    }

    /// Number of calls made to `operation`, failed ones included.
    pub fn calls(&self, operation: Operation) -> usize {
        self.lock().calls.get(&operation).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    pub fn session(&self, session_id: &str) -> Option<GameState> {
        self.lock().sessions.get(session_id).cloned()
    }

    /// Edit the stored copy of a session, as the authority would on its own.
    pub fn update_session(&self, session_id: &str, update: impl FnOnce(&mut GameState)) -> bool {
        match self.lock().sessions.get_mut(session_id) {
            Some(state) => {
                update(state);
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GameAuthority for MockAuthority {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_dungeon(
        &self,
        difficulty: Difficulty,
        theme: Option<Theme>,
    ) -> Result<Dungeon, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::GenerateDungeon)?;

        let mut layout = world
            .layout
            .clone()
            .unwrap_or_else(|| walled_room(7, 5));
        layout.id = world.next_id("dungeon");
        layout.difficulty = difficulty;
        if let Some(theme) = theme {
            layout.theme = theme;
        }

        let dungeon =
            Dungeon::from_layout(layout).map_err(|e| AuthorityError::Decode(e.to_string()))?;
        world
            .dungeons
            .insert(dungeon.id().to_string(), dungeon.clone());
        Ok(dungeon)
    }

    async fn start_session(
        &self,
        dungeon_id: &str,
        hero: HeroSelection,
    ) -> Result<GameState, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::StartSession)?;

        let dungeon = world
            .dungeons
            .get(dungeon_id)
            .cloned()
            .ok_or_else(|| AuthorityError::NotFound("Dungeon not found".into()))?;
        let profile = world
            .roster
            .profile(hero.hero_class, hero.gender)
            .cloned()
            .unwrap_or_else(|| fallback_profile(hero.hero_class));

        let id = world.next_id("game");
        let state =
            GameState::fresh(id.clone(), &dungeon).with_hero(hero.hero_class, hero.gender, profile);
        world.sessions.insert(id, state.clone());
        Ok(state)
    }

    async fn fetch_session(&self, session_id: &str) -> Result<GameState, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::FetchSession)?;
        world.session_mut(session_id).map(|state| state.clone())
    }

    async fn move_player(
        &self,
        session_id: &str,
        direction: Direction,
    ) -> Result<MoveOutcome, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::Move)?;

        let dungeon_id = world.session_mut(session_id)?.dungeon_id.clone();
        let dungeon = world
            .dungeons
            .get(&dungeon_id)
            .cloned()
            .ok_or_else(|| AuthorityError::NotFound("Dungeon not found".into()))?;
        let state = world.session_mut(session_id)?;

        if state.in_combat {
            return Ok(rejected("You are in combat!"));
        }
        if state.player_hp <= 0 {
            return Ok(rejected("You have fallen."));
        }

        let Some(to) = candidate(dungeon.dimensions(), state.player_position(), direction) else {
            return Ok(rejected("You can't go that way."));
        };
        if dungeon.tile(to).is_none_or(TileKind::is_wall) {
            return Ok(rejected("A wall blocks your path."));
        }

        state.set_player_position(to);
        state.moves += 1;
        state.discovered_tiles.reveal_around(to);

        Ok(resolve_arrival(&dungeon, state, to))
    }

    async fn combat_action(
        &self,
        session_id: &str,
        action: CombatAction,
    ) -> Result<CombatOutcome, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::Combat)?;

        if !world.session_mut(session_id)?.in_combat {
            return Err(AuthorityError::Status {
                status: 400,
                message: "Not in combat".into(),
            });
        }

        if let Some(outcome) = world.scripted_combat.pop_front() {
            let state = world.session_mut(session_id)?;
            state.player_hp = outcome.player_hp;
            if outcome.combat_ended {
                state.in_combat = false;
                state.combat_enemy = None;
            }
            return Ok(outcome);
        }

        let dungeon_id = world.session_mut(session_id)?.dungeon_id.clone();
        let dungeon = world
            .dungeons
            .get(&dungeon_id)
            .cloned()
            .ok_or_else(|| AuthorityError::NotFound("Dungeon not found".into()))?;

        match action {
            CombatAction::Flee => {
                let state = world.session_mut(session_id)?;
                state.in_combat = false;
                state.combat_enemy = None;
                Ok(CombatOutcome {
                    combat_log: vec!["You flee from combat.".into()],
                    combat_ended: true,
                    player_hp: state.player_hp,
                    player_defeated: false,
                })
            }
            CombatAction::Attack => attack_round(&mut world, &dungeon, session_id),
        }
    }

    async fn fetch_heroes(&self) -> Result<HeroRoster, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::FetchHeroes)?;
        Ok(world.roster.clone())
    }

    async fn ping(&self) -> Result<String, AuthorityError> {
        let mut world = self.lock();
        world.record(Operation::Ping)?;
        Ok("Dungeon RPG API (mock)".into())
    }
}

fn rejected(message: &str) -> MoveOutcome {
    MoveOutcome {
        success: false,
        message: Some(message.into()),
        in_combat: false,
        combat_enemy: None,
    }
}

/// Applies pickups, traps and encounters on the cell just entered.
fn resolve_arrival(dungeon: &Dungeon, state: &mut GameState, at: Position) -> MoveOutcome {
    let mut notes = Vec::new();
    let mut outcome = MoveOutcome {
        success: true,
        ..MoveOutcome::default()
    };

    if let Some(cell) = dungeon.entities_at(at) {
        for &i in &cell.keys {
            let key = &dungeon.keys()[i];
            if state.collected_keys.insert(key.id.clone()) {
                state.inventory.push(InventoryItem::new("key", "🗝️"));
                notes.push("You picked up a key.".to_string());
            }
        }
        for &i in &cell.treasures {
            let treasure = &dungeon.treasures()[i];
            if state.collected_treasures.insert(treasure.id.clone()) {
                state
                    .inventory
                    .push(InventoryItem::new(treasure.kind.to_string(), ""));
                notes.push(format!("You found {}!", treasure.kind));
            }
        }
        for &i in &cell.chests {
            let chest = &dungeon.chests()[i];
            if state.opened_chests.insert(chest.id.clone()) {
                notes.push("You opened a chest.".to_string());
            }
        }
        for &i in &cell.traps {
            let trap = &dungeon.traps()[i];
            state.player_hp -= TRAP_DAMAGE;
            notes.push(format!("A {} trap hits you for {TRAP_DAMAGE}!", trap.kind));
        }
        if let Some(enemy) = cell
            .enemies
            .iter()
            .map(|&i| &dungeon.enemies()[i])
            .find(|enemy| enemy.alive && !state.is_defeated_enemy(&enemy.id))
        {
            state.in_combat = true;
            state.combat_enemy = Some(enemy.id.clone());
            outcome.in_combat = true;
            outcome.combat_enemy = Some(enemy.id.clone());
            notes.push(format!("A {} attacks!", enemy.kind));
        }
    }

    if !notes.is_empty() {
        outcome.message = Some(notes.join(" "));
    }
    outcome
}

fn attack_round(
    world: &mut World,
    dungeon: &Dungeon,
    session_id: &str,
) -> Result<CombatOutcome, AuthorityError> {
    let (enemy_id, player_attack, player_defense) = {
        let state = world.session_mut(session_id)?;
        let enemy_id = state
            .combat_enemy
            .clone()
            .ok_or_else(|| AuthorityError::Decode("combat without an enemy".into()))?;
        (enemy_id, state.player_attack, state.player_defense)
    };
    let enemy = dungeon
        .enemy(&enemy_id)
        .cloned()
        .ok_or_else(|| AuthorityError::NotFound("Enemy not found".into()))?;

    let mut log = Vec::new();
    let hp = world
        .enemy_hp
        .entry((session_id.to_string(), enemy_id.clone()))
        .or_insert(enemy.hp);
    let dealt = player_attack.max(1);
    *hp -= dealt;
    log.push(format!("You hit the {} for {dealt}.", enemy.kind));
    let enemy_down = *hp <= 0;

    let state = world.session_mut(session_id)?;
    if enemy_down {
        log.push(format!("The {} is defeated!", enemy.kind));
        state.defeated_enemies.insert(enemy_id);
        state.in_combat = false;
        state.combat_enemy = None;
        state.player_exp += ENEMY_EXP;
        return Ok(CombatOutcome {
            combat_log: log,
            combat_ended: true,
            player_hp: state.player_hp,
            player_defeated: false,
        });
    }

    let taken = (enemy.attack - player_defense).max(1);
    state.player_hp -= taken;
    log.push(format!("The {} hits you for {taken}.", enemy.kind));

    let defeated = state.player_hp <= 0;
    if defeated {
        log.push("You have been defeated...".into());
        state.in_combat = false;
    }
    Ok(CombatOutcome {
        combat_log: log,
        combat_ended: defeated,
        player_hp: state.player_hp,
        player_defeated: defeated,
    })
}

fn fallback_profile(class: HeroClass) -> HeroProfile {
    HeroProfile {
        name: class.title().to_string(),
        emoji: "🧑".into(),
        hp: 100,
        attack: 10,
        defense: 5,
        magic: 5,
        agility: 5,
        dice_count: 1,
        dice_sides: 6,
    }
}

/// Floor area of `width x height` surrounded by a one-cell wall, with the
/// player starting just inside the top-left corner.
pub fn walled_room(width: u32, height: u32) -> DungeonLayout {
    let mut layout = DungeonLayout::filled("template", width, height, TileKind::Floor);
    for x in 0..width as i32 {
        layout.set_tile(Position::new(x, 0), TileKind::Wall);
        layout.set_tile(Position::new(x, height as i32 - 1), TileKind::Wall);
    }
    for y in 0..height as i32 {
        layout.set_tile(Position::new(0, y), TileKind::Wall);
        layout.set_tile(Position::new(width as i32 - 1, y), TileKind::Wall);
    }
    layout.player_start = Position::new(1, 1);
    layout
}

/// Small roster covering every class and gender.
pub fn sample_roster() -> HeroRoster {
    let mut roster = HeroRoster::empty();
    let stats = [
        (HeroClass::Wizard, "🧙", 70, 6, 3, 18, 8, (1, 6)),
        (HeroClass::Knight, "🛡️", 120, 12, 10, 2, 5, (2, 8)),
        (HeroClass::Hunter, "🏹", 90, 11, 6, 4, 14, (1, 10)),
        (HeroClass::Thief, "🗡️", 80, 9, 4, 6, 18, (2, 4)),
        (HeroClass::Peasant, "🧑‍🌾", 100, 10, 5, 5, 5, (1, 6)),
    ];
    for (class, emoji, hp, attack, defense, magic, agility, (count, sides)) in stats {
        for gender in [HeroGender::Male, HeroGender::Female] {
            roster.insert(
                class,
                gender,
                HeroProfile {
                    name: format!("{} ({gender})", class.title()),
                    emoji: emoji.to_string(),
                    hp,
                    attack,
                    defense,
                    magic,
                    agility,
                    dice_count: count,
                    dice_sides: sides,
                },
            );
        }
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Enemy;

    async fn start(authority: &MockAuthority) -> GameState {
        let dungeon = authority
            .generate_dungeon(Difficulty::Easy, None)
            .await
            .unwrap();
        authority
            .start_session(
                dungeon.id(),
                HeroSelection::new(HeroClass::Knight, HeroGender::Male),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn wall_moves_are_rejected_without_side_effects() {
        let authority = MockAuthority::new();
        let state = start(&authority).await;

        let outcome = authority.move_player(&state.id, Direction::Up).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(authority.session(&state.id).unwrap(), state);
    }

    #[tokio::test]
    async fn stepping_on_an_enemy_starts_combat() {
        let mut layout = walled_room(6, 4);
        layout.enemies.push(Enemy {
            id: "enemy_0".into(),
            x: 2,
            y: 1,
            kind: "rat".into(),
            hp: 20,
            attack: 15,
            alive: true,
        });
        let authority = MockAuthority::with_layout(layout);
        let state = start(&authority).await;

        let outcome = authority.move_player(&state.id, Direction::Right).await.unwrap();
        assert!(outcome.in_combat);
        assert_eq!(outcome.combat_enemy.as_deref(), Some("enemy_0"));

        // Knight deals 12 a round: the rat survives the first and dies on the second.
        let first = authority
            .combat_action(&state.id, CombatAction::Attack)
            .await
            .unwrap();
        assert!(!first.combat_ended);
        assert_eq!(first.player_hp, 120 - 5);

        let second = authority
            .combat_action(&state.id, CombatAction::Attack)
            .await
            .unwrap();
        assert!(second.combat_ended);
        let after = authority.session(&state.id).unwrap();
        assert!(!after.in_combat);
        assert!(after.is_defeated_enemy("enemy_0"));
    }

    #[tokio::test]
    async fn queued_failures_are_returned_once() {
        let authority = MockAuthority::new();
        authority.fail_next(Operation::Ping, AuthorityError::Network("down".into()));

        assert!(authority.ping().await.is_err());
        assert!(authority.ping().await.is_ok());
        assert_eq!(authority.calls(Operation::Ping), 2);
    }
}
