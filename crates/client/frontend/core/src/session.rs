//! Active play session: the dungeon plus the latest accepted state.
use game_core::{
    Direction, DiscoveryMap, Dungeon, GameState, LocalMove, MoveError, StateError, apply_local,
};

/// Everything the game screen needs, owned together so that dropping the
/// session drops all of it.
#[derive(Clone, Debug)]
pub struct Session {
    dungeon: Dungeon,
    state: GameState,
    show_inventory: bool,
    defeated: bool,
}

impl Session {
    /// Opens a session after checking `state` belongs to `dungeon`.
    pub fn open(dungeon: Dungeon, state: GameState) -> Result<Self, StateError> {
        state.validate_against(&dungeon)?;
        Ok(Self {
            dungeon,
            state,
            show_inventory: false,
            defeated: false,
        })
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    pub fn in_combat(&self) -> bool {
        self.state.in_combat
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn show_inventory(&self) -> bool {
        self.show_inventory
    }

    pub(crate) fn toggle_inventory(&mut self) -> bool {
        self.show_inventory = !self.show_inventory;
        self.show_inventory
    }

    pub(crate) fn mark_defeated(&mut self) {
        self.defeated = true;
    }

    pub(crate) fn move_locally(&mut self, direction: Direction) -> Result<LocalMove, MoveError> {
        apply_local(&self.dungeon, &mut self.state, direction)
    }

    /// Replaces the state wholesale with an authoritative snapshot.
    ///
    /// The previous discovery is unioned in so fog never returns, and when
    /// `reveal` is set the neighborhood of the new position is uncovered.
    pub(crate) fn replace_state(
        &mut self,
        mut incoming: GameState,
        reveal: bool,
    ) -> Result<(), StateError> {
        incoming.validate_against(&self.dungeon)?;
        merge_discovery(&mut incoming.discovered_tiles, &self.state.discovered_tiles);
        if reveal {
            let position = incoming.player_position();
            incoming.discovered_tiles.reveal_around(position);
        }
        self.state = incoming;
        Ok(())
    }

    /// Transient HP patch between combat rounds; nothing else is touched.
    pub(crate) fn patch_hp(&mut self, hp: i32) {
        self.state.player_hp = hp;
    }
}

fn merge_discovery(incoming: &mut DiscoveryMap, previous: &DiscoveryMap) {
    let gained = incoming.absorb(previous);
    if gained > 0 {
        tracing::debug!(gained, "authority discovery was behind local discovery");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{DungeonLayout, Position, TileKind};

    fn session() -> Session {
        let mut layout = DungeonLayout::filled("d", 5, 5, TileKind::Floor);
        layout.player_start = Position::new(2, 2);
        let dungeon = Dungeon::from_layout(layout).unwrap();
        let state = GameState::fresh("g", &dungeon);
        Session::open(dungeon, state).unwrap()
    }

    #[test]
    fn replacement_never_hides_discovered_cells() {
        let mut session = session();
        session.move_locally(Direction::Right).unwrap();
        let before = session.state().discovered_tiles.clone();

        let mut incoming = GameState::fresh("g", session.dungeon());
        incoming.set_player_position(Position::new(3, 2));
        session.replace_state(incoming, false).unwrap();

        assert!(session.state().discovered_tiles.is_superset_of(&before));
    }

    #[test]
    fn inconsistent_snapshot_is_rejected_untouched() {
        let mut session = session();
        let before = session.state().clone();

        let mut incoming = before.clone();
        incoming.set_player_position(Position::new(9, 9));

        assert!(session.replace_state(incoming, true).is_err());
        assert_eq!(session.state(), &before);
    }
}
