//! Single owner of all UI-side game state.
//!
//! Input methods (`prepare_*`, `toggle_inventory`, `back_to_menu`, ...) either
//! change state synchronously or hand out a [`Ticket`] for the frontend to
//! execute. Responses come back through [`GameController::apply`]. At most one
//! ticket is outstanding at a time; input that would need a second one is
//! rejected as [`Rejection::RequestInFlight`].
use client_authority::{CombatAction, HeroSelection};
use game_core::{
    Difficulty, Direction, Dungeon, GameState, HeroRoster, LocalMove, MoveError, candidate,
};
use tracing::{debug, info, warn};

use crate::config::{FrontendConfig, MovementStrategy};
use crate::error::{ControlError, Rejection};
use crate::message::{MessageKind, MessageLog};
use crate::request::{CombatReply, Completion, MoveReply, Outcome, Request, Ticket};
use crate::session::Session;
use crate::view::{HeroSelectState, MenuState, View};

/// What a movement input turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Already applied locally; nothing to send.
    Local(LocalMove),
    /// Must be executed against the authority.
    Remote(Ticket),
}

/// Summary of an applied completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Started,
    Moved { success: bool, in_combat: bool },
    Fought { ended: bool, defeated: bool },
}

pub struct GameController {
    view: View,
    roster: HeroRoster,
    movement: MovementStrategy,
    generation: u64,
    pending: Option<&'static str>,
    messages: MessageLog,
}

impl GameController {
    pub fn new(config: &FrontendConfig, roster: HeroRoster) -> Self {
        Self {
            view: View::Menu(MenuState {
                difficulty: config.default_difficulty,
            }),
            roster,
            movement: config.movement,
            generation: 0,
            pending: None,
            messages: MessageLog::new(config.messages.capacity),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.view.session()
    }

    pub fn roster(&self) -> &HeroRoster {
        &self.roster
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn movement(&self) -> MovementStrategy {
        self.movement
    }

    /// Bumped every time the player abandons a screen; responses stamped
    /// with an older value are discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    // ===== menu =====

    pub fn cycle_difficulty(&mut self, forward: bool) -> Result<Difficulty, ControlError> {
        let View::Menu(menu) = &mut self.view else {
            return Err(Rejection::WrongView(self.view.name()).into());
        };
        menu.difficulty = if forward {
            menu.difficulty.next()
        } else {
            menu.difficulty.previous()
        };
        Ok(menu.difficulty)
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ControlError> {
        let View::Menu(menu) = &mut self.view else {
            return Err(Rejection::WrongView(self.view.name()).into());
        };
        menu.difficulty = difficulty;
        Ok(())
    }

    /// `menu -> hero-select`. Always valid from the menu.
    pub fn enter_hero_select(&mut self) -> Result<(), ControlError> {
        let View::Menu(menu) = &self.view else {
            return Err(Rejection::WrongView(self.view.name()).into());
        };
        let difficulty = menu.difficulty;
        info!(%difficulty, "entering hero selection");
        self.view = View::HeroSelect(HeroSelectState::new(difficulty));
        Ok(())
    }

    // ===== hero select =====

    pub fn cycle_class(&mut self, forward: bool) -> Result<(), ControlError> {
        let select = self.hero_select_mut()?;
        select.cycle_class(forward);
        Ok(())
    }

    pub fn toggle_gender(&mut self) -> Result<(), ControlError> {
        let select = self.hero_select_mut()?;
        select.gender = select.gender.toggle();
        Ok(())
    }

    /// Requests the generate + start round trip for the selected hero.
    pub fn prepare_start(&mut self) -> Result<Ticket, ControlError> {
        if self.pending.is_some() {
            return Err(Rejection::RequestInFlight.into());
        }
        let select = self.hero_select_mut()?;
        select.loading = true;
        let request = Request::Start {
            difficulty: select.difficulty,
            hero: HeroSelection::new(select.class, select.gender),
        };
        info!(
            class = %select.class,
            gender = %select.gender,
            difficulty = %select.difficulty,
            "starting session"
        );
        Ok(self.issue(request))
    }

    // ===== game =====

    /// Turns a direction into either a local move or a remote ticket.
    ///
    /// Combat, defeat, a pending request and the grid edge all reject the
    /// input before anything is sent.
    pub fn prepare_move(&mut self, direction: Direction) -> Result<Dispatch, ControlError> {
        let movement = self.movement;
        let busy = self.pending.is_some();
        let session = self.session_mut()?;

        if session.is_defeated() {
            return Err(Rejection::Defeated.into());
        }
        if session.in_combat() {
            return Err(Rejection::InCombat.into());
        }
        if busy {
            return Err(Rejection::RequestInFlight.into());
        }

        match movement {
            MovementStrategy::LocalGrid => {
                let step = session.move_locally(direction).map_err(|e| match e {
                    MoveError::InCombat => Rejection::InCombat,
                    MoveError::Defeated => Rejection::Defeated,
                    MoveError::AtBoundary { .. } => Rejection::AtBoundary,
                    MoveError::Blocked { .. } => Rejection::Blocked,
                })?;
                debug!(
                    from = %step.from,
                    to = %step.to,
                    revealed = step.revealed.len(),
                    "local move"
                );
                Ok(Dispatch::Local(step))
            }
            MovementStrategy::RemoteAuthority => {
                let origin = session.state().player_position();
                if candidate(session.dungeon().dimensions(), origin, direction).is_none() {
                    return Err(Rejection::AtBoundary.into());
                }
                let request = Request::Move {
                    session_id: session.id().to_string(),
                    direction,
                };
                Ok(Dispatch::Remote(self.issue(request)))
            }
        }
    }

    pub fn prepare_combat(&mut self, action: CombatAction) -> Result<Ticket, ControlError> {
        let busy = self.pending.is_some();
        let session = self.session_mut()?;

        if session.is_defeated() {
            return Err(Rejection::Defeated.into());
        }
        if !session.in_combat() {
            return Err(Rejection::NotInCombat.into());
        }
        if busy {
            return Err(Rejection::RequestInFlight.into());
        }

        let request = Request::Combat {
            session_id: session.id().to_string(),
            action,
        };
        Ok(self.issue(request))
    }

    /// Flips the inventory overlay. No authority involvement.
    pub fn toggle_inventory(&mut self) -> Result<bool, ControlError> {
        Ok(self.session_mut()?.toggle_inventory())
    }

    /// `hero-select | game -> menu`. Drops the session, clears the log and
    /// invalidates any request still in flight.
    pub fn back_to_menu(&mut self) -> Result<(), ControlError> {
        let difficulty = match &self.view {
            View::Menu(_) => return Err(Rejection::WrongView("menu").into()),
            View::HeroSelect(select) => select.difficulty,
            View::Game(session) => session.dungeon().difficulty(),
        };

        self.generation += 1;
        if let Some(request) = self.pending.take() {
            debug!(request, generation = self.generation, "abandoning in-flight request");
        }
        self.messages.clear();
        self.view = View::Menu(MenuState { difficulty });
        info!(generation = self.generation, "returned to menu");
        Ok(())
    }

    // ===== responses =====

    /// Applies a completed request.
    ///
    /// Stale completions are rejected before any mutation. Transport and
    /// consistency failures are written to the message log and leave the
    /// state exactly as it was.
    pub fn apply(&mut self, completion: Completion) -> Result<Applied, ControlError> {
        if completion.generation != self.generation {
            warn!(
                issued = completion.generation,
                current = self.generation,
                "discarding stale response"
            );
            return Err(ControlError::StaleResponse {
                issued: completion.generation,
                current: self.generation,
            });
        }
        self.pending = None;

        let issued = completion.generation;
        let result = match completion.outcome {
            Outcome::Started(result) => {
                self.apply_started(issued, result.map_err(ControlError::from))
            }
            Outcome::Moved(result) => self.apply_moved(issued, result.map_err(ControlError::from)),
            Outcome::Fought(result) => {
                self.apply_fought(issued, result.map_err(ControlError::from))
            }
        };

        if let Err(error) = &result {
            self.report(error);
        }
        result
    }

    fn apply_started(
        &mut self,
        issued: u64,
        result: Result<(Dungeon, GameState), ControlError>,
    ) -> Result<Applied, ControlError> {
        let View::HeroSelect(select) = &mut self.view else {
            return Err(self.stale(issued));
        };
        select.loading = false;

        let (dungeon, state) = result?;
        let session = Session::open(dungeon, state)?;
        info!(
            session = session.id(),
            dungeon = session.dungeon().id(),
            "session started"
        );

        let dungeon = session.dungeon();
        let text = format!(
            "You enter a {} dungeon ({}, {}x{}).",
            dungeon.theme(),
            dungeon.difficulty(),
            dungeon.width(),
            dungeon.height()
        );
        self.view = View::Game(Box::new(session));
        self.log(MessageKind::Arrival, text);
        Ok(Applied::Started)
    }

    fn apply_moved(
        &mut self,
        issued: u64,
        result: Result<MoveReply, ControlError>,
    ) -> Result<Applied, ControlError> {
        let Some(session) = self.view.session_mut() else {
            return Err(self.stale(issued));
        };

        let MoveReply { outcome, state } = result?;
        let was_in_combat = session.in_combat();
        session.replace_state(state, outcome.success)?;
        let in_combat = session.in_combat();

        if let Some(message) = outcome.message {
            self.log(MessageKind::Exploration, message);
        }
        if in_combat && !was_in_combat {
            let enemy = self
                .session()
                .and_then(|session| {
                    let id = session.state().combat_enemy.as_deref()?;
                    session.dungeon().enemy(id).map(|enemy| enemy.kind.clone())
                })
                .unwrap_or_else(|| "an enemy".to_string());
            info!(%enemy, "combat started");
            self.log(
                MessageKind::Combat,
                format!("Combat with {enemy}! [1] attack, [2] flee"),
            );
        }

        Ok(Applied::Moved {
            success: outcome.success,
            in_combat,
        })
    }

    fn apply_fought(
        &mut self,
        issued: u64,
        result: Result<CombatReply, ControlError>,
    ) -> Result<Applied, ControlError> {
        let Some(session) = self.view.session_mut() else {
            return Err(self.stale(issued));
        };

        let CombatReply { outcome, refreshed } = result?;
        match refreshed {
            Some(state) => session.replace_state(state, false)?,
            None => session.patch_hp(outcome.player_hp),
        }
        if outcome.player_defeated {
            session.mark_defeated();
        }

        for line in outcome.combat_log {
            self.log(MessageKind::Combat, line);
        }
        if outcome.player_defeated {
            info!("player defeated");
            self.log(
                MessageKind::Defeat,
                "You have been defeated. Press Esc to return to the menu.",
            );
        } else if outcome.combat_ended {
            info!("combat ended");
        }

        Ok(Applied::Fought {
            ended: outcome.combat_ended,
            defeated: outcome.player_defeated,
        })
    }

    // ===== helpers =====

    fn issue(&mut self, request: Request) -> Ticket {
        debug!(request = request.name(), generation = self.generation, "issuing request");
        self.pending = Some(request.name());
        Ticket {
            generation: self.generation,
            request,
        }
    }

    fn stale(&self, issued: u64) -> ControlError {
        ControlError::StaleResponse {
            issued,
            current: self.generation,
        }
    }

    fn report(&mut self, error: &ControlError) {
        if error.is_reportable() {
            warn!(%error, "request failed");
            self.log(MessageKind::Failure, error.to_string());
        }
    }

    fn log(&mut self, kind: MessageKind, text: impl Into<String>) {
        let moves = self.session().map(|session| session.state().moves);
        self.messages.push(kind, text, moves);
    }

    fn hero_select_mut(&mut self) -> Result<&mut HeroSelectState, ControlError> {
        match &mut self.view {
            View::HeroSelect(select) => Ok(select),
            other => Err(Rejection::WrongView(other.name()).into()),
        }
    }

    fn session_mut(&mut self) -> Result<&mut Session, ControlError> {
        let name = self.view.name();
        self.view
            .session_mut()
            .ok_or(ControlError::InvalidTransition(Rejection::WrongView(name)))
    }
}
