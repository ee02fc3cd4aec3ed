//! Controller behavior against the in-memory authority.

use client_authority::mock::{MockAuthority, Operation, walled_room};
use client_authority::{AuthorityError, CombatAction, CombatOutcome};
use client_frontend_core::{
    Applied, ControlError, Dispatch, FrontendConfig, Frame, GameController, MessageKind,
    MovementStrategy, Rejection, Ticket, View, execute,
};
use game_core::{
    Direction, DungeonLayout, Enemy, HeroRoster, InventoryItem, Position, TileKind,
    Treasure, TreasureKind,
};

fn controller(movement: MovementStrategy) -> GameController {
    let config = FrontendConfig::default().with_movement(movement);
    GameController::new(&config, HeroRoster::empty())
}

async fn run(
    authority: &MockAuthority,
    controller: &mut GameController,
    ticket: Ticket,
) -> Result<Applied, ControlError> {
    let completion = execute(authority, ticket).await;
    controller.apply(completion)
}

async fn start_game(authority: &MockAuthority, controller: &mut GameController) {
    controller.enter_hero_select().unwrap();
    let ticket = controller.prepare_start().unwrap();
    assert_eq!(run(authority, controller, ticket).await.unwrap(), Applied::Started);
}

async fn step(
    authority: &MockAuthority,
    controller: &mut GameController,
    direction: Direction,
) -> Result<Applied, ControlError> {
    match controller.prepare_move(direction)? {
        Dispatch::Local(_) => Ok(Applied::Moved {
            success: true,
            in_combat: false,
        }),
        Dispatch::Remote(ticket) => run(authority, controller, ticket).await,
    }
}

fn state(controller: &GameController) -> &game_core::GameState {
    controller.session().unwrap().state()
}

fn open_field(width: u32, height: u32, start: Position) -> DungeonLayout {
    let mut layout = DungeonLayout::filled("field", width, height, TileKind::Floor);
    layout.player_start = start;
    layout
}

fn with_enemy() -> DungeonLayout {
    let mut layout = walled_room(6, 4);
    layout.enemies.push(Enemy {
        id: "enemy_0".into(),
        x: 2,
        y: 1,
        kind: "goblin".into(),
        hp: 30,
        attack: 8,
        alive: true,
    });
    layout
}

async fn engage(authority: &MockAuthority, controller: &mut GameController) {
    start_game(authority, controller).await;
    let applied = step(authority, controller, Direction::Right).await.unwrap();
    assert_eq!(
        applied,
        Applied::Moved {
            success: true,
            in_combat: true
        }
    );
}

#[tokio::test]
async fn discovery_never_shrinks_over_a_walk() {
    for movement in [MovementStrategy::RemoteAuthority, MovementStrategy::LocalGrid] {
        let authority = MockAuthority::new();
        let mut controller = controller(movement);
        start_game(&authority, &mut controller).await;

        let walk = [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];
        let mut previous = state(&controller).discovered_tiles.clone();
        for direction in walk {
            let _ = step(&authority, &mut controller, direction).await;
            let current = &state(&controller).discovered_tiles;
            assert!(current.is_superset_of(&previous), "{movement} {direction}");
            previous = current.clone();
        }
    }
}

#[tokio::test]
async fn moving_into_a_wall_keeps_position_and_count() {
    for movement in [MovementStrategy::RemoteAuthority, MovementStrategy::LocalGrid] {
        let authority = MockAuthority::new();
        let mut controller = controller(movement);
        start_game(&authority, &mut controller).await;
        let before = state(&controller).clone();

        let result = step(&authority, &mut controller, Direction::Up).await;

        let after = state(&controller);
        assert_eq!(after.player_position(), before.player_position(), "{movement}");
        assert_eq!(after.moves, before.moves, "{movement}");
        match movement {
            MovementStrategy::LocalGrid => assert!(matches!(
                result,
                Err(ControlError::InvalidTransition(Rejection::Blocked))
            )),
            MovementStrategy::RemoteAuthority => assert!(matches!(
                result,
                Ok(Applied::Moved { success: false, .. })
            )),
        }
    }
}

#[tokio::test]
async fn boundary_moves_are_silent_no_ops() {
    let authority = MockAuthority::with_layout(open_field(3, 3, Position::ORIGIN));
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    start_game(&authority, &mut controller).await;
    let before = state(&controller).clone();

    for direction in [Direction::Left, Direction::Up] {
        let err = controller.prepare_move(direction).unwrap_err();
        assert!(err.is_silent());
        assert!(matches!(
            err,
            ControlError::InvalidTransition(Rejection::AtBoundary)
        ));
    }

    assert_eq!(authority.calls(Operation::Move), 0);
    assert_eq!(state(&controller), &before);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn collected_treasure_is_never_shown_again() {
    let mut layout = walled_room(7, 4);
    layout.treasures.push(Treasure {
        id: "t-gold".into(),
        x: 2,
        y: 1,
        kind: TreasureKind::Gold,
    });
    let authority = MockAuthority::with_layout(layout);
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    start_game(&authority, &mut controller).await;

    let treasure_cell = Position::new(2, 1);
    step(&authority, &mut controller, Direction::Right).await.unwrap();
    step(&authority, &mut controller, Direction::Right).await.unwrap();
    step(&authority, &mut controller, Direction::Left).await.unwrap();
    step(&authority, &mut controller, Direction::Right).await.unwrap();

    assert!(state(&controller).collected_treasures.contains("t-gold"));
    let Frame::Game(frame) = Frame::from_controller(&controller, 8) else {
        panic!("expected game frame");
    };
    assert_eq!(frame.cell(treasure_cell).and_then(|cell| cell.occupant()), None);
    assert!(frame.messages.iter().any(|entry| entry.text.contains("gold")));
}

#[tokio::test]
async fn combat_blocks_movement_without_contacting_authority() {
    let authority = MockAuthority::with_layout(with_enemy());
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    engage(&authority, &mut controller).await;
    assert!(state(&controller).in_combat);

    let moves_sent = authority.calls(Operation::Move);
    for direction in Direction::ALL {
        let err = controller.prepare_move(direction).unwrap_err();
        assert!(matches!(
            err,
            ControlError::InvalidTransition(Rejection::InCombat)
        ));
    }
    assert_eq!(authority.calls(Operation::Move), moves_sent);
}

#[tokio::test]
async fn fog_reveal_marks_exactly_the_neighborhood() {
    for movement in [MovementStrategy::RemoteAuthority, MovementStrategy::LocalGrid] {
        let authority = MockAuthority::with_layout(open_field(5, 5, Position::new(2, 2)));
        let mut controller = controller(movement);
        start_game(&authority, &mut controller).await;

        step(&authority, &mut controller, Direction::Right).await.unwrap();

        let discovered = &state(&controller).discovered_tiles;
        assert_eq!(discovered.count(), 9, "{movement}");
        for y in 0..5 {
            for x in 0..5 {
                let expected = (2..=4).contains(&x) && (1..=3).contains(&y);
                assert_eq!(
                    discovered.is_discovered(Position::new(x, y)),
                    expected,
                    "{movement} ({x}, {y})"
                );
            }
        }
    }
}

#[tokio::test]
async fn local_grid_never_talks_to_the_authority_after_start() {
    let authority = MockAuthority::with_layout(open_field(5, 5, Position::new(2, 2)));
    let mut controller = controller(MovementStrategy::LocalGrid);
    start_game(&authority, &mut controller).await;
    let calls = authority.total_calls();

    for direction in [Direction::Up, Direction::Left, Direction::Down] {
        assert!(matches!(
            controller.prepare_move(direction).unwrap(),
            Dispatch::Local(_)
        ));
    }

    assert_eq!(authority.total_calls(), calls);
    assert_eq!(state(&controller).moves, 3);
}

#[tokio::test]
async fn ended_combat_replaces_the_whole_state() {
    let authority = MockAuthority::with_layout(with_enemy());
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    engage(&authority, &mut controller).await;
    let session_id = state(&controller).id.clone();

    authority.update_session(&session_id, |state| {
        state.inventory.push(InventoryItem::new("goblin ear", "👂"));
        state.defeated_enemies.insert("enemy_0".into());
        state.player_exp += 25;
    });
    authority.script_combat(CombatOutcome {
        combat_log: vec!["You slay the goblin.".into()],
        combat_ended: true,
        player_hp: 55,
        player_defeated: false,
    });

    let ticket = controller.prepare_combat(CombatAction::Attack).unwrap();
    let applied = run(&authority, &mut controller, ticket).await.unwrap();

    assert_eq!(
        applied,
        Applied::Fought {
            ended: true,
            defeated: false
        }
    );
    assert_eq!(Some(state(&controller).clone()), authority.session(&session_id));
    assert!(!state(&controller).in_combat);
    assert_eq!(authority.calls(Operation::FetchSession), 2);
}

#[tokio::test]
async fn ongoing_combat_patches_only_hp() {
    let authority = MockAuthority::with_layout(with_enemy());
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    engage(&authority, &mut controller).await;
    let session_id = state(&controller).id.clone();
    let before = state(&controller).clone();

    authority.update_session(&session_id, |state| {
        state.inventory.push(InventoryItem::new("dropped sword", "🗡️"));
    });
    authority.script_combat(CombatOutcome {
        combat_log: vec!["You miss.".into(), "The goblin hits you for 8.".into()],
        combat_ended: false,
        player_hp: 42,
        player_defeated: false,
    });
    let fetches = authority.calls(Operation::FetchSession);

    let ticket = controller.prepare_combat(CombatAction::Attack).unwrap();
    run(&authority, &mut controller, ticket).await.unwrap();

    let after = state(&controller);
    assert_eq!(after.player_hp, 42);
    let mut expected = before.clone();
    expected.player_hp = 42;
    assert_eq!(after, &expected);
    assert_eq!(authority.calls(Operation::FetchSession), fetches);

    let texts: Vec<_> = controller
        .messages()
        .iter()
        .map(|entry| entry.text.as_str())
        .collect();
    assert!(texts.ends_with(&["You miss.", "The goblin hits you for 8."]));
}

#[tokio::test]
async fn defeat_blocks_everything_until_a_new_session() {
    let authority = MockAuthority::with_layout(with_enemy());
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    engage(&authority, &mut controller).await;

    authority.script_combat(CombatOutcome {
        combat_log: vec!["The goblin strikes you down.".into()],
        combat_ended: true,
        player_hp: 0,
        player_defeated: true,
    });
    let ticket = controller.prepare_combat(CombatAction::Attack).unwrap();
    run(&authority, &mut controller, ticket).await.unwrap();
    assert!(controller.session().unwrap().is_defeated());

    let calls = authority.total_calls();
    for direction in Direction::ALL {
        assert!(matches!(
            controller.prepare_move(direction),
            Err(ControlError::InvalidTransition(Rejection::Defeated))
        ));
    }
    for action in [CombatAction::Attack, CombatAction::Flee] {
        assert!(matches!(
            controller.prepare_combat(action),
            Err(ControlError::InvalidTransition(Rejection::Defeated))
        ));
    }
    assert_eq!(authority.total_calls(), calls);
    assert_eq!(
        controller.messages().iter().last().unwrap().kind,
        MessageKind::Defeat
    );

    controller.back_to_menu().unwrap();
    start_game(&authority, &mut controller).await;
    assert!(!controller.session().unwrap().is_defeated());
    assert!(controller.prepare_move(Direction::Right).is_ok());
}

#[tokio::test]
async fn responses_after_menu_return_are_discarded() {
    let authority = MockAuthority::new();
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    start_game(&authority, &mut controller).await;

    let Dispatch::Remote(ticket) = controller.prepare_move(Direction::Right).unwrap() else {
        panic!("remote strategy must produce a ticket");
    };
    let completion = execute(&authority, ticket).await;

    controller.back_to_menu().unwrap();
    let err = controller.apply(completion).unwrap_err();

    assert!(matches!(
        err,
        ControlError::StaleResponse {
            issued: 0,
            current: 1
        }
    ));
    assert!(matches!(controller.view(), View::Menu(_)));
    assert_eq!(controller.messages().iter().count(), 0);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn completion_without_a_session_is_stale() {
    let authority = MockAuthority::new();
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    start_game(&authority, &mut controller).await;

    let Dispatch::Remote(ticket) = controller.prepare_move(Direction::Right).unwrap() else {
        panic!("remote strategy must produce a ticket");
    };
    let mut completion = execute(&authority, ticket).await;

    controller.back_to_menu().unwrap();
    controller.enter_hero_select().unwrap();
    let current = controller.generation();
    completion.generation = current;

    let err = controller.apply(completion).unwrap_err();
    assert!(matches!(
        err,
        ControlError::StaleResponse { issued, current: now } if issued == current && now == current
    ));
    assert!(matches!(controller.view(), View::HeroSelect(_)));
}

#[tokio::test]
async fn log_lines_are_tagged_by_their_source() {
    let authority = MockAuthority::with_layout(with_enemy());
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    engage(&authority, &mut controller).await;

    let kinds: Vec<_> = controller.messages().iter().map(|entry| entry.kind).collect();
    assert_eq!(kinds.first(), Some(&MessageKind::Arrival));
    assert_eq!(kinds.last(), Some(&MessageKind::Combat));
    assert!(!kinds.contains(&MessageKind::Failure));
}

#[tokio::test]
async fn abandoned_start_does_not_open_a_session() {
    let authority = MockAuthority::new();
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    controller.enter_hero_select().unwrap();
    let ticket = controller.prepare_start().unwrap();
    let completion = execute(&authority, ticket).await;

    controller.back_to_menu().unwrap();
    controller.enter_hero_select().unwrap();

    assert!(controller.apply(completion).is_err());
    let View::HeroSelect(select) = controller.view() else {
        panic!("expected hero select");
    };
    assert!(!select.loading);
}

#[tokio::test]
async fn transport_failure_leaves_state_untouched() {
    let authority = MockAuthority::new();
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    start_game(&authority, &mut controller).await;
    let before = state(&controller).clone();

    authority.fail_next(Operation::Move, AuthorityError::Network("connection reset".into()));
    let err = step(&authority, &mut controller, Direction::Right)
        .await
        .unwrap_err();
    assert!(matches!(err, ControlError::Transport(_)));
    assert_eq!(state(&controller), &before);

    // Move succeeded remotely, refresh failed: still nothing applied locally.
    authority.fail_next(
        Operation::FetchSession,
        AuthorityError::Timeout(std::time::Duration::from_secs(10)),
    );
    let err = step(&authority, &mut controller, Direction::Right)
        .await
        .unwrap_err();
    assert!(matches!(err, ControlError::Transport(_)));
    assert_eq!(state(&controller), &before);

    let errors = controller
        .messages()
        .iter()
        .filter(|entry| entry.kind == MessageKind::Failure)
        .count();
    assert_eq!(errors, 2);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn failed_start_stays_on_hero_select() {
    let authority = MockAuthority::new();
    authority.fail_next(
        Operation::GenerateDungeon,
        AuthorityError::Status {
            status: 500,
            message: "generator crashed".into(),
        },
    );
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    controller.enter_hero_select().unwrap();

    let ticket = controller.prepare_start().unwrap();
    let err = run(&authority, &mut controller, ticket).await.unwrap_err();

    assert!(matches!(err, ControlError::Transport(_)));
    let View::HeroSelect(select) = controller.view() else {
        panic!("expected hero select");
    };
    assert!(!select.loading);
    assert_eq!(authority.calls(Operation::StartSession), 0);
}

#[tokio::test]
async fn second_request_is_dropped_while_one_is_pending() {
    let authority = MockAuthority::new();
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    start_game(&authority, &mut controller).await;

    let first = controller.prepare_move(Direction::Right).unwrap();
    assert!(controller.is_busy());
    assert!(matches!(
        controller.prepare_move(Direction::Down),
        Err(ControlError::InvalidTransition(Rejection::RequestInFlight))
    ));

    let Dispatch::Remote(ticket) = first else {
        panic!("remote strategy must produce a ticket");
    };
    run(&authority, &mut controller, ticket).await.unwrap();
    assert!(!controller.is_busy());
    assert!(controller.prepare_move(Direction::Down).is_ok());
}

#[tokio::test]
async fn inventory_toggle_is_local_and_game_only() {
    let authority = MockAuthority::new();
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    assert!(controller.toggle_inventory().unwrap_err().is_silent());

    start_game(&authority, &mut controller).await;
    let calls = authority.total_calls();

    assert!(controller.toggle_inventory().unwrap());
    assert!(!controller.toggle_inventory().unwrap());
    assert_eq!(authority.total_calls(), calls);
}

#[tokio::test]
async fn menu_return_is_only_valid_from_later_screens() {
    let mut controller = controller(MovementStrategy::RemoteAuthority);
    assert!(controller.back_to_menu().unwrap_err().is_silent());

    controller.cycle_difficulty(true).unwrap();
    controller.enter_hero_select().unwrap();
    controller.toggle_gender().unwrap();
    controller.back_to_menu().unwrap();

    let View::Menu(menu) = controller.view() else {
        panic!("expected menu");
    };
    assert_eq!(menu.difficulty, game_core::Difficulty::Hard);
    assert_eq!(controller.generation(), 1);
}
