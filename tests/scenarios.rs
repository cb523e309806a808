//! End-to-end runs through the host-facing `CatchGame`

use catch_zone::platform::ManualClock;
use catch_zone::sim::{GameEvent, GamePhase, ItemKind, ScriptedRandom, Zone};
use catch_zone::{CatchGame, Tuning};

const DT: f32 = 0.095;

fn game_spawning(zone: Zone, kind: ItemKind) -> (CatchGame<ManualClock, ScriptedRandom>, ManualClock) {
    let clock = ManualClock::new();
    let rng = ScriptedRandom::spawning(zone, kind, 0.999);
    (CatchGame::new(clock.clone(), rng, Tuning::default()).unwrap(), clock)
}

/// Tick until an event matching `pred` shows up; returns that frame's events
fn run_until(
    game: &mut CatchGame<ManualClock, ScriptedRandom>,
    clock: &ManualClock,
    pred: impl Fn(&GameEvent) -> bool,
) -> Vec<GameEvent> {
    for _ in 0..200 {
        clock.advance(DT as f64);
        let events = game.update();
        if events.iter().any(&pred) {
            return events;
        }
    }
    panic!("event never happened");
}

#[test]
fn test_apple_caught_in_center() {
    let (mut game, clock) = game_spawning(Zone::Center, ItemKind::Apple);
    game.start();
    game.on_pose_detected("CENTER");
    let spawned = game.update();
    let first_id = match spawned[0] {
        GameEvent::Spawned { id, .. } => id,
        other => panic!("expected spawn, got {:?}", other),
    };

    let events = run_until(&mut game, &clock, |e| matches!(e, GameEvent::Caught { .. }));
    assert!(events.contains(&GameEvent::Caught {
        id: first_id,
        kind: ItemKind::Apple,
        points: 100
    }));

    let session = game.session();
    assert_eq!(session.score, 100);
    assert_eq!(session.miss_count, 0);
    assert!(session.items.iter().all(|item| item.id != first_id));
    assert_eq!(session.phase, GamePhase::Playing);
}

#[test]
fn test_apple_missed_from_wrong_lane() {
    let (mut game, clock) = game_spawning(Zone::Center, ItemKind::Apple);
    game.start();
    game.on_pose_detected("LEFT");
    game.update();

    run_until(&mut game, &clock, |e| matches!(e, GameEvent::Missed { .. }));

    let session = game.session();
    assert_eq!(session.miss_count, 1);
    assert_eq!(session.warning_timer, 2.0);
    assert_eq!(session.score, 0);
    assert_eq!(session.phase, GamePhase::Playing);
    assert!(game.view().show_warning);
    assert_eq!(game.view().lives, 1);
}

#[test]
fn test_second_miss_is_game_over() {
    let (mut game, clock) = game_spawning(Zone::Center, ItemKind::Apple);
    game.start();
    game.session_mut().miss_count = 1;
    game.on_pose_detected("LEFT");
    game.update();

    let events = run_until(&mut game, &clock, |e| matches!(e, GameEvent::Missed { .. }));
    assert!(events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
    assert_eq!(game.session().phase, GamePhase::GameOver);
    assert_eq!(game.view().lives, 0);

    // Frozen: further updates and poses do nothing
    let snapshot = game.view();
    clock.advance(1.0);
    assert!(game.update().is_empty());
    assert!(!game.on_pose_detected("CENTER"));
    assert_eq!(game.view(), snapshot);
}

#[test]
fn test_caught_bomb_is_fatal_and_scoreless() {
    let (mut game, clock) = game_spawning(Zone::Right, ItemKind::Bomb);
    game.start();
    game.on_pose_detected("RIGHT");
    game.update();

    run_until(&mut game, &clock, |e| matches!(e, GameEvent::GameOver { .. }));
    assert_eq!(game.session().score, 0);
    assert_eq!(game.session().miss_count, 0);
    assert_eq!(game.session().phase, GamePhase::GameOver);
}

#[test]
fn test_dodged_bombs_never_cost_lives() {
    let (mut game, clock) = game_spawning(Zone::Right, ItemKind::Bomb);
    game.start();
    game.on_pose_detected("LEFT");
    game.update();

    let mut dodged = 0;
    for _ in 0..400 {
        clock.advance(DT as f64);
        dodged += game
            .update()
            .iter()
            .filter(|e| matches!(e, GameEvent::BombDodged { .. }))
            .count();
    }
    assert!(dodged > 10);
    assert_eq!(game.session().miss_count, 0);
    assert_eq!(game.session().phase, GamePhase::Playing);
    // 38 s of play crosses one level boundary
    assert_eq!(game.session().level, 2);
}

#[test]
fn test_level_up_with_one_life_left() {
    let (mut game, clock) = game_spawning(Zone::Left, ItemKind::Bomb);
    game.start();
    game.on_pose_detected("RIGHT");
    game.session_mut().miss_count = 1;
    game.session_mut().score = 1200;
    game.session_mut().level_time_remaining = 0.05;
    game.update();

    clock.advance(DT as f64);
    let events = game.update();
    assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
    let session = game.session();
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.level_time_remaining, 20.0);
    assert_eq!(session.score, 1200);
    assert!(game.view().show_level_up);
}

#[test]
fn test_restart_after_game_over() {
    let (mut game, clock) = game_spawning(Zone::Center, ItemKind::Bomb);
    game.start();
    game.update();
    run_until(&mut game, &clock, |e| matches!(e, GameEvent::GameOver { .. }));
    game.session_mut().score = 777;

    game.start();
    let session = game.session();
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.score, 0);
    assert_eq!(session.level, 1);
    assert_eq!(session.miss_count, 0);
    assert!(session.items.is_empty());
}

#[test]
fn test_stop_returns_to_ready() {
    let (mut game, clock) = game_spawning(Zone::Center, ItemKind::Pear);
    game.start();
    game.update();
    run_until(&mut game, &clock, |e| matches!(e, GameEvent::Caught { .. }));
    game.stop();
    assert_eq!(game.session().phase, GamePhase::Ready);
    assert_eq!(game.session().score, 150);
}
