//! Property tests for the simulation invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use catch_zone::Tuning;
use catch_zone::sim::{
    GamePhase, GameSession, ItemKind, ScriptedRandom, Zone, fall_duration_for_level, tick,
};

fn lane_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("LEFT".to_string()),
        Just("CENTER".to_string()),
        Just("RIGHT".to_string()),
        "[a-zA-Z ]{0,8}",
    ]
}

proptest! {
    #[test]
    fn test_fall_duration_matches_curve(level in 1u32..500) {
        let tuning = Tuning::default();
        let expected = (2.0 - 0.2 * (level - 1) as f32).max(0.5);
        let actual = fall_duration_for_level(level, &tuning);
        prop_assert!((actual - expected).abs() < 1e-4);
        prop_assert!(actual >= 0.5);
        prop_assert!(fall_duration_for_level(level + 1, &tuning) <= actual);
    }

    #[test]
    fn test_any_frame_sequence_keeps_invariants(
        seed in any::<u64>(),
        frames in prop::collection::vec((prop::num::f32::ANY, lane_label()), 1..300),
    ) {
        let mut session = GameSession::default();
        session.start();
        let mut rng = Pcg32::seed_from_u64(seed);
        let tuning = Tuning::default();

        let mut last_score = 0;
        let mut last_level = 1;
        for (dt, label) in &frames {
            let before = session.basket_zone;
            let moved = session.on_pose_detected(label);
            match Zone::from_label(label) {
                Some(zone) if session.is_playing() => {
                    prop_assert!(moved);
                    prop_assert_eq!(session.basket_zone, zone);
                }
                _ => {
                    prop_assert!(!moved);
                    prop_assert_eq!(session.basket_zone, before);
                }
            }

            tick(&mut session, *dt, &mut rng);

            prop_assert!(session.score >= last_score);
            prop_assert!(session.level >= last_level);
            prop_assert!(session.miss_count <= tuning.max_miss);
            prop_assert!(session.warning_timer >= 0.0);
            prop_assert!(session.level_up_timer >= 0.0);
            prop_assert!(session.level_time_remaining <= tuning.level_duration);
            for item in &session.items {
                prop_assert!(item.y <= tuning.field_size);
                prop_assert!(!item.collected);
            }
            if session.miss_count >= tuning.max_miss {
                prop_assert_eq!(session.phase, GamePhase::GameOver);
            }
            last_score = session.score;
            last_level = session.level;
        }
    }

    #[test]
    fn test_start_always_resets(seed in any::<u64>(), steps in 0usize..2000) {
        let mut session = GameSession::default();
        session.start();
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..steps {
            tick(&mut session, 1.0 / 30.0, &mut rng);
        }
        session.start();
        prop_assert_eq!(session.phase, GamePhase::Playing);
        prop_assert_eq!(session.score, 0);
        prop_assert_eq!(session.level, 1);
        prop_assert_eq!(session.miss_count, 0);
        prop_assert!(session.items.is_empty());
    }

    #[test]
    fn test_missed_bombs_are_free(basket in 0usize..3, frames in 1usize..1500) {
        let mut session = GameSession::default();
        session.start();
        let bomb_lane = Zone::ALL[(basket + 1) % 3];
        session.basket_zone = Zone::ALL[basket];
        let mut rng = ScriptedRandom::spawning(bomb_lane, ItemKind::Bomb, 0.5);
        for _ in 0..frames {
            tick(&mut session, 1.0 / 60.0, &mut rng);
        }
        prop_assert_eq!(session.miss_count, 0);
        prop_assert_eq!(session.phase, GamePhase::Playing);
        prop_assert_eq!(session.score, 0);
    }
}
