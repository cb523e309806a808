//! Level progression and difficulty curve

use super::state::{GameEvent, GameSession};
use crate::tuning::Tuning;

/// Difficulty parameters derived from a level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    /// Seconds for an item to cross the field
    pub fall_duration: f32,
    /// Shortest gap between spawns (seconds)
    pub spawn_interval_min: f32,
    /// Longest gap between spawns (seconds)
    pub spawn_interval_max: f32,
}

/// Fall duration for a level: shrinks by a fixed step, floored
pub fn fall_duration_for_level(level: u32, tuning: &Tuning) -> f32 {
    let steps = level.saturating_sub(1) as f32;
    (tuning.base_fall_duration - tuning.fall_duration_step * steps).max(tuning.min_fall_duration)
}

pub fn level_params(level: u32, tuning: &Tuning) -> LevelParams {
    let fall_duration = fall_duration_for_level(level, tuning);
    LevelParams {
        fall_duration,
        spawn_interval_min: fall_duration * tuning.spawn_rate_min,
        spawn_interval_max: fall_duration * tuning.spawn_rate_max,
    }
}

/// Reload the level clock and difficulty for the session's current level.
///
/// The spawn timer is zeroed so the next tick spawns immediately.
pub fn reset_level_params(session: &mut GameSession) {
    session.level_time_remaining = session.tuning.level_duration;
    session.fall_duration = fall_duration_for_level(session.level, &session.tuning);
    session.spawn_timer = 0.0;
}

/// Run the level clock down; on expiry, move to the next level.
///
/// Never ends the run. Returns true on level up.
pub fn advance_level_clock(session: &mut GameSession, dt: f32, events: &mut Vec<GameEvent>) -> bool {
    session.level_time_remaining -= dt;
    if session.level_time_remaining > 0.0 {
        return false;
    }

    session.level += 1;
    session.level_up_timer = session.tuning.banner_duration;
    reset_level_params(session);
    log::info!(
        "Level {} (fall {:.2}s)",
        session.level,
        session.fall_duration
    );
    events.push(GameEvent::LevelUp {
        level: session.level,
    });
    true
}
