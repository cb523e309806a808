//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one host frame.

use super::collision::resolve_items;
use super::level::advance_level_clock;
use super::spawn::{RandomSource, advance_spawner};
use super::state::{GameEvent, GameSession};

/// Clamp a host-reported frame delta into something safe to integrate.
///
/// Negative and non-finite deltas become zero; long stalls are capped.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

/// Count presentation banners down, stopping at zero
fn decay_banners(session: &mut GameSession, dt: f32) {
    session.warning_timer = (session.warning_timer - dt).max(0.0);
    session.level_up_timer = (session.level_up_timer - dt).max(0.0);
}

/// Move every active item down at the current level's speed
pub fn advance_items(session: &mut GameSession, dt: f32) {
    let speed = session.item_speed();
    for item in &mut session.items {
        item.y += speed * dt;
    }
}

/// Advance the session by `dt` seconds.
///
/// Order: level clock, banners, spawner, movement, resolution. Does nothing
/// unless the session is Playing.
pub fn tick(session: &mut GameSession, dt: f32, rng: &mut impl RandomSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_playing() {
        return events;
    }

    let dt = sanitize_dt(dt, session.tuning.max_frame_dt);

    advance_level_clock(session, dt, &mut events);
    decay_banners(session, dt);
    advance_spawner(session, dt, rng, &mut events);
    advance_items(session, dt);
    resolve_items(session, &mut events);

    events
}
