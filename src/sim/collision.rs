//! Catch and floor resolution
//!
//! Each frame every item is classified against the basket first, then effects
//! are applied and resolved items are compacted out in a single pass. No item
//! survives the frame it resolves in.

use super::state::{FallingItem, GameEvent, GameSession, Zone};
use crate::tuning::Tuning;

/// What happens to an item this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Still falling
    Falling,
    /// Landed in the basket
    Caught,
    /// Fell past the floor without being caught
    Floored,
}

/// True when `y` lies strictly inside the catch band
#[inline]
pub fn in_catch_band(y: f32, tuning: &Tuning) -> bool {
    y > tuning.catch_band_top && y < tuning.catch_band_bottom
}

/// Classify one item against the basket lane.
///
/// A catch wins over the floor check; an in-band item in the wrong lane keeps
/// falling.
pub fn classify(item: &FallingItem, basket: Zone, tuning: &Tuning) -> Resolution {
    if !item.collected && in_catch_band(item.y, tuning) && item.zone == basket {
        Resolution::Caught
    } else if item.y > tuning.field_size {
        Resolution::Floored
    } else {
        Resolution::Falling
    }
}

fn end_run(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    if session.trigger_game_over() {
        events.push(GameEvent::GameOver {
            score: session.score,
            level: session.level,
        });
    }
}

fn apply_catch(session: &mut GameSession, item: &mut FallingItem, events: &mut Vec<GameEvent>) {
    item.collected = true;
    let points = item.kind.points();
    events.push(GameEvent::Caught {
        id: item.id,
        kind: item.kind,
        points,
    });

    if item.kind.is_bomb() {
        log::debug!("Caught bomb #{}", item.id);
        end_run(session, events);
    } else {
        session.score += points;
        log::debug!("Caught {} #{} (+{})", item.kind.name(), item.id, points);
    }
}

fn apply_floor(session: &mut GameSession, item: &FallingItem, events: &mut Vec<GameEvent>) {
    // Letting a bomb through is the right play
    if item.kind.is_bomb() {
        events.push(GameEvent::BombDodged { id: item.id });
        return;
    }

    let max_miss = session.tuning.max_miss;
    session.miss_count = session.miss_count.saturating_add(1).min(max_miss);
    session.warning_timer = session.tuning.banner_duration;
    events.push(GameEvent::Missed {
        id: item.id,
        kind: item.kind,
        miss_count: session.miss_count,
    });
    log::debug!(
        "Missed {} #{} ({}/{})",
        item.kind.name(),
        item.id,
        session.miss_count,
        max_miss
    );

    if session.miss_count >= max_miss {
        end_run(session, events);
    }
}

/// Resolve every item against the basket and drop the resolved ones.
///
/// Effects apply newest item first. Items later in the pass still resolve
/// after a game over is triggered.
pub fn resolve_items(session: &mut GameSession, events: &mut Vec<GameEvent>) {
    let mut items = std::mem::take(&mut session.items);
    let basket = session.basket_zone;

    let resolutions: Vec<Resolution> = items
        .iter()
        .map(|item| classify(item, basket, &session.tuning))
        .collect();

    for (item, resolution) in items.iter_mut().zip(&resolutions).rev() {
        match resolution {
            Resolution::Falling => {}
            Resolution::Caught => apply_catch(session, item, events),
            Resolution::Floored => apply_floor(session, item, events),
        }
    }

    let mut keep = resolutions.iter();
    items.retain(|_| keep.next() == Some(&Resolution::Falling));
    session.items = items;
}
