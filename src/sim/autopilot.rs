//! Idle/demo mode pose producer
//!
//! Stands in for the pose classifier when nobody is playing: chase the fruit
//! closest to the basket, stay out of lanes with a bomb about to land.

use std::cmp::Ordering;

use super::state::{GameSession, Zone};

/// How far ahead (seconds) a falling bomb counts as a threat
const BOMB_LOOKAHEAD_SECS: f32 = 0.15;

fn bomb_incoming(session: &GameSession, zone: Zone) -> bool {
    let tuning = &session.tuning;
    let danger_top = tuning.catch_band_top - session.item_speed() * BOMB_LOOKAHEAD_SECS;
    session.items.iter().any(|item| {
        item.kind.is_bomb()
            && item.zone == zone
            && item.y > danger_top
            && item.y < tuning.catch_band_bottom
    })
}

/// Lane the basket should move to, or None to stay put
pub fn suggest_zone(session: &GameSession) -> Option<Zone> {
    if !session.is_playing() {
        return None;
    }

    let band_bottom = session.tuning.catch_band_bottom;
    let target = session
        .items
        .iter()
        .filter(|item| !item.kind.is_bomb() && item.y < band_bottom)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        .map(|item| item.zone);

    match target {
        Some(zone) if !bomb_incoming(session, zone) => Some(zone),
        _ if bomb_incoming(session, session.basket_zone) => Zone::ALL
            .into_iter()
            .find(|zone| !bomb_incoming(session, *zone)),
        _ => None,
    }
}

/// The pose label the autopilot would report this frame
pub fn suggest_label(session: &GameSession) -> Option<&'static str> {
    suggest_zone(session).map(|zone| zone.as_str())
}
