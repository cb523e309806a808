//! Item spawning
//!
//! The only randomized gameplay: which lane, which item, and how long until
//! the next one. All draws go through `RandomSource` so tests can script them.

use rand::Rng;
use rand_pcg::Pcg32;

use super::level::level_params;
use super::state::{FallingItem, GameEvent, GameSession, ItemKind, Zone};

/// Uniform random numbers in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into [0, 1). An empty script always yields 0.
    pub fn new(values: Vec<f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 0.999_999) } else { 0.0 })
            .collect();
        Self { values, cursor: 0 }
    }

    /// Draws needed to spawn `kind` in `zone`, followed by an interval draw
    pub fn spawning(zone: Zone, kind: ItemKind, interval_roll: f32) -> Self {
        Self::new(vec![zone_roll(zone), kind_roll(kind), interval_roll])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

/// A roll that lands in the middle of `zone`'s third
pub fn zone_roll(zone: Zone) -> f32 {
    (zone.index() as f32 + 0.5) / 3.0
}

/// A roll that lands inside `kind`'s slice of the distribution
pub fn kind_roll(kind: ItemKind) -> f32 {
    match kind {
        ItemKind::Bomb => 0.1,
        ItemKind::Apple => 0.35,
        ItemKind::Pear => 0.65,
        ItemKind::Orange => 0.9,
    }
}

/// Uniform lane choice
pub fn roll_zone(rng: &mut impl RandomSource) -> Zone {
    let index = (rng.next_unit() * 3.0).floor() as usize;
    Zone::from_index(index.min(2)).unwrap_or_default()
}

pub fn roll_kind(rng: &mut impl RandomSource) -> ItemKind {
    ItemKind::from_roll(rng.next_unit())
}

/// Gap until the next spawn: uniform across the level's spawn window
pub fn next_spawn_interval(session: &GameSession, rng: &mut impl RandomSource) -> f32 {
    let params = level_params(session.level, &session.tuning);
    let span = params.spawn_interval_max - params.spawn_interval_min;
    params.spawn_interval_min + rng.next_unit() * span
}

/// Create an item above the field. Zone is drawn before kind.
pub fn spawn_item(session: &mut GameSession, rng: &mut impl RandomSource) -> FallingItem {
    let zone = roll_zone(rng);
    let kind = roll_kind(rng);
    let id = session.next_entity_id();
    let item = FallingItem::new(id, zone, kind, session.tuning.spawn_y);
    session.items.push(item.clone());
    log::debug!("Spawned {} #{} in {}", kind.name(), id, zone.as_str());
    item
}

/// Run the spawn countdown; spawn one item and reseed when it expires
pub fn advance_spawner(
    session: &mut GameSession,
    dt: f32,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) {
    session.spawn_timer -= dt;
    if session.spawn_timer > 0.0 {
        return;
    }

    let item = spawn_item(session, rng);
    events.push(GameEvent::Spawned {
        id: item.id,
        zone: item.zone,
        kind: item.kind,
    });
    session.spawn_timer = next_spawn_interval(session, rng);
}
