//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller, never sampled here
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{suggest_label, suggest_zone};
pub use collision::{Resolution, classify, in_catch_band, resolve_items};
pub use level::{LevelParams, advance_level_clock, fall_duration_for_level, level_params};
pub use spawn::{RandomSource, ScriptedRandom, advance_spawner, spawn_item};
pub use state::{
    FallingItem, GameEvent, GamePhase, GameSession, ItemKind, RngState, Zone,
};
pub use tick::{sanitize_dt, tick};
