//! Catch Zone - A pose-driven three-lane catching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (levels, spawning, movement, scoring, game state)
//! - `game`: Host-facing state machine binding the simulation to a clock and RNG
//! - `platform`: Browser/native platform abstraction (time, wasm bindings)
//! - `tuning`: Data-driven game balance
//! - `view`: Read-only snapshot for renderers

pub mod game;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use game::CatchGame;
pub use tuning::{Tuning, TuningError};
pub use view::{FrameView, ItemView};

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (square, renderer scales to display)
    pub const FIELD_SIZE: f32 = 200.0;
    /// Items spawn just above the visible field
    pub const SPAWN_Y: f32 = -20.0;

    /// Catch band (exclusive on both ends)
    pub const CATCH_BAND_TOP: f32 = 160.0;
    pub const CATCH_BAND_BOTTOM: f32 = 180.0;
    /// Basket draw height, inside the catch band
    pub const BASKET_Y: f32 = 170.0;

    /// Seconds per level
    pub const LEVEL_DURATION: f32 = 20.0;

    /// Fall time from top to floor at level 1 (seconds)
    pub const BASE_FALL_DURATION: f32 = 2.0;
    /// Fall time reduction per level
    pub const FALL_DURATION_STEP: f32 = 0.2;
    /// Fastest possible fall time
    pub const MIN_FALL_DURATION: f32 = 0.5;

    /// Spawn interval as a fraction of fall duration
    pub const SPAWN_RATE_MIN: f32 = 0.6;
    pub const SPAWN_RATE_MAX: f32 = 0.8;

    /// Misses allowed before game over
    pub const MAX_MISS: u8 = 2;

    /// WARNING / LEVEL UP banner display time (seconds)
    pub const BANNER_DURATION: f32 = 2.0;

    /// Largest frame delta accepted (a suspended tab can report seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}
