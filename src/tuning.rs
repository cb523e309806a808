//! Data-driven game balance
//!
//! Every timing and geometry constant the simulation reads. Defaults match
//! `crate::consts`; hosts may override them from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating a tuning table
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tuning field `{field}` must be positive and finite")]
    NonPositive { field: &'static str },

    #[error("catch band must satisfy 0 <= top < bottom <= field_size (got {top}..{bottom})")]
    InvalidCatchBand { top: f32, bottom: f32 },

    #[error("spawn window must satisfy 0 < min <= max (got {min}..{max})")]
    InvalidSpawnWindow { min: f32, max: f32 },

    #[error("max_miss must be at least 1")]
    ZeroMaxMiss,
}

/// Balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field geometry ===
    /// Logical field height; items past this have hit the floor
    pub field_size: f32,
    /// Starting vertical position for new items
    pub spawn_y: f32,
    /// Upper edge of the catch band (exclusive)
    pub catch_band_top: f32,
    /// Lower edge of the catch band (exclusive)
    pub catch_band_bottom: f32,

    // === Levels ===
    /// Seconds spent on each level
    pub level_duration: f32,
    pub base_fall_duration: f32,
    pub fall_duration_step: f32,
    pub min_fall_duration: f32,

    // === Spawning ===
    /// Spawn interval bounds as fractions of the fall duration
    pub spawn_rate_min: f32,
    pub spawn_rate_max: f32,

    // === Rules ===
    pub max_miss: u8,

    // === Presentation ===
    pub banner_duration: f32,

    // === Host clock ===
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_size: FIELD_SIZE,
            spawn_y: SPAWN_Y,
            catch_band_top: CATCH_BAND_TOP,
            catch_band_bottom: CATCH_BAND_BOTTOM,

            level_duration: LEVEL_DURATION,
            base_fall_duration: BASE_FALL_DURATION,
            fall_duration_step: FALL_DURATION_STEP,
            min_fall_duration: MIN_FALL_DURATION,

            spawn_rate_min: SPAWN_RATE_MIN,
            spawn_rate_max: SPAWN_RATE_MAX,

            max_miss: MAX_MISS,

            banner_duration: BANNER_DURATION,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the table describes a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_size", self.field_size),
            ("level_duration", self.level_duration),
            ("base_fall_duration", self.base_fall_duration),
            ("min_fall_duration", self.min_fall_duration),
            ("banner_duration", self.banner_duration),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NonPositive { field });
            }
        }
        // Zero step is allowed (flat difficulty), negative is not
        if !(self.fall_duration_step.is_finite() && self.fall_duration_step >= 0.0) {
            return Err(TuningError::NonPositive {
                field: "fall_duration_step",
            });
        }
        if !self.spawn_y.is_finite() {
            return Err(TuningError::NonPositive { field: "spawn_y" });
        }

        let (top, bottom) = (self.catch_band_top, self.catch_band_bottom);
        if !(top.is_finite() && bottom.is_finite())
            || top < 0.0
            || top >= bottom
            || bottom > self.field_size
        {
            return Err(TuningError::InvalidCatchBand { top, bottom });
        }

        let (min, max) = (self.spawn_rate_min, self.spawn_rate_max);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(TuningError::InvalidSpawnWindow { min, max });
        }

        if self.max_miss == 0 {
            return Err(TuningError::ZeroMaxMiss);
        }

        Ok(())
    }

    /// Vertical speed (units/s) for a given fall duration
    pub fn speed_for(&self, fall_duration: f32) -> f32 {
        self.field_size / fall_duration
    }
}
