//! Game state and core simulation types
//!
//! All state a renderer reads and the tick mutates lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::reset_level_params;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host to start a run
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended (bomb caught or out of lives)
    GameOver,
}

/// One of the three horizontal lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Zone {
    Left,
    #[default]
    Center,
    Right,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];

    pub fn index(self) -> usize {
        match self {
            Zone::Left => 0,
            Zone::Center => 1,
            Zone::Right => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a pose classifier label. Labels are exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "LEFT" => Some(Zone::Left),
            "CENTER" => Some(Zone::Center),
            "RIGHT" => Some(Zone::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Left => "LEFT",
            Zone::Center => "CENTER",
            Zone::Right => "RIGHT",
        }
    }

    /// Horizontal lane center in the 200-unit field
    pub fn center_x(self) -> f32 {
        match self {
            Zone::Left => 33.0,
            Zone::Center => 100.0,
            Zone::Right => 167.0,
        }
    }
}

/// Falling item catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Bomb,
    Apple,
    Pear,
    Orange,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Bomb,
        ItemKind::Apple,
        ItemKind::Pear,
        ItemKind::Orange,
    ];

    /// Points awarded on catch (bombs end the run instead)
    pub fn points(self) -> u64 {
        match self {
            ItemKind::Bomb => 0,
            ItemKind::Apple => 100,
            ItemKind::Pear => 150,
            ItemKind::Orange => 200,
        }
    }

    pub fn is_bomb(self) -> bool {
        self == ItemKind::Bomb
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Bomb => "bomb",
            ItemKind::Apple => "apple",
            ItemKind::Pear => "pear",
            ItemKind::Orange => "orange",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ItemKind::Bomb => "💣",
            ItemKind::Apple => "🍎",
            ItemKind::Pear => "🍐",
            ItemKind::Orange => "🍊",
        }
    }

    /// Pick a kind from a uniform roll in [0, 1).
    ///
    /// Cumulative table: bomb < 0.2, apple < 0.5, pear < 0.8, orange otherwise.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.2 {
            ItemKind::Bomb
        } else if roll < 0.5 {
            ItemKind::Apple
        } else if roll < 0.8 {
            ItemKind::Pear
        } else {
            ItemKind::Orange
        }
    }
}

/// An item falling toward the basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub zone: Zone,
    /// Vertical position in field units (grows downward)
    pub y: f32,
    pub kind: ItemKind,
    /// Set once, on catch; the item is dropped in the same pass
    pub collected: bool,
}

impl FallingItem {
    pub fn new(id: u32, zone: Zone, kind: ItemKind, y: f32) -> Self {
        Self {
            id,
            zone,
            y,
            kind,
            collected: false,
        }
    }
}

/// Things that happened during a tick (for audio/haptics hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, zone: Zone, kind: ItemKind },
    Caught { id: u32, kind: ItemKind, points: u64 },
    Missed { id: u32, kind: ItemKind, miss_count: u8 },
    BombDodged { id: u32 },
    LevelUp { level: u32 },
    GameOver { score: u64, level: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (single instance, owned by the host)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Current phase
    pub phase: GamePhase,
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Seconds left on the current level (may dip below zero for one frame)
    pub level_time_remaining: f32,
    pub miss_count: u8,
    /// Lane the basket occupies; only pose input writes this
    pub basket_zone: Zone,
    /// Seconds for an item to cross the field at this level
    pub fall_duration: f32,
    /// Countdown to the next spawn
    pub spawn_timer: f32,
    /// Active items in spawn order
    pub items: Vec<FallingItem>,
    /// WARNING banner countdown (presentation only)
    pub warning_timer: f32,
    /// LEVEL UP banner countdown (presentation only)
    pub level_up_timer: f32,
    /// Balance table in effect
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_tuning(Tuning::default())
    }
}

impl GameSession {
    /// Create a session in the Ready phase. Rejects unplayable tuning.
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::with_tuning(tuning))
    }

    fn with_tuning(tuning: Tuning) -> Self {
        let mut session = Self {
            phase: GamePhase::Ready,
            score: 0,
            level: 1,
            level_time_remaining: 0.0,
            miss_count: 0,
            basket_zone: Zone::Center,
            fall_duration: 0.0,
            spawn_timer: 0.0,
            items: Vec::new(),
            warning_timer: 0.0,
            level_up_timer: 0.0,
            tuning,
            next_id: 1,
        };
        reset_level_params(&mut session);
        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Begin a fresh run, discarding everything from the previous one
    pub fn start(&mut self) {
        self.score = 0;
        self.level = 1;
        self.miss_count = 0;
        self.items.clear();
        self.warning_timer = 0.0;
        self.level_up_timer = 0.0;
        reset_level_params(self);
        self.phase = GamePhase::Playing;
        log::info!("Session started (fall {:.2}s)", self.fall_duration);
    }

    /// Return to Ready. Score and level stay readable.
    pub fn stop(&mut self) {
        self.phase = GamePhase::Ready;
    }

    /// Apply a pose label. Returns true if the basket lane was set.
    ///
    /// Ignored outside Playing and for unrecognized labels.
    pub fn on_pose_detected(&mut self, label: &str) -> bool {
        if !self.is_playing() {
            return false;
        }
        match Zone::from_label(label) {
            Some(zone) => {
                self.basket_zone = zone;
                true
            }
            None => {
                log::debug!("Ignoring unknown pose label {:?}", label);
                false
            }
        }
    }

    /// Enter GameOver. Returns false if the session had already ended.
    pub fn trigger_game_over(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over: score {} at level {}", self.score, self.level);
        true
    }

    /// Lives left before game over
    pub fn lives_remaining(&self) -> u8 {
        self.tuning.max_miss.saturating_sub(self.miss_count)
    }

    /// Level time rounded up for the HUD
    pub fn time_display(&self) -> u32 {
        self.level_time_remaining.max(0.0).ceil() as u32
    }

    /// WARNING shows only while its timer runs and exactly one life is left
    pub fn show_warning(&self) -> bool {
        self.warning_timer > 0.0 && self.lives_remaining() == 1
    }

    pub fn show_level_up(&self) -> bool {
        self.level_up_timer > 0.0
    }

    /// Current fall speed in field units per second
    pub fn item_speed(&self) -> f32 {
        self.tuning.speed_for(self.fall_duration)
    }
}
