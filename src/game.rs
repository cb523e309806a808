//! Host-facing game state machine
//!
//! Wraps a `GameSession` with the clock and RNG it needs so a host can drive
//! the whole game through `start`, `stop`, `on_pose_detected` and `update`.

use rand_pcg::Pcg32;

use crate::platform::{Clock, MonotonicClock};
use crate::sim::{GameEvent, GameSession, RandomSource, RngState, tick};
use crate::tuning::{Tuning, TuningError};
use crate::view::FrameView;

/// A playable game: session, frame clock and spawn RNG
#[derive(Debug)]
pub struct CatchGame<C = MonotonicClock, R = Pcg32> {
    session: GameSession,
    clock: C,
    rng: R,
    /// Clock sample taken by the previous update (or by `start`)
    last_time: f64,
}

impl CatchGame<MonotonicClock, Pcg32> {
    /// Production setup: wall clock and a seeded PCG stream
    pub fn with_seed(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        let game = Self::new(MonotonicClock::new(), RngState::new(seed).to_rng(), tuning)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(game)
    }
}

impl<C: Clock, R: RandomSource> CatchGame<C, R> {
    /// Fails if `tuning` does not describe a playable game
    pub fn new(clock: C, rng: R, tuning: Tuning) -> Result<Self, TuningError> {
        let session = GameSession::new(tuning)?;
        let last_time = clock.now_secs();
        Ok(Self {
            session,
            clock,
            rng,
            last_time,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Direct session access for tools and tests
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Begin a run; the current clock sample becomes the delta baseline
    pub fn start(&mut self) {
        self.session.start();
        self.last_time = self.clock.now_secs();
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    /// Feed a pose label ("LEFT" / "CENTER" / "RIGHT"); anything else is ignored
    pub fn on_pose_detected(&mut self, label: &str) -> bool {
        self.session.on_pose_detected(label)
    }

    /// Advance by the time elapsed since the previous update
    pub fn update(&mut self) -> Vec<GameEvent> {
        if !self.session.is_playing() {
            return Vec::new();
        }
        let now = self.clock.now_secs();
        let dt = (now - self.last_time) as f32;
        self.last_time = now;
        tick(&mut self.session, dt, &mut self.rng)
    }

    /// Advance by an explicit delta (fixed-step hosts, replays)
    pub fn update_with_dt(&mut self, dt: f32) -> Vec<GameEvent> {
        if !self.session.is_playing() {
            return Vec::new();
        }
        self.last_time = self.clock.now_secs();
        tick(&mut self.session, dt, &mut self.rng)
    }

    /// Read-only snapshot for a renderer
    pub fn view(&self) -> FrameView {
        FrameView::from_session(&self.session)
    }
}
