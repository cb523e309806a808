//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic frame clock)
//! - Host bindings (wasm exports for a JS frame loop)

pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use time::{Clock, ManualClock, MonotonicClock};
