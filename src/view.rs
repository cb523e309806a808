//! Read-only frame snapshot
//!
//! Everything a renderer or HUD needs, in the 200x200 logical field. Scaling
//! to the display is the renderer's job.

use serde::Serialize;

use crate::consts::BASKET_Y;
use crate::sim::{GamePhase, GameSession, ItemKind, Zone};

/// One item as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub zone: Zone,
    pub kind: ItemKind,
    pub icon: &'static str,
    /// Lane center
    pub x: f32,
    pub y: f32,
}

/// HUD and playfield state for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    /// Level time rounded up
    pub time_remaining: u32,
    pub miss_count: u8,
    pub lives: u8,
    pub basket_zone: Zone,
    pub basket_x: f32,
    pub basket_y: f32,
    pub items: Vec<ItemView>,
    pub show_warning: bool,
    pub show_level_up: bool,
}

impl FrameView {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            phase: session.phase,
            score: session.score,
            level: session.level,
            time_remaining: session.time_display(),
            miss_count: session.miss_count,
            lives: session.lives_remaining(),
            basket_zone: session.basket_zone,
            basket_x: session.basket_zone.center_x(),
            basket_y: BASKET_Y,
            items: session
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id,
                    zone: item.zone,
                    kind: item.kind,
                    icon: item.kind.icon(),
                    x: item.zone.center_x(),
                    y: item.y,
                })
                .collect(),
            show_warning: session.show_warning(),
            show_level_up: session.show_level_up(),
        }
    }

    /// JSON for hosts that render outside Rust
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
