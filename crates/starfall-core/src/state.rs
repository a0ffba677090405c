//! Render snapshot: the complete visible state handed to a renderer after
//! each frame. Built read-only from the registry, so a renderer on another
//! thread never observes a frame mid-mutation.

use serde::{Deserialize, Serialize};

use crate::components::Color;
use crate::enums::Shape;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub sprites: Vec<SpriteView>,
    pub labels: Vec<LabelView>,
    pub hud: HudView,
}

/// One drawable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub shape: Shape,
    /// Facing in radians (ships only, 0 otherwise).
    pub rotation: f64,
    /// 1.0 = opaque.
    pub opacity: f64,
}

/// Floating text such as damage numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelView {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub opacity: f64,
}

/// Overlay text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    /// `(current, max)` of the player, absent if there is no player.
    pub player_health: Option<(f64, f64)>,
    pub game_over: bool,
    pub elapsed_ms: f64,
}
