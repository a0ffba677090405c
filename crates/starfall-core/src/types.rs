//! Fundamental geometric types.
//!
//! Screen space: x grows to the right, y grows downward, units are pixels.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Heading toward another position in radians (`atan2(dy, dx)`).
    pub fn angle_to(&self, other: &Position) -> f64 {
        let d = other.as_vec() - self.as_vec();
        d.y.atan2(d.x)
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity of `speed` along `angle` (radians).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self {
            dx: angle.cos() * speed,
            dy: angle.sin() * speed,
        }
    }

    /// Velocity of `speed` pointing from `from` toward `to`.
    /// Returns `None` when the two points coincide.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Option<Self> {
        let d = to.as_vec() - from.as_vec();
        let distance = d.length();
        if distance > 0.0 {
            let v = d / distance * speed;
            Some(Self { dx: v.x, dy: v.y })
        } else {
            None
        }
    }

    pub fn speed(&self) -> f64 {
        DVec2::new(self.dx, self.dy).length()
    }
}

/// Axis-aligned play area, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl PlayArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a position so a circle of `margin` radius stays inside.
    pub fn clamp(&self, pos: &mut Position, margin: f64) {
        pos.x = pos.x.min(self.width - margin).max(margin);
        pos.y = pos.y.min(self.height - margin).max(margin);
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_PLAY_WIDTH,
            height: crate::constants::DEFAULT_PLAY_HEIGHT,
        }
    }
}

/// Strict circle overlap: touching circles do not collide.
pub fn circles_overlap(a: &Position, ra: f64, b: &Position, rb: f64) -> bool {
    a.distance_to(b) < ra + rb
}
