//! ECS components attached to registry entities.
//!
//! Components are plain data records. Game logic lives in systems; the
//! helpers here only encode arithmetic that every caller must agree on
//! (damage floors at zero, countdowns expire at or below zero).
//! `Position` and `Velocity` live in `types.rs` and are components too.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, Shape, ShipKind};

/// Hit points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`, never going below zero.
    pub fn damage(&mut self, amount: f64) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }
}

/// A steerable ship. `rotation` is the facing in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub kind: ShipKind,
    pub rotation: f64,
}

impl Ship {
    pub fn player() -> Self {
        Self {
            kind: ShipKind::Player,
            rotation: 0.0,
        }
    }

    pub fn enemy() -> Self {
        Self {
            kind: ShipKind::Enemy,
            rotation: 0.0,
        }
    }

    pub fn is_player(&self) -> bool {
        self.kind == ShipKind::Player
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);
    pub const ORANGE: Color = Color::rgb(0xff, 0x88, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How to draw the entity. `radius` doubles as the collision radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub shape: Shape,
    pub color: Color,
    pub radius: f64,
}

/// Projectile payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub damage: f64,
    pub owner: Faction,
}

/// Marks a hostile; `score_value` is awarded when it is shot down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub score_value: u32,
}

/// Countdown after which the entity is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifespan {
    pub remaining_ms: f64,
}

/// Floating "-N" label shown where damage landed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageIndicator {
    pub damage: f64,
    pub remaining_ms: f64,
    pub duration_ms: f64,
}

/// Expanding, fading ring left behind by a destroyed enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub remaining_ms: f64,
    pub duration_ms: f64,
    pub start_radius: f64,
    pub end_radius: f64,
}

/// Shared by the cosmetic countdowns: 1.0 when fresh, 0.0 when expired.
pub fn fade_fraction(remaining_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    (remaining_ms / duration_ms).clamp(0.0, 1.0)
}

impl DamageIndicator {
    pub fn opacity(&self) -> f64 {
        fade_fraction(self.remaining_ms, self.duration_ms)
    }
}

impl Explosion {
    pub fn opacity(&self) -> f64 {
        fade_fraction(self.remaining_ms, self.duration_ms)
    }

    /// Radius interpolated from start to end as the explosion ages.
    pub fn radius(&self) -> f64 {
        let progress = 1.0 - self.opacity();
        self.start_radius + (self.end_radius - self.start_radius) * progress
    }
}
