//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a ship fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    #[default]
    Player,
    Enemy,
}

/// Who fired a bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Player,
    Enemy,
}

/// Primitive the renderer draws for an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Circle,
    /// Points along the owning ship's rotation.
    Triangle,
}

/// Movement keys recognized by the input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a host key name (`"w"`, `"A"`, ...) to a movement key.
    /// Both letter cases are accepted; anything else is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::Up),
            "s" | "S" => Some(Key::Down),
            "a" | "A" => Some(Key::Left),
            "d" | "D" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Edge of the play area an enemy enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}
