//! Kinematic integration system.
//!
//! Updates Position from Velocity each frame: position += velocity * dt,
//! with dt the measured frame delta in seconds.

use starfall_core::types::{Position, Velocity};

use crate::ecs::Registry;

/// Run kinematic integration for all entities with Velocity + Position.
pub fn run(registry: &mut Registry, delta_ms: f64) {
    let dt = delta_ms / 1000.0;
    for (id, (vel, _)) in registry.query_with_ids::<(Velocity, Position)>() {
        if let Some(pos) = registry.get_mut::<Position>(id) {
            pos.x += vel.dx * dt;
            pos.y += vel.dy * dt;
        }
    }
}
