//! Shooting system: fires one bullet from each player ship toward the
//! pointer while the pointer is held, at most once per cooldown.

use starfall_core::components::Ship;
use starfall_core::config::Tunables;
use starfall_core::enums::Faction;
use starfall_core::game::InputState;
use starfall_core::types::Position;

use crate::ecs::Registry;
use crate::entities;

/// `now_ms` is the current frame timestamp.
pub fn run(registry: &mut Registry, input: &mut InputState, tunables: &Tunables, now_ms: f64) {
    if !input.pointer_down {
        return;
    }
    if now_ms - input.last_shot_ms < tunables.bullet_cooldown_ms {
        return;
    }

    for (ship, pos) in registry.query::<(Ship, Position)>() {
        if !ship.is_player() {
            continue;
        }
        let angle = pos.angle_to(&input.pointer);
        entities::spawn_bullet(registry, tunables, pos, angle, Faction::Player);
        input.last_shot_ms = now_ms;
    }
}
