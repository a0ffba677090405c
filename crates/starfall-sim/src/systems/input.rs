//! Input system: maps held movement keys to the player's velocity.

use starfall_core::components::Ship;
use starfall_core::config::Tunables;
use starfall_core::enums::Key;
use starfall_core::game::InputState;
use starfall_core::types::Velocity;

use crate::ecs::Registry;

/// Unit direction from the held keys; diagonals are normalized.
pub fn direction(input: &InputState) -> (f64, f64) {
    let mut x: f64 = 0.0;
    let mut y: f64 = 0.0;
    if input.is_pressed(Key::Up) {
        y -= 1.0;
    }
    if input.is_pressed(Key::Down) {
        y += 1.0;
    }
    if input.is_pressed(Key::Left) {
        x -= 1.0;
    }
    if input.is_pressed(Key::Right) {
        x += 1.0;
    }
    if x != 0.0 && y != 0.0 {
        let magnitude = x.hypot(y);
        x /= magnitude;
        y /= magnitude;
    }
    (x, y)
}

pub fn run(registry: &mut Registry, input: &InputState, tunables: &Tunables) {
    let (x, y) = direction(input);
    let velocity = Velocity::new(x * tunables.player_speed, y * tunables.player_speed);

    for (id, (ship, _)) in registry.query_with_ids::<(Ship, Velocity)>() {
        if !ship.is_player() {
            continue;
        }
        if let Some(vel) = registry.get_mut::<Velocity>(id) {
            *vel = velocity;
        }
    }
}
