//! Enemy AI: every enemy heads straight for the player at enemy speed.

use starfall_core::components::Enemy;
use starfall_core::config::Tunables;
use starfall_core::types::{Position, Velocity};

use crate::ecs::Registry;
use crate::entities;

/// Re-aim all enemies at the player's current position. Does nothing when
/// there is no player. An enemy sitting exactly on the player keeps its
/// previous velocity.
pub fn run(registry: &mut Registry, tunables: &Tunables) {
    let Some((_, player_pos)) = entities::find_player(registry) else {
        return;
    };

    for (id, (_, pos, _)) in registry.query_with_ids::<(Enemy, Position, Velocity)>() {
        let Some(heading) = Velocity::toward(&pos, &player_pos, tunables.enemy_speed) else {
            continue;
        };
        if let Some(vel) = registry.get_mut::<Velocity>(id) {
            *vel = heading;
        }
    }
}
