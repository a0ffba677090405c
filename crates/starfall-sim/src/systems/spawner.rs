//! Enemy spawner: time-accumulator driven, one enemy per interval, the
//! interval shrinking with session time.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starfall_core::config::Tunables;
use starfall_core::enums::Edge;
use starfall_core::game::GameState;
use starfall_core::types::{PlayArea, Position, Velocity};

use crate::ecs::{EntityId, Registry};
use crate::entities;

/// Time accumulated toward the next spawn. Owned by the frame driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub accumulator_ms: f64,
}

impl SpawnTimer {
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}

/// Current spawn interval:
/// `base * max(floor, 1 - elapsed / ramp)`, pinned at `floor * base`
/// once the ramp is over.
pub fn spawn_interval(tunables: &Tunables, elapsed_ms: f64) -> f64 {
    let ramp = if tunables.difficulty_ramp_ms > 0.0 {
        1.0 - elapsed_ms / tunables.difficulty_ramp_ms
    } else {
        tunables.difficulty_floor
    };
    tunables.enemy_spawn_interval_ms * ramp.max(tunables.difficulty_floor)
}

/// A uniformly random point just outside a uniformly random edge.
pub fn pick_spawn_point(rng: &mut ChaCha8Rng, area: &PlayArea, offset: f64) -> (Edge, Position) {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let along: f64 = rng.gen();
    let pos = match edge {
        Edge::Top => Position::new(along * area.width, -offset),
        Edge::Right => Position::new(area.width + offset, along * area.height),
        Edge::Bottom => Position::new(along * area.width, area.height + offset),
        Edge::Left => Position::new(-offset, along * area.height),
    };
    (edge, pos)
}

/// Advance the accumulator and spawn at most one enemy.
/// Returns the new enemy, if one was spawned.
pub fn run(
    registry: &mut Registry,
    timer: &mut SpawnTimer,
    state: &GameState,
    rng: &mut ChaCha8Rng,
    tunables: &Tunables,
    area: &PlayArea,
    delta_ms: f64,
) -> Option<EntityId> {
    if state.game_over {
        return None;
    }

    timer.accumulator_ms += delta_ms;
    let interval = spawn_interval(tunables, state.elapsed_ms);
    if timer.accumulator_ms < interval {
        return None;
    }
    timer.reset();

    let (edge, pos) = pick_spawn_point(rng, area, tunables.spawn_edge_offset);
    let id = entities::spawn_enemy(registry, tunables, pos);

    // Head for the middle until AI steering takes over next frame.
    if let Some(heading) = Velocity::toward(&pos, &area.center(), tunables.enemy_speed) {
        if let Some(vel) = registry.get_mut::<Velocity>(id) {
            *vel = heading;
        }
    }

    log::trace!(
        "spawned enemy {id} on {edge:?} edge at ({:.0}, {:.0}), interval {interval:.0} ms",
        pos.x,
        pos.y
    );
    Some(id)
}
