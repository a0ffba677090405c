//! Cosmetic timers: damage numbers and explosions fade out and vanish.
//! Opacity is derived from the remaining time at render; explosions also
//! grow their renderable radius as they age.

use starfall_core::components::{DamageIndicator, Explosion, Renderable};

use crate::ecs::Registry;
use crate::systems::lifespan::tick_and_expire;

pub fn run_damage_indicators(registry: &mut Registry, delta_ms: f64) {
    tick_and_expire::<DamageIndicator>(registry, delta_ms);
}

pub fn run_explosions(registry: &mut Registry, delta_ms: f64) {
    tick_and_expire::<Explosion>(registry, delta_ms);

    for (id, (explosion, _)) in registry.query_with_ids::<(Explosion, Renderable)>() {
        if let Some(renderable) = registry.get_mut::<Renderable>(id) {
            renderable.radius = explosion.radius();
        }
    }
}

pub fn run(registry: &mut Registry, delta_ms: f64) {
    run_damage_indicators(registry, delta_ms);
    run_explosions(registry, delta_ms);
}
