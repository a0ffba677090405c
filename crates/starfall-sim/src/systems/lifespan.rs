//! Lifespan system: counts down `Lifespan` and deletes expired entities.
//!
//! The tick/expire loop is shared with the cosmetic timers in `fade.rs`
//! through the `Countdown` trait.

use starfall_core::components::{DamageIndicator, Explosion, Lifespan};

use crate::ecs::{Component, EntityId, Registry};

/// A component carrying a millisecond countdown.
pub trait Countdown: Component {
    fn remaining_ms_mut(&mut self) -> &mut f64;

    /// Advance the countdown; returns `true` once it has reached zero.
    fn tick(&mut self, delta_ms: f64) -> bool {
        let remaining = self.remaining_ms_mut();
        *remaining -= delta_ms;
        *remaining <= 0.0
    }
}

impl Countdown for Lifespan {
    fn remaining_ms_mut(&mut self) -> &mut f64 {
        &mut self.remaining_ms
    }
}

impl Countdown for DamageIndicator {
    fn remaining_ms_mut(&mut self) -> &mut f64 {
        &mut self.remaining_ms
    }
}

impl Countdown for Explosion {
    fn remaining_ms_mut(&mut self) -> &mut f64 {
        &mut self.remaining_ms
    }
}

/// Decrement every `T` by `delta_ms` and delete the entities whose
/// countdown reached zero or below. Returns the deleted ids.
pub fn tick_and_expire<T: Countdown>(registry: &mut Registry, delta_ms: f64) -> Vec<EntityId> {
    let mut expired = Vec::new();
    for (id, countdown) in registry.iter_mut::<T>() {
        if countdown.tick(delta_ms) {
            expired.push(id);
        }
    }
    // Deleting is deferred until the store borrow above has ended.
    for &id in &expired {
        registry.delete_entity(id);
    }
    expired
}

/// Returns the ids deleted this frame.
pub fn run(registry: &mut Registry, delta_ms: f64) -> Vec<EntityId> {
    tick_and_expire::<Lifespan>(registry, delta_ms)
}
