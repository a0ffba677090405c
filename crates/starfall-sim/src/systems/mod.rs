//! Per-frame systems.
//!
//! Systems are plain functions over `&mut Registry` plus whatever context
//! they need. They keep no state of their own: anything that must survive
//! between frames (spawn accumulator, score) is owned by the `Simulation`
//! and passed in. `Simulation::frame` invokes them in a fixed order.

pub mod collision;
pub mod enemy_ai;
pub mod fade;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod player;
pub mod shooting;
pub mod snapshot;
pub mod spawner;
