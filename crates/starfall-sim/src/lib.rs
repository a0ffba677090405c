//! Simulation runtime for STARFALL.
//!
//! Owns the entity-component registry, runs the gameplay systems once per
//! display refresh, and produces `RenderSnapshot`s for a renderer.

pub mod ecs;
pub mod engine;
pub mod entities;
pub mod systems;

pub use ecs::{EntityId, Registry};
pub use engine::{SimConfig, Simulation};
pub use starfall_core as core;
