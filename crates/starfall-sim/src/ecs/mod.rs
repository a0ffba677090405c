//! Entity-component registry.
//!
//! Struct-of-arrays storage: each component kind has its own
//! `ComponentStore<T>` indexed by entity index. Entities are generational
//! handles; a deleted id is inert forever.

pub mod component;
pub mod entity;
pub mod query;
pub mod registry;
pub mod store;

pub use component::{Component, ComponentKind, ComponentValue};
pub use entity::EntityId;
pub use query::Query;
pub use registry::Registry;
