//! The statically enumerated component kinds.
//!
//! `component_kinds!` generates, from one list, the `ComponentKind` tag,
//! the `ComponentValue` tagged union used for heterogeneous insertion, the
//! `Stores` aggregate with one typed store per kind, and the `Component`
//! impl that resolves a type to its store at compile time.

use std::collections::BTreeSet;

use starfall_core::components::{
    Bullet, DamageIndicator, Enemy, Explosion, Health, Lifespan, Renderable, Ship,
};
use starfall_core::types::{Position, Velocity};

use super::store::ComponentStore;

/// A type that can be attached to an entity.
pub trait Component: Clone + 'static {
    fn store(stores: &Stores) -> &ComponentStore<Self>;
    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self>;
}

macro_rules! component_kinds {
    ($($name:ident => $field:ident),* $(,)?) => {
        /// Tag identifying a component kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ComponentKind {
            $($name,)*
        }

        /// Any one component value, tagged by kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ComponentValue {
            $($name($name),)*
        }

        impl ComponentValue {
            /// Upsert into the matching store.
            pub(crate) fn insert_into(self, stores: &mut Stores, index: u32) {
                match self {
                    $(ComponentValue::$name(value) => {
                        stores.$field.insert(index, value);
                    })*
                }
            }
        }

        /// One typed store per component kind.
        #[derive(Debug, Default)]
        pub struct Stores {
            $(pub(crate) $field: ComponentStore<$name>,)*
        }

        impl Stores {
            /// Drop every component held by `index`.
            pub(crate) fn remove_all(&mut self, index: u32) {
                $(self.$field.remove(index);)*
            }

            /// Indices present in at least one store.
            pub(crate) fn occupied_indices(&self) -> BTreeSet<u32> {
                let mut indices = BTreeSet::new();
                $(indices.extend(self.$field.indices());)*
                indices
            }

            pub(crate) fn len_of(&self, kind: ComponentKind) -> usize {
                match kind {
                    $(ComponentKind::$name => self.$field.len(),)*
                }
            }
        }

        $(
            impl From<$name> for ComponentValue {
                fn from(value: $name) -> Self {
                    ComponentValue::$name(value)
                }
            }

            impl Component for $name {
                fn store(stores: &Stores) -> &ComponentStore<Self> {
                    &stores.$field
                }

                fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self> {
                    &mut stores.$field
                }
            }
        )*
    };
}

component_kinds! {
    Position => positions,
    Velocity => velocities,
    Health => healths,
    Ship => ships,
    Renderable => renderables,
    Bullet => bullets,
    Enemy => enemies,
    Lifespan => lifespans,
    DamageIndicator => damage_indicators,
    Explosion => explosions,
}
