//! Conjunctive queries over the component stores.
//!
//! A query is a tuple of component types `(T1, .., Tn)`. The store of `T1`
//! drives candidate selection; every other type is a membership filter.
//! Put the rarest component first for the cheapest scan. Results are
//! materialized clones, so they stay valid after the registry changes.

use super::component::{Component, Stores};

/// A tuple of component types that can be matched against the stores.
pub trait Query {
    /// The cloned component values of one matching entity.
    type Item;

    /// `(entity index, components)` for every entity holding all types.
    fn matches(stores: &Stores) -> Vec<(u32, Self::Item)>;
}

macro_rules! impl_query {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: Component $(, $rest: Component)*> Query for ($first, $($rest,)*) {
            type Item = ($first, $($rest,)*);

            fn matches(stores: &Stores) -> Vec<(u32, Self::Item)> {
                let driver = <$first as Component>::store(stores);
                if driver.is_empty() {
                    return Vec::new();
                }
                driver
                    .iter()
                    // A missing component on any other store rejects the candidate.
                    .filter_map(|(index, first)| {
                        Some((
                            index,
                            (
                                first.clone(),
                                $(<$rest as Component>::store(stores).get(index)?.clone(),)*
                            ),
                        ))
                    })
                    .collect()
            }
        }
    };
}

impl_query!(A);
impl_query!(A, B);
impl_query!(A, B, C);
impl_query!(A, B, C, D);
impl_query!(A, B, C, D, E);
