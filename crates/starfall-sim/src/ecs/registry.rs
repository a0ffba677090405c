use std::collections::BTreeSet;

use super::component::{Component, ComponentKind, ComponentValue, Stores};
use super::entity::{EntityAllocator, EntityId};
use super::query::Query;

/// Owner of every component in a session.
///
/// All operations are total: absent data shows up as `None` or an empty
/// result, never as an error. Operations on a deleted (stale) id do nothing.
#[derive(Debug, Default)]
pub struct Registry {
    allocator: EntityAllocator,
    stores: Stores,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity with no components.
    pub fn spawn(&mut self) -> EntityId {
        self.allocator.allocate()
    }

    /// Allocate an entity and attach `components` to it.
    pub fn spawn_with(&mut self, components: impl IntoIterator<Item = ComponentValue>) -> EntityId {
        let id = self.spawn();
        self.add_components(id, components);
        id
    }

    /// Upsert each component into its kind's store. A later value of the
    /// same kind replaces an earlier one.
    pub fn add_components(
        &mut self,
        id: EntityId,
        components: impl IntoIterator<Item = ComponentValue>,
    ) {
        if !self.allocator.is_alive(id) {
            return;
        }
        for component in components {
            component.insert_into(&mut self.stores, id.index);
        }
    }

    pub fn add_component<T: Component>(&mut self, id: EntityId, component: T) {
        if self.allocator.is_alive(id) {
            T::store_mut(&mut self.stores).insert(id.index, component);
        }
    }

    /// Remove one component, leaving the rest of the entity intact.
    pub fn remove_component<T: Component>(&mut self, id: EntityId) -> Option<T> {
        if !self.allocator.is_alive(id) {
            return None;
        }
        T::store_mut(&mut self.stores).remove(id.index)
    }

    /// Remove the entity from every store and retire its id. Idempotent.
    pub fn delete_entity(&mut self, id: EntityId) {
        if !self.allocator.is_alive(id) {
            return;
        }
        self.stores.remove_all(id.index);
        self.allocator.deallocate(id);
    }

    /// Every entity present in at least one store.
    pub fn get_all_entities(&self) -> BTreeSet<EntityId> {
        self.stores
            .occupied_indices()
            .into_iter()
            .filter_map(|index| self.allocator.id_at(index))
            .collect()
    }

    /// Delete every live entity, including ones holding no components.
    pub fn clear(&mut self) {
        for id in self.get_all_entities() {
            self.delete_entity(id);
        }
        for id in self.allocator.live_ids() {
            self.allocator.deallocate(id);
        }
    }

    /// Component values of every entity that has all of `Q`.
    pub fn query<Q: Query>(&self) -> Vec<Q::Item> {
        Q::matches(&self.stores)
            .into_iter()
            .map(|(_, item)| item)
            .collect()
    }

    /// Like `query`, with each result prefixed by its entity id.
    pub fn query_with_ids<Q: Query>(&self) -> Vec<(EntityId, Q::Item)> {
        Q::matches(&self.stores)
            .into_iter()
            .filter_map(|(index, item)| Some((self.allocator.id_at(index)?, item)))
            .collect()
    }

    pub fn get<T: Component>(&self, id: EntityId) -> Option<&T> {
        if !self.allocator.is_alive(id) {
            return None;
        }
        T::store(&self.stores).get(id.index)
    }

    pub fn get_mut<T: Component>(&mut self, id: EntityId) -> Option<&mut T> {
        if !self.allocator.is_alive(id) {
            return None;
        }
        T::store_mut(&mut self.stores).get_mut(id.index)
    }

    pub fn has<T: Component>(&self, id: EntityId) -> bool {
        self.allocator.is_alive(id) && T::store(&self.stores).contains(id.index)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.allocator.is_alive(id)
    }

    /// Number of live entity ids, including ones with no components yet.
    pub fn entity_count(&self) -> usize {
        self.allocator.live_count()
    }

    /// Number of entities holding a component of `kind`.
    pub fn count_of(&self, kind: ComponentKind) -> usize {
        self.stores.len_of(kind)
    }

    /// Borrow every `T` in place.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        let allocator = &self.allocator;
        T::store(&self.stores)
            .iter()
            .filter_map(move |(index, value)| Some((allocator.id_at(index)?, value)))
    }

    /// Mutably borrow every `T` in place.
    pub fn iter_mut<T: Component>(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> + '_ {
        let allocator = &self.allocator;
        T::store_mut(&mut self.stores)
            .iter_mut()
            .filter_map(move |(index, value)| Some((allocator.id_at(index)?, value)))
    }
}

#[cfg(test)]
mod tests {
    use starfall_core::components::{Bullet, Enemy, Health, Lifespan};
    use starfall_core::enums::Faction;
    use starfall_core::types::{Position, Velocity};

    use super::*;

    fn mover(registry: &mut Registry, x: f64) -> EntityId {
        registry.spawn_with([
            Position::new(x, 0.0).into(),
            Velocity::new(1.0, 0.0).into(),
        ])
    }

    #[test]
    fn query_requires_every_component() {
        let mut registry = Registry::new();
        let a = mover(&mut registry, 1.0);
        let b = registry.spawn_with([Position::new(2.0, 0.0).into()]);

        let moving = registry.query_with_ids::<(Position, Velocity)>();
        assert_eq!(moving.len(), 1);
        assert_eq!(moving[0].0, a);
        assert_eq!(moving[0].1 .0, Position::new(1.0, 0.0));

        let placed = registry.query::<(Position,)>();
        assert_eq!(placed.len(), 2);
        assert!(registry.has::<Position>(b));
        assert!(!registry.has::<Velocity>(b));
    }

    #[test]
    fn query_order_of_types_does_not_change_matches() {
        let mut registry = Registry::new();
        mover(&mut registry, 1.0);
        registry.spawn_with([Velocity::new(0.0, 1.0).into()]);
        mover(&mut registry, 3.0);

        let pv = registry.query_with_ids::<(Position, Velocity)>();
        let vp = registry.query_with_ids::<(Velocity, Position)>();
        let pv_ids: BTreeSet<_> = pv.iter().map(|(id, _)| *id).collect();
        let vp_ids: BTreeSet<_> = vp.iter().map(|(id, _)| *id).collect();
        assert_eq!(pv_ids, vp_ids);
        assert_eq!(pv_ids.len(), 2);
    }

    #[test]
    fn query_on_never_populated_kind_is_empty() {
        let mut registry = Registry::new();
        mover(&mut registry, 1.0);
        assert!(registry.query::<(Bullet, Position)>().is_empty());
        assert!(registry.query_with_ids::<(Position, Bullet)>().is_empty());
    }

    #[test]
    fn same_kind_twice_keeps_the_second() {
        let mut registry = Registry::new();
        let e = registry.spawn();
        registry.add_components(
            e,
            [
                Health::full(10.0).into(),
                Health { current: 3.0, max: 10.0 }.into(),
            ],
        );
        registry.add_components(e, [Position::new(5.0, 5.0).into()]);
        registry.add_component(e, Position::new(6.0, 6.0));

        assert_eq!(registry.count_of(ComponentKind::Health), 1);
        assert_eq!(registry.get::<Health>(e).unwrap().current, 3.0);
        assert_eq!(registry.get::<Position>(e), Some(&Position::new(6.0, 6.0)));
    }

    #[test]
    fn delete_removes_from_every_query() {
        let mut registry = Registry::new();
        let a = mover(&mut registry, 1.0);
        registry.add_component(a, Lifespan { remaining_ms: 10.0 });
        let b = mover(&mut registry, 2.0);

        let before = registry.query_with_ids::<(Position, Velocity)>();
        registry.delete_entity(a);

        assert_eq!(before.len(), 2, "Materialized results outlive the delete");
        let after = registry.query_with_ids::<(Position, Velocity)>();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].0, b);
        assert!(registry.query::<(Lifespan,)>().is_empty());
        assert!(!registry.get_all_entities().contains(&a));
        assert!(registry.get::<Position>(a).is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut registry = Registry::new();
        let a = mover(&mut registry, 1.0);
        registry.delete_entity(a);
        registry.delete_entity(a);
        assert!(registry.get_all_entities().is_empty());
        assert_eq!(registry.entity_count(), 0);
    }

    #[test]
    fn stale_id_cannot_be_resurrected() {
        let mut registry = Registry::new();
        let old = mover(&mut registry, 1.0);
        registry.delete_entity(old);

        registry.add_components(old, [Position::new(9.0, 9.0).into()]);
        registry.add_component(old, Enemy { score_value: 1 });
        assert!(registry.get_all_entities().is_empty());

        let new = mover(&mut registry, 2.0);
        assert_eq!(new.index, old.index);
        assert_ne!(new, old);
        assert!(registry.get::<Position>(old).is_none());
        assert_eq!(registry.get::<Position>(new), Some(&Position::new(2.0, 0.0)));
    }

    #[test]
    fn remove_component_keeps_the_rest() {
        let mut registry = Registry::new();
        let a = mover(&mut registry, 1.0);
        assert_eq!(registry.remove_component::<Velocity>(a), Some(Velocity::new(1.0, 0.0)));
        assert!(registry.remove_component::<Velocity>(a).is_none());
        assert!(registry.remove_component::<Bullet>(a).is_none());
        assert!(registry.has::<Position>(a));
        assert!(registry.get_all_entities().contains(&a));
    }

    #[test]
    fn get_all_entities_spans_every_store() {
        let mut registry = Registry::new();
        let a = registry.spawn_with([Position::new(0.0, 0.0).into()]);
        let b = registry.spawn_with([Bullet {
            damage: 1.0,
            owner: Faction::Player,
        }
        .into()]);
        let bare = registry.spawn();

        let all = registry.get_all_entities();
        assert_eq!(all, BTreeSet::from([a, b]));
        assert!(!all.contains(&bare), "Entities without components are not listed");

        registry.clear();
        assert!(registry.get_all_entities().is_empty());
        assert!(registry.query::<(Position,)>().is_empty());
    }

    #[test]
    fn clear_also_frees_entities_without_components() {
        let mut registry = Registry::new();
        let bare = registry.spawn();
        let emptied = mover(&mut registry, 1.0);
        registry.remove_component::<Position>(emptied);
        registry.remove_component::<Velocity>(emptied);
        mover(&mut registry, 2.0);
        assert_eq!(registry.entity_count(), 3);

        registry.clear();
        assert_eq!(registry.entity_count(), 0);
        assert!(!registry.is_alive(bare));
        assert!(!registry.is_alive(emptied));
    }

    #[test]
    fn iter_mut_edits_in_place() {
        let mut registry = Registry::new();
        let a = mover(&mut registry, 1.0);
        for (_, pos) in registry.iter_mut::<Position>() {
            pos.x += 10.0;
        }
        assert_eq!(registry.get::<Position>(a).unwrap().x, 11.0);
        assert_eq!(registry.iter::<Position>().count(), 1);
    }
}
