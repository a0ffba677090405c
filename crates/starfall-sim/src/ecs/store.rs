/// Storage for one component kind: one `Option<T>` slot per entity index.
///
/// An empty slot means the entity does not have the component. Slots are
/// indexed by `EntityId::index`; the registry guarantees that an occupied
/// slot always belongs to the index's current generation.
#[derive(Debug, Clone)]
pub struct ComponentStore<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for ComponentStore<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }
}

impl<T> ComponentStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities holding this component.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upsert; returns the value that was replaced, if any.
    pub fn insert(&mut self, index: u32, value: T) -> Option<T> {
        let idx = index as usize;
        if self.slots.len() <= idx {
            self.slots.resize_with(idx + 1, || None);
        }
        let previous = self.slots[idx].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn remove(&mut self, index: u32) -> Option<T> {
        let removed = self.slots.get_mut(index as usize)?.take();
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, index: u32) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: u32) -> Option<&T> {
        self.slots.get(index as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slots.get_mut(index as usize)?.as_mut()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i as u32, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|v| (i as u32, v)))
    }

    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter().map(|(i, _)| i)
    }
}
