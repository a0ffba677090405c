use serde::{Deserialize, Serialize};

/// Opaque entity handle. The generation is bumped every time an index is
/// freed, so an `(index, generation)` pair is never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId {
    pub index: u32,
    pub generation: u32,
}

impl EntityId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) fn slot(self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}g{}", self.index, self.generation)
    }
}

#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free_indices: Vec<u32>,
    next_index: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        if let Some(index) = self.free_indices.pop() {
            let generation = self.generations[index as usize];
            self.alive[index as usize] = true;
            EntityId::new(index, generation)
        } else {
            let index = self.next_index;
            self.next_index += 1;
            self.generations.push(0);
            self.alive.push(true);
            EntityId::new(index, 0)
        }
    }

    /// Free `id`. Stale ids are ignored.
    pub fn deallocate(&mut self, id: EntityId) {
        if self.is_alive(id) {
            self.generations[id.slot()] += 1;
            self.alive[id.slot()] = false;
            self.free_indices.push(id.index);
        }
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.generations
            .get(id.slot())
            .is_some_and(|&generation| generation == id.generation)
            && self.alive[id.slot()]
    }

    /// The current-generation id for `index`.
    pub fn id_at(&self, index: u32) -> Option<EntityId> {
        self.generations
            .get(index as usize)
            .map(|&generation| EntityId::new(index, generation))
    }

    /// Every id currently handed out, in index order.
    pub fn live_ids(&self) -> Vec<EntityId> {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| EntityId::new(i as u32, self.generations[i]))
            .collect()
    }

    /// Number of ids currently handed out.
    pub fn live_count(&self) -> usize {
        self.next_index as usize - self.free_indices.len()
    }
}
