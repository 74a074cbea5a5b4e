//! Entity id allocation and liveness tracking

use ahash::AHashSet;

use crate::core::types::EntityId;

/// Hands out fresh entity ids and tracks which ones are alive
///
/// Ids are sequential and never reused, so a stale handle can be detected
/// instead of silently aliasing a newer entity.
#[derive(Debug, Clone, Default)]
pub struct EntityAllocator {
    next: u32,
    alive: AHashSet<EntityId>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        self.alive.insert(id);
        id
    }

    /// Marks an id dead; returns false if it was not alive
    pub fn free(&mut self, id: EntityId) -> bool {
        self.alive.remove(&id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.alive.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.alive.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        assert!(alloc.free(a));
        let b = alloc.allocate();
        assert_ne!(a, b);
    }

    #[test]
    fn freed_ids_are_dead() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        assert!(alloc.is_alive(a));
        alloc.free(a);
        assert!(!alloc.is_alive(a));
        assert!(!alloc.free(a));
    }

    #[test]
    fn len_tracks_live_entities() {
        let mut alloc = EntityAllocator::new();
        assert!(alloc.is_empty());
        let a = alloc.allocate();
        let _b = alloc.allocate();
        assert_eq!(alloc.len(), 2);
        alloc.free(a);
        assert_eq!(alloc.len(), 1);
    }
}
