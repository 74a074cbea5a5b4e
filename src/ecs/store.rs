//! Typed component storage
//!
//! One store per component type, keyed by entity id. Stores are plain maps;
//! systems borrow the stores they need and nothing else.

use ahash::AHashMap;

use crate::core::types::EntityId;

#[derive(Debug, Clone)]
pub struct ComponentStore<T> {
    data: AHashMap<EntityId, T>,
}

impl<T> Default for ComponentStore<T> {
    fn default() -> Self {
        Self {
            data: AHashMap::new(),
        }
    }
}

impl<T> ComponentStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a component, returning the previous one if present
    pub fn insert(&mut self, id: EntityId, component: T) -> Option<T> {
        self.data.insert(id, component)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.data.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.data.get_mut(&id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.data.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.data.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.data.iter().map(|(id, component)| (*id, component))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.data.iter_mut().map(|(id, component)| (*id, component))
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.data.keys().copied()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
