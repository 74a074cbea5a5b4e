//! Jewelry slots

use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;

/// Number of jewelry slots every character has
pub const JEWELRY_SLOTS: usize = 3;

/// Equipped jewelry, at most one item entity per slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub slots: [Option<EntityId>; JEWELRY_SLOTS],
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts an item in a slot, returning the previous occupant
    ///
    /// Callers validate `slot < JEWELRY_SLOTS` first.
    pub fn equip(&mut self, slot: usize, item: EntityId) -> Option<EntityId> {
        let previous = self.slots[slot].take();
        self.slots[slot] = Some(item);
        previous
    }

    /// Removes an item from whichever slot holds it; true if it was worn
    pub fn unequip_item(&mut self, item: EntityId) -> bool {
        for slot in self.slots.iter_mut() {
            if *slot == Some(item) {
                *slot = None;
                return true;
            }
        }
        false
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.slots.contains(&Some(item))
    }

    pub fn equipped(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }
}
