//! Player marker component

use serde::{Deserialize, Serialize};

use crate::roster::ArchetypeId;

/// Marks the player entity and carries run-scoped consumables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub archetype: ArchetypeId,
    /// Potions in the satchel; each one is a full heal
    pub potions: u32,
}
