//! World state: entity registry plus parallel component stores

use crate::combat::CombatModifiers;
use crate::components::{Equipment, Item, Monster, Player, Position, Stats, StatusEffects};
use crate::core::types::EntityId;
use crate::dice::DiceSpec;
use crate::ecs::entity::EntityAllocator;
use crate::ecs::store::ComponentStore;

/// Aggregate of every component store
///
/// Entities are opaque ids; all data lives in the typed stores. Despawning
/// removes the id and every component row atomically, so a row never
/// outlives its entity.
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: EntityAllocator,
    pub stats: ComponentStore<Stats>,
    pub positions: ComponentStore<Position>,
    pub dice: ComponentStore<DiceSpec>,
    pub modifiers: ComponentStore<CombatModifiers>,
    pub equipment: ComponentStore<Equipment>,
    pub statuses: ComponentStore<StatusEffects>,
    pub players: ComponentStore<Player>,
    pub monsters: ComponentStore<Monster>,
    pub items: ComponentStore<Item>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        self.entities.allocate()
    }

    /// Removes the entity and every component attached to it
    pub fn despawn(&mut self, id: EntityId) {
        self.entities.free(id);
        self.stats.remove(id);
        self.positions.remove(id);
        self.dice.remove(id);
        self.modifiers.remove(id);
        self.equipment.remove(id);
        self.statuses.remove(id);
        self.players.remove(id);
        self.monsters.remove(id);
        self.items.remove(id);
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.is_alive(id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// The single player entity, if one has been spawned
    pub fn player(&self) -> Option<EntityId> {
        self.players.ids().next()
    }
}
