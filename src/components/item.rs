//! Jewelry item component

use serde::{Deserialize, Serialize};

use crate::components::stats::Stats;
use crate::loot::Rarity;

/// Stat changes an item applies while equipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatDeltas {
    pub max_hp: i32,
    pub damage: i32,
    pub defense: i32,
    pub crit_chance: f32,
    pub life_steal: f32,
    pub speed: f32,
}

impl StatDeltas {
    /// Applies the deltas to live stats
    ///
    /// A max-hp increase leaves current hp untouched; a decrease clamps it.
    pub fn apply(&self, stats: &mut Stats) {
        stats.max_hp += self.max_hp;
        stats.damage += self.damage;
        stats.defense += self.defense;
        stats.crit_chance = (stats.crit_chance + self.crit_chance).clamp(0.0, 1.0);
        stats.life_steal = (stats.life_steal + self.life_steal).max(0.0);
        stats.speed += self.speed;
        stats.clamp_hp();
    }

    /// Reverses a previous `apply`
    pub fn unapply(&self, stats: &mut Stats) {
        stats.max_hp -= self.max_hp;
        stats.damage -= self.damage;
        stats.defense -= self.defense;
        stats.crit_chance = (stats.crit_chance - self.crit_chance).clamp(0.0, 1.0);
        stats.life_steal = (stats.life_steal - self.life_steal).max(0.0);
        stats.speed -= self.speed;
        stats.clamp_hp();
    }
}

/// A rolled item instance, dropped or equipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub rarity: Rarity,
    pub level: u32,
    pub deltas: StatDeltas,
}

impl Item {
    /// Gold received when the item is sold
    pub fn sell_value(&self) -> u32 {
        let level_scale = 1.0 + (self.level.saturating_sub(1)) as f32 * 0.2;
        (10.0 * level_scale * self.rarity.multiplier()).round() as u32
    }
}
