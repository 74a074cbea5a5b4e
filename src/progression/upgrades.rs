//! Permanent upgrade tracks purchased with banked gold
//!
//! Each track grants a flat bonus per level that is folded into the
//! starting loadout of every later run. Costs rise linearly with the level
//! being bought.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier for one upgrade track
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    Vitality,
    Strength,
    Precision,
    Fortitude,
    Swiftness,
    Vampirism,
    Prosperity,
}

impl UpgradeId {
    pub const ALL: [UpgradeId; 7] = [
        UpgradeId::Vitality,
        UpgradeId::Strength,
        UpgradeId::Precision,
        UpgradeId::Fortitude,
        UpgradeId::Swiftness,
        UpgradeId::Vampirism,
        UpgradeId::Prosperity,
    ];
}

/// What one level of an upgrade grants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    MaxHp(i32),
    Damage(i32),
    CritChance(f32),
    Defense(i32),
    /// Fractional speed bonus per level (0.05 = 5% faster)
    Speed(f32),
    LifeSteal(f32),
    StartingGold(u32),
}

/// Static definition of one upgrade track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    /// Cost of the first level; level n costs `base_cost * n`
    pub base_cost: u32,
    pub max_level: u32,
    pub effect: UpgradeEffect,
}

/// Static definition for one upgrade id
pub fn upgrade_def(id: UpgradeId) -> UpgradeDef {
    match id {
        UpgradeId::Vitality => UpgradeDef {
            id,
            name: "Vitality",
            base_cost: 50,
            max_level: 10,
            effect: UpgradeEffect::MaxHp(10),
        },
        UpgradeId::Strength => UpgradeDef {
            id,
            name: "Strength",
            base_cost: 60,
            max_level: 10,
            effect: UpgradeEffect::Damage(2),
        },
        UpgradeId::Precision => UpgradeDef {
            id,
            name: "Precision",
            base_cost: 75,
            max_level: 10,
            effect: UpgradeEffect::CritChance(0.02),
        },
        UpgradeId::Fortitude => UpgradeDef {
            id,
            name: "Fortitude",
            base_cost: 50,
            max_level: 10,
            effect: UpgradeEffect::Defense(2),
        },
        UpgradeId::Swiftness => UpgradeDef {
            id,
            name: "Swiftness",
            base_cost: 100,
            max_level: 5,
            effect: UpgradeEffect::Speed(0.05),
        },
        UpgradeId::Vampirism => UpgradeDef {
            id,
            name: "Vampirism",
            base_cost: 150,
            max_level: 5,
            effect: UpgradeEffect::LifeSteal(0.02),
        },
        UpgradeId::Prosperity => UpgradeDef {
            id,
            name: "Prosperity",
            base_cost: 80,
            max_level: 5,
            effect: UpgradeEffect::StartingGold(25),
        },
    }
}

/// The full upgrade catalog in display order
pub fn upgrade_catalog() -> Vec<UpgradeDef> {
    UpgradeId::ALL.iter().map(|&id| upgrade_def(id)).collect()
}

/// Cost of buying the next level when `owned_level` levels are held
pub fn upgrade_cost(def: &UpgradeDef, owned_level: u32) -> u32 {
    def.base_cost * (owned_level + 1)
}
