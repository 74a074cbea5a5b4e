//! Item generation

use rand::Rng;

use crate::components::{Item, StatDeltas};
use crate::core::config::GameConfig;
use crate::loot::rarity::{roll_rarity, Rarity};

/// Base stat profile a generated item is scaled from
#[derive(Debug, Clone)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub deltas: StatDeltas,
}

/// The built-in jewelry catalog
pub fn jewelry_templates() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate {
            name: "Ring of Vigor",
            deltas: StatDeltas {
                max_hp: 20,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Band of Force",
            deltas: StatDeltas {
                damage: 4,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Amulet of Stone",
            deltas: StatDeltas {
                defense: 3,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Charm of Precision",
            deltas: StatDeltas {
                crit_chance: 0.04,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Pendant of Thirst",
            deltas: StatDeltas {
                life_steal: 0.04,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Loop of Haste",
            deltas: StatDeltas {
                speed: 0.10,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Signet of the Duelist",
            deltas: StatDeltas {
                damage: 2,
                crit_chance: 0.02,
                ..Default::default()
            },
        },
        ItemTemplate {
            name: "Talisman of Blood",
            deltas: StatDeltas {
                max_hp: 10,
                life_steal: 0.02,
                ..Default::default()
            },
        },
    ]
}

/// Scales a base stat by item level and rarity
fn scale(base: f32, level: u32, rarity: Rarity) -> f32 {
    base * (1.0 + level.saturating_sub(1) as f32 * 0.15) * rarity.multiplier()
}

/// Rolls a fresh item for the given round
///
/// Rarity comes from the weighted table; the item level sits within the
/// configured variance of the current round, clamped to [1, cap]; every
/// template stat is then scaled by level and rarity.
pub fn generate_item<R: Rng>(round: u32, config: &GameConfig, rng: &mut R) -> Item {
    let rarity = roll_rarity(rng);
    let variance = rng.gen_range(-config.item_level_variance..=config.item_level_variance);
    let level = (round as i32 + variance).clamp(1, config.item_level_cap as i32) as u32;
    let templates = jewelry_templates();
    let template = &templates[rng.gen_range(0..templates.len())];

    let deltas = StatDeltas {
        max_hp: scale(template.deltas.max_hp as f32, level, rarity).round() as i32,
        damage: scale(template.deltas.damage as f32, level, rarity).round() as i32,
        defense: scale(template.deltas.defense as f32, level, rarity).round() as i32,
        crit_chance: scale(template.deltas.crit_chance, level, rarity),
        life_steal: scale(template.deltas.life_steal, level, rarity),
        speed: scale(template.deltas.speed, level, rarity),
    };
    let name = if rarity == Rarity::Common {
        template.name.to_string()
    } else {
        format!("{} {}", rarity, template.name)
    };
    Item {
        name,
        rarity,
        level,
        deltas,
    }
}
