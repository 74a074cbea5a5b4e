//! Loot: rarity rolls, item generation, blessings, and monster spawning

pub mod blessings;
pub mod items;
pub mod monsters;
pub mod rarity;

pub use blessings::{apply_blessing, draw_blessing, BlessingDef, BlessingEffect};
pub use items::{generate_item, jewelry_templates, ItemTemplate};
pub use monsters::{boss_template, monster_templates, round_tier, spawn_boss, spawn_monster, MonsterTemplate};
pub use rarity::{roll_rarity, Rarity};
