//! Playable character roster
//!
//! Every archetype is the same base template bent in one direction: a
//! different movement die, stat multipliers, and at most one combat quirk
//! carried on `CombatModifiers`. Permanent upgrades fold in as flat bonuses
//! when a run starts, so the roster stays static data.

use serde::{Deserialize, Serialize};

use derive_more::Display;

use crate::combat::CombatModifiers;
use crate::components::Stats;
use crate::core::types::Gold;
use crate::dice::{DiceSpec, DiceTerm};
use crate::progression::{upgrade_def, MetaState, UpgradeEffect, UpgradeId};

pub const BASE_MAX_HP: i32 = 100;
pub const BASE_DAMAGE: i32 = 10;
pub const BASE_DEFENSE: i32 = 5;
pub const BASE_CRIT_CHANCE: f32 = 0.05;
pub const BASE_CRIT_MULT: f32 = 2.0;
pub const BASE_SPEED: f32 = 1.0;

/// Identifier for one playable character
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeId {
    Warrior,
    Rogue,
    Berserker,
    Paladin,
    Gambler,
    Mage,
}

impl ArchetypeId {
    pub const ALL: [ArchetypeId; 6] = [
        ArchetypeId::Warrior,
        ArchetypeId::Rogue,
        ArchetypeId::Berserker,
        ArchetypeId::Paladin,
        ArchetypeId::Gambler,
        ArchetypeId::Mage,
    ];
}

/// Static definition of one archetype
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterTemplate {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub blurb: &'static str,
    pub dice: DiceSpec,
    /// Meta-gold price; zero means always unlocked
    pub unlock_cost: Gold,
    pub hp_mult: f32,
    pub damage_mult: f32,
    pub defense_mult: f32,
    pub speed_mult: f32,
    pub crit_chance_add: f32,
    pub life_steal_add: f32,
    pub modifiers: CombatModifiers,
}

/// Static template for one archetype id
pub fn character_template(id: ArchetypeId) -> CharacterTemplate {
    let base = CharacterTemplate {
        id,
        name: "",
        blurb: "",
        dice: DiceSpec::simple(2, 6),
        unlock_cost: 0,
        hp_mult: 1.0,
        damage_mult: 1.0,
        defense_mult: 1.0,
        speed_mult: 1.0,
        crit_chance_add: 0.0,
        life_steal_add: 0.0,
        modifiers: CombatModifiers::default(),
    };
    match id {
        ArchetypeId::Warrior => CharacterTemplate {
            name: "Warrior",
            blurb: "Reliable dice and a bigger health pool.",
            hp_mult: 1.1,
            ..base
        },
        ArchetypeId::Rogue => CharacterTemplate {
            name: "Rogue",
            blurb: "Fast and fragile, deadly on a crit.",
            dice: DiceSpec::simple(3, 4),
            unlock_cost: 500,
            hp_mult: 0.8,
            speed_mult: 1.1,
            crit_chance_add: 0.15,
            ..base
        },
        ArchetypeId::Berserker => CharacterTemplate {
            name: "Berserker",
            blurb: "Hits hard and bleeds for it.",
            dice: DiceSpec::simple(1, 12),
            unlock_cost: 750,
            damage_mult: 1.3,
            life_steal_add: 0.10,
            modifiers: CombatModifiers {
                damage_taken_mult: 1.25,
                ..CombatModifiers::default()
            },
            ..base
        },
        ArchetypeId::Paladin => CharacterTemplate {
            name: "Paladin",
            blurb: "Steady dice, heavy armor, blessed healing.",
            dice: DiceSpec::simple(2, 6).with_reroll(1),
            unlock_cost: 600,
            damage_mult: 0.85,
            defense_mult: 1.2,
            modifiers: CombatModifiers {
                heal_bonus: 1.5,
                ..CombatModifiers::default()
            },
            ..base
        },
        ArchetypeId::Gambler => CharacterTemplate {
            name: "Gambler",
            blurb: "Worse odds, bigger payouts.",
            dice: DiceSpec::new(vec![DiceTerm::new(1, 6), DiceTerm::new(1, 8)], 0),
            unlock_cost: 800,
            hp_mult: 0.85,
            damage_mult: 0.85,
            defense_mult: 0.85,
            crit_chance_add: -0.015,
            modifiers: CombatModifiers {
                crit_bonus_mult: 0.5,
                gold_find: 0.30,
                ..CombatModifiers::default()
            },
            ..base
        },
        ArchetypeId::Mage => CharacterTemplate {
            name: "Mage",
            blurb: "Armor means nothing to arcane fire.",
            dice: DiceSpec::new(vec![DiceTerm::new(2, 4)], 2),
            unlock_cost: 1000,
            hp_mult: 0.7,
            modifiers: CombatModifiers {
                ignore_defense: true,
                ..CombatModifiers::default()
            },
            ..base
        },
    }
}

/// The full roster in display order
pub fn roster() -> Vec<CharacterTemplate> {
    ArchetypeId::ALL
        .iter()
        .map(|&id| character_template(id))
        .collect()
}

/// Everything a fresh run needs to build the player entity
#[derive(Debug, Clone, PartialEq)]
pub struct StartingLoadout {
    pub stats: Stats,
    pub modifiers: CombatModifiers,
    pub dice: DiceSpec,
    pub starting_gold: Gold,
}

/// Builds the starting loadout for an archetype under a profile
///
/// Archetype multipliers shape the base template first; upgrade levels then
/// add flat bonuses on top. The speed upgrade is fractional and multiplies.
pub fn starting_loadout(archetype: ArchetypeId, meta: &MetaState) -> StartingLoadout {
    let template = character_template(archetype);
    let mut max_hp = (BASE_MAX_HP as f32 * template.hp_mult).round() as i32;
    let mut damage = (BASE_DAMAGE as f32 * template.damage_mult).round() as i32;
    let mut defense = (BASE_DEFENSE as f32 * template.defense_mult).round() as i32;
    let mut crit_chance = BASE_CRIT_CHANCE + template.crit_chance_add;
    let mut life_steal = template.life_steal_add;
    let mut speed = BASE_SPEED * template.speed_mult;
    let mut starting_gold: Gold = 0;

    for id in UpgradeId::ALL {
        let level = meta.upgrade_level(id);
        if level == 0 {
            continue;
        }
        match upgrade_def(id).effect {
            UpgradeEffect::MaxHp(amount) => max_hp += amount * level as i32,
            UpgradeEffect::Damage(amount) => damage += amount * level as i32,
            UpgradeEffect::CritChance(amount) => crit_chance += amount * level as f32,
            UpgradeEffect::Defense(amount) => defense += amount * level as i32,
            UpgradeEffect::Speed(amount) => speed *= 1.0 + amount * level as f32,
            UpgradeEffect::LifeSteal(amount) => life_steal += amount * level as f32,
            UpgradeEffect::StartingGold(amount) => starting_gold += amount * level,
        }
    }

    StartingLoadout {
        stats: Stats {
            max_hp,
            hp: max_hp,
            damage,
            defense,
            crit_chance: crit_chance.clamp(0.0, 1.0),
            crit_mult: BASE_CRIT_MULT,
            life_steal: life_steal.max(0.0),
            speed,
        },
        modifiers: template.modifiers,
        dice: template.dice,
        starting_gold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warrior_is_the_baseline_plus_hp() {
        let meta = MetaState::new();
        let loadout = starting_loadout(ArchetypeId::Warrior, &meta);
        assert_eq!(loadout.stats.max_hp, 110);
        assert_eq!(loadout.stats.hp, 110);
        assert_eq!(loadout.stats.damage, 10);
        assert_eq!(loadout.stats.defense, 5);
        assert_eq!(loadout.stats.crit_chance, BASE_CRIT_CHANCE);
        assert_eq!(loadout.stats.speed, BASE_SPEED);
        assert_eq!(loadout.starting_gold, 0);
        assert_eq!(loadout.dice.to_string(), "2d6");
        assert_eq!(loadout.modifiers, CombatModifiers::default());
    }

    #[test]
    fn rogue_trades_hp_for_crit_and_speed() {
        let meta = MetaState::new();
        let loadout = starting_loadout(ArchetypeId::Rogue, &meta);
        assert_eq!(loadout.stats.max_hp, 80);
        assert!((loadout.stats.crit_chance - 0.20).abs() < 1e-6);
        assert!((loadout.stats.speed - 1.1).abs() < 1e-6);
        assert_eq!(loadout.dice.to_string(), "3d4");
    }

    #[test]
    fn mage_ignores_defense() {
        let meta = MetaState::new();
        let loadout = starting_loadout(ArchetypeId::Mage, &meta);
        assert!(loadout.modifiers.ignore_defense);
        assert_eq!(loadout.stats.max_hp, 70);
        assert_eq!(loadout.dice.min_total(), 4);
        assert_eq!(loadout.dice.max_total(), 10);
    }

    #[test]
    fn gambler_swings_harder_on_worse_odds() {
        let meta = MetaState::new();
        let loadout = starting_loadout(ArchetypeId::Gambler, &meta);
        assert_eq!(loadout.stats.max_hp, 85);
        assert!((loadout.stats.crit_chance - 0.035).abs() < 1e-6);
        assert!((loadout.modifiers.crit_bonus_mult - 0.5).abs() < 1e-6);
        assert!((loadout.modifiers.gold_find - 0.30).abs() < 1e-6);
        assert_eq!(loadout.dice.max_total(), 14);
    }

    #[test]
    fn paladin_rerolls_ones() {
        let template = character_template(ArchetypeId::Paladin);
        assert_eq!(template.dice.to_string(), "2d6 (reroll 1s)");
        assert_eq!(template.modifiers.heal_bonus, 1.5);
        let meta = MetaState::new();
        let loadout = starting_loadout(ArchetypeId::Paladin, &meta);
        assert_eq!(loadout.stats.damage, 9);
        assert_eq!(loadout.stats.defense, 6);
    }

    #[test]
    fn upgrades_fold_into_the_loadout() {
        let mut meta = MetaState::new();
        meta.upgrades.insert(UpgradeId::Vitality, 2);
        meta.upgrades.insert(UpgradeId::Strength, 1);
        meta.upgrades.insert(UpgradeId::Swiftness, 2);
        meta.upgrades.insert(UpgradeId::Prosperity, 2);
        let loadout = starting_loadout(ArchetypeId::Warrior, &meta);
        assert_eq!(loadout.stats.max_hp, 130);
        assert_eq!(loadout.stats.damage, 12);
        assert!((loadout.stats.speed - 1.1).abs() < 1e-6);
        assert_eq!(loadout.starting_gold, 50);
    }

    #[test]
    fn every_template_has_valid_dice() {
        for template in roster() {
            assert!(template.dice.validate().is_ok(), "{}", template.name);
        }
    }

    #[test]
    fn only_the_warrior_is_free() {
        for template in roster() {
            if template.id == ArchetypeId::Warrior {
                assert_eq!(template.unlock_cost, 0);
            } else {
                assert!(template.unlock_cost > 0, "{}", template.name);
            }
        }
    }
}
