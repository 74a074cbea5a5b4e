//! Monster catalog and spawning
//!
//! Templates carry tier-appropriate base numbers; spawning scales them by
//! the current round so a tier-1 rat met late in a run still threatens.

use rand::Rng;

use crate::components::{Monster, Stats, StatusEffects};
use crate::core::config::GameConfig;
use crate::core::types::EntityId;
use crate::ecs::world::World;

const MONSTER_CRIT_CHANCE: f32 = 0.05;
const MONSTER_CRIT_MULT: f32 = 1.5;

/// Base numbers for one monster kind before round scaling
#[derive(Debug, Clone)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub tier: u32,
    pub max_hp: i32,
    pub damage: i32,
    pub defense: i32,
    pub speed: f32,
    pub gold: u32,
}

/// The built-in monster catalog, two kinds per tier
pub fn monster_templates() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate {
            name: "Giant Rat",
            tier: 1,
            max_hp: 30,
            damage: 8,
            defense: 0,
            speed: 0.9,
            gold: 15,
        },
        MonsterTemplate {
            name: "Cave Bat",
            tier: 1,
            max_hp: 24,
            damage: 7,
            defense: 0,
            speed: 1.2,
            gold: 12,
        },
        MonsterTemplate {
            name: "Skeleton",
            tier: 2,
            max_hp: 45,
            damage: 11,
            defense: 2,
            speed: 1.0,
            gold: 25,
        },
        MonsterTemplate {
            name: "Goblin Raider",
            tier: 2,
            max_hp: 40,
            damage: 12,
            defense: 1,
            speed: 1.1,
            gold: 28,
        },
        MonsterTemplate {
            name: "Orc Brute",
            tier: 3,
            max_hp: 70,
            damage: 15,
            defense: 4,
            speed: 0.8,
            gold: 45,
        },
        MonsterTemplate {
            name: "Shadow Stalker",
            tier: 3,
            max_hp: 55,
            damage: 14,
            defense: 2,
            speed: 1.3,
            gold: 40,
        },
        MonsterTemplate {
            name: "Stone Golem",
            tier: 4,
            max_hp: 100,
            damage: 18,
            defense: 8,
            speed: 0.6,
            gold: 70,
        },
        MonsterTemplate {
            name: "Wraith",
            tier: 4,
            max_hp: 80,
            damage: 20,
            defense: 3,
            speed: 1.2,
            gold: 65,
        },
        MonsterTemplate {
            name: "Young Dragon",
            tier: 5,
            max_hp: 130,
            damage: 24,
            defense: 6,
            speed: 1.0,
            gold: 110,
        },
        MonsterTemplate {
            name: "Death Knight",
            tier: 5,
            max_hp: 120,
            damage: 26,
            defense: 10,
            speed: 0.9,
            gold: 100,
        },
    ]
}

/// The end-of-run boss
///
/// Its numbers are fixed rather than round-scaled; the boss gate already
/// guarantees it is only ever met after round 20.
pub fn boss_template() -> MonsterTemplate {
    MonsterTemplate {
        name: "The Dice Warden",
        tier: 6,
        max_hp: 400,
        damage: 30,
        defense: 10,
        speed: 1.0,
        gold: 500,
    }
}

/// Monster tier implied by the current round
pub fn round_tier(round: u32, config: &GameConfig) -> u32 {
    (1 + round.saturating_sub(1) / config.rounds_per_tier).min(config.max_monster_tier)
}

/// Spawns a round-scaled monster for an encounter
///
/// The spawned tier is the higher of the round-implied tier and the
/// square's printed tier, capped by config. Growth adds flat hp and damage
/// per round past the first, plus one defense per round up to the cap.
pub fn spawn_monster<R: Rng>(
    world: &mut World,
    round: u32,
    square_tier: u32,
    config: &GameConfig,
    rng: &mut R,
) -> EntityId {
    let templates = monster_templates();
    let catalog_cap = templates.iter().map(|t| t.tier).max().unwrap_or(1);
    let tier = round_tier(round, config)
        .max(square_tier)
        .min(config.max_monster_tier)
        .min(catalog_cap);
    let candidates: Vec<&MonsterTemplate> = templates.iter().filter(|t| t.tier == tier).collect();
    let template = candidates[rng.gen_range(0..candidates.len())];

    let growth = round.saturating_sub(1) as i32;
    let max_hp = template.max_hp + config.monster_hp_per_round * growth;
    let stats = Stats {
        max_hp,
        hp: max_hp,
        damage: template.damage + config.monster_damage_per_round * growth,
        defense: (template.defense + growth).min(config.monster_defense_cap),
        crit_chance: MONSTER_CRIT_CHANCE,
        crit_mult: MONSTER_CRIT_MULT,
        life_steal: 0.0,
        speed: template.speed,
    };
    let gold_reward =
        (template.gold as f32 * (1.0 + config.monster_gold_growth * round as f32)).round() as u32;
    tracing::debug!(
        "Spawning {} (tier {}) for round {}: {} hp, {} damage",
        template.name,
        tier,
        round,
        max_hp,
        stats.damage
    );

    let id = world.spawn();
    world.stats.insert(id, stats);
    world.statuses.insert(id, StatusEffects::new());
    world.monsters.insert(
        id,
        Monster {
            name: template.name.to_string(),
            tier,
            gold_reward,
            drop_chance: config.monster_drop_chance,
            boss: false,
        },
    );
    id
}

/// Spawns the boss at its fixed strength
pub fn spawn_boss(world: &mut World) -> EntityId {
    let template = boss_template();
    let id = world.spawn();
    world.stats.insert(
        id,
        Stats {
            max_hp: template.max_hp,
            hp: template.max_hp,
            damage: template.damage,
            defense: template.defense,
            crit_chance: MONSTER_CRIT_CHANCE,
            crit_mult: MONSTER_CRIT_MULT,
            life_steal: 0.0,
            speed: template.speed,
        },
    );
    world.statuses.insert(id, StatusEffects::new());
    world.monsters.insert(
        id,
        Monster {
            name: template.name.to_string(),
            tier: template.tier,
            gold_reward: template.gold,
            drop_chance: 1.0,
            boss: true,
        },
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn round_tier_steps_every_five_rounds() {
        let config = GameConfig::default();
        assert_eq!(round_tier(1, &config), 1);
        assert_eq!(round_tier(5, &config), 1);
        assert_eq!(round_tier(6, &config), 2);
        assert_eq!(round_tier(10, &config), 2);
        assert_eq!(round_tier(11, &config), 3);
        assert_eq!(round_tier(21, &config), 5);
        assert_eq!(round_tier(60, &config), 5, "tier caps at the config max");
    }

    #[test]
    fn first_round_spawn_matches_its_template() {
        let mut world = World::new();
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = spawn_monster(&mut world, 1, 1, &config, &mut rng);
        let monster = world.monsters.get(id).unwrap();
        let stats = world.stats.get(id).unwrap();
        assert_eq!(monster.tier, 1);
        assert!(!monster.boss);
        match monster.name.as_str() {
            "Giant Rat" => {
                assert_eq!(stats.max_hp, 30);
                assert_eq!(stats.damage, 8);
                // 15 * 1.2 rounded
                assert_eq!(monster.gold_reward, 18);
            }
            "Cave Bat" => {
                assert_eq!(stats.max_hp, 24);
                assert_eq!(stats.damage, 7);
                assert_eq!(monster.gold_reward, 14);
            }
            other => panic!("unexpected tier-1 spawn {other}"),
        }
    }

    #[test]
    fn round_growth_scales_hp_damage_and_gold() {
        let mut world = World::new();
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        // Round 6 implies tier 2 and five rounds of growth.
        let id = spawn_monster(&mut world, 6, 1, &config, &mut rng);
        let monster = world.monsters.get(id).unwrap();
        let stats = world.stats.get(id).unwrap();
        assert_eq!(monster.tier, 2);
        match monster.name.as_str() {
            "Skeleton" => {
                assert_eq!(stats.max_hp, 45 + 50);
                assert_eq!(stats.damage, 11 + 10);
                assert_eq!(stats.defense, 7);
                // 25 * 2.2 rounded
                assert_eq!(monster.gold_reward, 55);
            }
            "Goblin Raider" => {
                assert_eq!(stats.max_hp, 40 + 50);
                assert_eq!(stats.damage, 12 + 10);
                assert_eq!(stats.defense, 6);
                assert_eq!(monster.gold_reward, 62);
            }
            other => panic!("unexpected tier-2 spawn {other}"),
        }
    }

    #[test]
    fn square_tier_beats_a_low_round() {
        let mut world = World::new();
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let id = spawn_monster(&mut world, 1, 3, &config, &mut rng);
        assert_eq!(world.monsters.get(id).unwrap().tier, 3);
    }

    #[test]
    fn defense_growth_respects_the_cap() {
        let mut world = World::new();
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let id = spawn_monster(&mut world, 30, 5, &config, &mut rng);
        assert_eq!(
            world.stats.get(id).unwrap().defense,
            config.monster_defense_cap
        );
    }

    #[test]
    fn boss_is_fixed_and_always_drops() {
        let mut world = World::new();
        let id = spawn_boss(&mut world);
        let monster = world.monsters.get(id).unwrap();
        let stats = world.stats.get(id).unwrap();
        assert!(monster.boss);
        assert_eq!(monster.name, "The Dice Warden");
        assert_eq!(monster.gold_reward, 500);
        assert_eq!(monster.drop_chance, 1.0);
        assert_eq!(stats.max_hp, 400);
        assert_eq!(stats.damage, 30);
        assert_eq!(stats.defense, 10);
    }

    #[test]
    fn every_tier_has_a_template() {
        let templates = monster_templates();
        for tier in 1..=5 {
            assert!(templates.iter().any(|t| t.tier == tier), "tier {tier}");
        }
    }
}
