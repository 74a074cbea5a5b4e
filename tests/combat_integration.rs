//! End-to-end encounter tests
//!
//! Scenario fights with hand-checked arithmetic: initiative order, the
//! damage floor, blessings feeding effective stats, and the fixed boss.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dicebound::combat::{effective_stats, resolve_encounter, Winner};
use dicebound::components::{BonusKind, Stats, StatusEffect, StatusEffects};
use dicebound::core::config::GameConfig;
use dicebound::core::types::EntityId;
use dicebound::ecs::world::World;
use dicebound::loot::{spawn_boss, spawn_monster};

fn stats(max_hp: i32, damage: i32, defense: i32, speed: f32) -> Stats {
    Stats {
        max_hp,
        hp: max_hp,
        damage,
        defense,
        crit_chance: 0.0,
        crit_mult: 2.0,
        life_steal: 0.0,
        speed,
    }
}

fn combatant(world: &mut World, stats: Stats) -> EntityId {
    let id = world.spawn();
    world.stats.insert(id, stats);
    world.statuses.insert(id, StatusEffects::new());
    id
}

/// A 120/15/5 fighter against a 30 hp, 8 damage, 0 defense monster: two
/// hits to kill, one answer taken in between.
#[test]
fn baseline_fighter_beats_a_weak_monster_in_two_rounds() {
    let mut world = World::new();
    let player = combatant(&mut world, stats(120, 15, 5, 1.0));
    let monster = combatant(&mut world, stats(30, 8, 0, 0.9));
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = resolve_encounter(&mut world, player, monster, &config, &mut rng).unwrap();

    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.rounds, 2);
    assert_eq!(result.damage_dealt, 30);
    // The monster only got one swing in: 8 - 5 = 3.
    assert_eq!(result.damage_taken, 3);
    assert!(!result.lifesteal_occurred);
    assert_eq!(world.stats.get(player).unwrap().hp, 117);
    assert!(!world.stats.get(monster).unwrap().is_alive());

    // Faster side opens every round; the kill cuts round two short.
    assert_eq!(result.rounds_log.len(), 2);
    assert_eq!(result.rounds_log[0].actions.len(), 2);
    assert_eq!(result.rounds_log[0].actions[0].attacker, player);
    assert_eq!(result.rounds_log[1].actions.len(), 1);
}

/// A first-round spawn is never a match for the starting loadout.
#[test]
fn fresh_spawns_fall_to_a_starting_fighter() {
    let mut world = World::new();
    let mut player_stats = stats(110, 10, 5, 1.0);
    player_stats.crit_chance = 0.05;
    let player = combatant(&mut world, player_stats);
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let monster = spawn_monster(&mut world, 1, 1, &config, &mut rng);
    let monster_hp = world.stats.get(monster).unwrap().max_hp;

    let result = resolve_encounter(&mut world, player, monster, &config, &mut rng).unwrap();

    assert_eq!(result.winner, Winner::Player);
    assert!(result.rounds <= 3, "took {} rounds", result.rounds);
    assert_eq!(result.damage_dealt, monster_hp);
    assert!(result.damage_taken <= 15);
    assert!(world.stats.get(player).unwrap().is_alive());
}

/// Round scaling eventually outgrows a static loadout: by round 30 a
/// spawn hits for seventy-plus and its defense caps out over the
/// fighter's damage, so the floor is all that lands.
#[test]
fn late_round_spawns_overwhelm_a_static_fighter() {
    let mut world = World::new();
    let mut player_stats = stats(110, 10, 5, 1.0);
    player_stats.crit_chance = 0.05;
    let player = combatant(&mut world, player_stats);
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let monster = spawn_monster(&mut world, 30, 1, &config, &mut rng);
    assert_eq!(world.stats.get(monster).unwrap().defense, 15);

    let result = resolve_encounter(&mut world, player, monster, &config, &mut rng).unwrap();

    assert_eq!(result.winner, Winner::Monster);
    assert!(result.rounds <= 2);
    assert!(result.damage_dealt <= 4);
    assert!(!world.stats.get(player).unwrap().is_alive());
}

/// A defense blessing flips an otherwise lost fight by pushing incoming
/// damage down to the floor.
#[test]
fn defense_blessing_turns_a_losing_fight() {
    let config = GameConfig::default();

    // Without the blessing the monster lands 12 a round and wins.
    let mut world = World::new();
    let player = combatant(&mut world, stats(60, 5, 0, 1.0));
    let monster = combatant(&mut world, stats(100, 12, 0, 0.5));
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let lost = resolve_encounter(&mut world, player, monster, &config, &mut rng).unwrap();
    assert_eq!(lost.winner, Winner::Monster);
    assert_eq!(lost.rounds, 5);
    assert_eq!(lost.damage_taken, 60);

    // With +10 defense only the 2-point floor gets through: 19 answers
    // while the player grinds out all 100 hp.
    let mut world = World::new();
    let player = combatant(&mut world, stats(60, 5, 0, 1.0));
    let monster = combatant(&mut world, stats(100, 12, 0, 0.5));
    world.statuses.get_mut(player).unwrap().add(StatusEffect {
        kind: BonusKind::Defense,
        magnitude: 10.0,
        remaining: 99,
    });
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let won = resolve_encounter(&mut world, player, monster, &config, &mut rng).unwrap();
    assert_eq!(won.winner, Winner::Player);
    assert_eq!(won.rounds, 20);
    assert_eq!(won.damage_dealt, 100);
    assert_eq!(won.damage_taken, 38);
    assert_eq!(world.stats.get(player).unwrap().hp, 22);
}

/// The boss is a fixed 400/30/10 wall; a heavily stacked player still
/// needs five rounds to bring it down through its defense.
#[test]
fn overbuilt_player_fells_the_boss() {
    let mut world = World::new();
    let player = combatant(&mut world, stats(2000, 100, 0, 1.0));
    let boss = spawn_boss(&mut world);
    let info = world.monsters.get(boss).unwrap().clone();
    assert!(info.boss);
    assert_eq!(info.gold_reward, 500);
    assert_eq!(info.drop_chance, 1.0);

    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let result = resolve_encounter(&mut world, player, boss, &config, &mut rng).unwrap();

    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.rounds, 5);
    assert_eq!(result.damage_dealt, 400);
    // Four answers of 30, some possibly critting to 45.
    assert!(result.damage_taken >= 120);
    assert!(result.damage_taken <= 180);
}

/// Status bonuses land on the effective view only; base stats never move.
#[test]
fn effective_stats_leave_the_base_untouched() {
    let mut base = stats(100, 10, 5, 1.0);
    base.crit_chance = 0.9;
    let mut statuses = StatusEffects::new();
    statuses.add(StatusEffect {
        kind: BonusKind::Damage,
        magnitude: 15.0,
        remaining: 5,
    });
    statuses.add(StatusEffect {
        kind: BonusKind::Speed,
        magnitude: 0.25,
        remaining: 5,
    });
    statuses.add(StatusEffect {
        kind: BonusKind::CritChance,
        magnitude: 0.5,
        remaining: 5,
    });

    let eff = effective_stats(&base, Some(&statuses));
    assert_eq!(eff.damage, 25);
    assert_eq!(eff.speed, 1.25);
    assert_eq!(eff.crit_chance, 1.0);
    assert_eq!(base.damage, 10);
    assert_eq!(base.speed, 1.0);
    assert_eq!(base.crit_chance, 0.9);
}
