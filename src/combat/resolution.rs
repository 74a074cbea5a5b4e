//! Round-based encounter resolution
//!
//! Both combatants act once per round in descending speed order, with the
//! player winning ties. The terminal check runs after every individual
//! action, so a kill mid-round ends the exchange immediately. The
//! minimum-damage floor guarantees termination; the round cap only guards
//! against corrupted state.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::CombatModifiers;
use crate::components::{BonusKind, Stats, StatusEffects};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::EntityId;
use crate::ecs::world::World;

/// Which side won an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Monster,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player => write!(f, "player"),
            Winner::Monster => write!(f, "monster"),
        }
    }
}

/// One attack within a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub attacker: EntityId,
    pub defender: EntityId,
    /// Hp actually removed from the defender
    pub damage: i32,
    pub crit: bool,
    /// Hp restored to the attacker through life-steal
    pub lifesteal_heal: i32,
    pub defender_hp_after: i32,
}

/// One full exchange: every action taken during a combat round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub actions: Vec<ActionRecord>,
}

/// Summary of a resolved encounter, from the player's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub winner: Winner,
    pub rounds: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub lifesteal_occurred: bool,
    pub rounds_log: Vec<RoundRecord>,
}

/// Base stats plus the entity's active status-effect bonuses
///
/// Combat reads effective values but mutates only real current hp, so
/// expiring blessings never need to be "backed out" of anything.
pub fn effective_stats(base: &Stats, statuses: Option<&StatusEffects>) -> Stats {
    let mut eff = base.clone();
    if let Some(statuses) = statuses {
        eff.damage += statuses.bonus(BonusKind::Damage).round() as i32;
        eff.defense += statuses.bonus(BonusKind::Defense).round() as i32;
        eff.crit_chance = (eff.crit_chance + statuses.bonus(BonusKind::CritChance)).clamp(0.0, 1.0);
        eff.life_steal += statuses.bonus(BonusKind::LifeSteal);
        eff.speed *= 1.0 + statuses.bonus(BonusKind::Speed);
    }
    eff
}

fn view(world: &World, id: EntityId) -> Result<(Stats, CombatModifiers)> {
    let base = world
        .stats
        .get(id)
        .ok_or(GameError::EntityNotFound(id))?;
    let eff = effective_stats(base, world.statuses.get(id));
    let mods = world.modifiers.get(id).cloned().unwrap_or_default();
    Ok((eff, mods))
}

fn alive(world: &World, id: EntityId) -> bool {
    world.stats.get(id).map_or(false, Stats::is_alive)
}

/// Resolves a full encounter between the player and one monster
///
/// Mutates both combatants' hp in place and returns the per-round log. The
/// caller despawns the loser.
pub fn resolve_encounter<R: Rng>(
    world: &mut World,
    player: EntityId,
    monster: EntityId,
    config: &GameConfig,
    rng: &mut R,
) -> Result<EncounterResult> {
    let mut rounds_log = Vec::new();
    let mut damage_dealt = 0;
    let mut damage_taken = 0;
    let mut lifesteal_occurred = false;
    let mut round = 0u32;

    let winner = loop {
        round += 1;
        if round > config.max_encounter_rounds {
            return Err(GameError::InvariantViolation(format!(
                "encounter between {player} and {monster} unresolved after {} rounds",
                config.max_encounter_rounds
            )));
        }

        // Initiative for this round: descending effective speed, stable so
        // the player keeps priority on ties.
        let (player_eff, _) = view(world, player)?;
        let (monster_eff, _) = view(world, monster)?;
        let mut order = [(player, player_eff.speed), (monster, monster_eff.speed)];
        order.sort_by_key(|&(_, speed)| Reverse(OrderedFloat(speed)));

        let mut actions = Vec::new();
        for &(attacker, _) in &order {
            let defender = if attacker == player { monster } else { player };
            if !alive(world, attacker) {
                continue;
            }
            if !alive(world, defender) {
                break;
            }

            let (atk, atk_mods) = view(world, attacker)?;
            let (def, def_mods) = view(world, defender)?;

            let defense = if atk_mods.ignore_defense { 0 } else { def.defense };
            let mut damage = (atk.damage - defense).max(config.min_damage);
            let crit = rng.gen::<f32>() < atk.crit_chance;
            if crit {
                damage = (damage as f32 * (atk.crit_mult + atk_mods.crit_bonus_mult)).round() as i32;
            }
            damage = ((damage as f32 * def_mods.damage_taken_mult).round() as i32)
                .max(config.min_damage);

            let def_stats = world
                .stats
                .get_mut(defender)
                .ok_or(GameError::EntityNotFound(defender))?;
            let lost = def_stats.take_damage(damage);
            let defender_hp_after = def_stats.hp;

            let mut lifesteal_heal = 0;
            if atk.life_steal > 0.0 {
                let amount = (lost as f32 * atk.life_steal * atk_mods.heal_bonus).floor() as i32;
                if amount > 0 {
                    let atk_stats = world
                        .stats
                        .get_mut(attacker)
                        .ok_or(GameError::EntityNotFound(attacker))?;
                    lifesteal_heal = atk_stats.heal(amount);
                    if lifesteal_heal > 0 {
                        lifesteal_occurred = true;
                    }
                }
            }

            if attacker == player {
                damage_dealt += lost;
            } else {
                damage_taken += lost;
            }
            actions.push(ActionRecord {
                attacker,
                defender,
                damage: lost,
                crit,
                lifesteal_heal,
                defender_hp_after,
            });

            if defender_hp_after == 0 {
                break;
            }
        }
        rounds_log.push(RoundRecord { round, actions });

        if !alive(world, monster) {
            break Winner::Player;
        }
        if !alive(world, player) {
            break Winner::Monster;
        }
    };

    tracing::debug!(
        "Encounter resolved: {} won after {} rounds ({} dealt / {} taken)",
        winner,
        round,
        damage_dealt,
        damage_taken
    );
    Ok(EncounterResult {
        winner,
        rounds: round,
        damage_dealt,
        damage_taken,
        lifesteal_occurred,
        rounds_log,
    })
}
