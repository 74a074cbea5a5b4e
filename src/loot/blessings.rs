//! Shrine blessings

use rand::Rng;

use crate::components::{BonusKind, StatusEffect};
use crate::core::error::{GameError, Result};
use crate::core::types::EntityId;
use crate::ecs::world::World;

/// What a blessing does when applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlessingEffect {
    /// Timed bonus attached as a status effect
    Timed {
        kind: BonusKind,
        magnitude: f32,
        rounds: u32,
    },
    /// Permanent max-hp increase written straight into stats
    PermanentMaxHp { amount: i32 },
}

/// A blessing as drawn at a shrine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlessingDef {
    pub name: &'static str,
    pub effect: BlessingEffect,
}

impl BlessingDef {
    pub fn is_permanent(&self) -> bool {
        matches!(self.effect, BlessingEffect::PermanentMaxHp { .. })
    }
}

/// The built-in blessing pool
pub fn blessing_pool() -> Vec<BlessingDef> {
    vec![
        BlessingDef {
            name: "Sharpened Fate",
            effect: BlessingEffect::Timed {
                kind: BonusKind::CritChance,
                magnitude: 0.10,
                rounds: 5,
            },
        },
        BlessingDef {
            name: "Giant's Strength",
            effect: BlessingEffect::Timed {
                kind: BonusKind::Damage,
                magnitude: 15.0,
                rounds: 5,
            },
        },
        BlessingDef {
            name: "Stone Skin",
            effect: BlessingEffect::Timed {
                kind: BonusKind::Defense,
                magnitude: 10.0,
                rounds: 5,
            },
        },
        BlessingDef {
            name: "Wind's Favor",
            effect: BlessingEffect::Timed {
                kind: BonusKind::Speed,
                magnitude: 0.25,
                rounds: 5,
            },
        },
        BlessingDef {
            name: "Crimson Hunger",
            effect: BlessingEffect::Timed {
                kind: BonusKind::LifeSteal,
                magnitude: 0.10,
                rounds: 5,
            },
        },
        BlessingDef {
            name: "Enduring Heart",
            effect: BlessingEffect::PermanentMaxHp { amount: 25 },
        },
        BlessingDef {
            name: "Golden Touch",
            effect: BlessingEffect::Timed {
                kind: BonusKind::GoldFind,
                magnitude: 0.50,
                rounds: 8,
            },
        },
    ]
}

/// Draws a random blessing from the pool
pub fn draw_blessing<R: Rng>(rng: &mut R) -> BlessingDef {
    let pool = blessing_pool();
    pool[rng.gen_range(0..pool.len())]
}

/// Applies a blessing to an entity
///
/// Timed blessings attach a status effect; the permanent one mutates stats
/// directly (and grants the new hp immediately) with no expiry to track.
pub fn apply_blessing(world: &mut World, id: EntityId, blessing: &BlessingDef) -> Result<()> {
    match blessing.effect {
        BlessingEffect::Timed {
            kind,
            magnitude,
            rounds,
        } => {
            let statuses = world
                .statuses
                .get_mut(id)
                .ok_or(GameError::EntityNotFound(id))?;
            statuses.add(StatusEffect {
                kind,
                magnitude,
                remaining: rounds,
            });
        }
        BlessingEffect::PermanentMaxHp { amount } => {
            let stats = world
                .stats
                .get_mut(id)
                .ok_or(GameError::EntityNotFound(id))?;
            stats.max_hp += amount;
            stats.hp += amount;
            stats.clamp_hp();
        }
    }
    Ok(())
}
