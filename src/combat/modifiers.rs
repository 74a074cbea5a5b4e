//! Data-driven combat behavior flags
//!
//! Character quirks live on this component instead of branching on who is
//! fighting; any entity can carry any combination.

use serde::{Deserialize, Serialize};

/// Behavior switches consulted during encounter resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatModifiers {
    /// Attacks treat the defender's defense as zero
    pub ignore_defense: bool,
    /// Added to the crit multiplier on every crit
    pub crit_bonus_mult: f32,
    /// Scales damage received after defense reduction
    pub damage_taken_mult: f32,
    /// Scales healing the combat system performs for this entity
    pub heal_bonus: f32,
    /// Added to the gold fraction earned from kills
    pub gold_find: f32,
}

impl Default for CombatModifiers {
    fn default() -> Self {
        Self {
            ignore_defense: false,
            crit_bonus_mult: 0.0,
            damage_taken_mult: 1.0,
            heal_bonus: 1.0,
            gold_find: 0.0,
        }
    }
}
