//! Game configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Configuration for the simulation core
///
/// These values are tuned against the default board, roster, and monster
/// tables. Changing them shifts run pacing and difficulty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === BOARD ===
    /// Number of squares on the loop board
    ///
    /// Movement wraps modulo this value. The standard layout places its
    /// fixed specials proportionally, so 40 reproduces the canonical ring
    /// (shop at 10, inn at 20, boss at 30, shrines every odd eighth).
    pub board_size: usize,

    /// Gold paid each time the start square is passed or landed on
    pub pass_start_gold: u32,

    // === COMBAT ===
    /// Hard cap on encounter rounds before resolution aborts
    ///
    /// The minimum-damage floor guarantees every encounter ends long before
    /// this; reaching the cap is reported as an invariant violation.
    pub max_encounter_rounds: u32,

    /// Damage floor applied after defense reduction
    ///
    /// Keeps every hit meaningful and is what makes combat termination
    /// provable.
    pub min_damage: i32,

    // === BOSS ===
    /// Last round during which the boss refuses challengers
    ///
    /// Dispatch succeeds starting at `boss_unlock_round + 1`.
    pub boss_unlock_round: u32,

    // === MONSTERS ===
    /// Rounds per monster tier step (round-implied tier = 1 + (round-1)/this)
    pub rounds_per_tier: u32,

    /// Highest monster tier that can spawn
    pub max_monster_tier: u32,

    /// Added to monster max hp for every round past the first
    pub monster_hp_per_round: i32,

    /// Added to monster damage for every round past the first
    pub monster_damage_per_round: i32,

    /// Monster defense cap after per-round growth
    pub monster_defense_cap: i32,

    /// Per-round fraction added to monster gold rewards
    ///
    /// A round-10 kill pays base * (1 + 10 * this).
    pub monster_gold_growth: f32,

    /// Chance a defeated monster drops an item
    pub monster_drop_chance: f32,

    // === ITEMS ===
    /// Highest item level that can drop
    pub item_level_cap: u32,

    /// Item level varies by up to this much around the current round
    pub item_level_variance: i32,

    // === PLAYER ===
    /// Potions a fresh run starts with
    pub starting_potions: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 40,
            pass_start_gold: 20,
            max_encounter_rounds: 200,
            min_damage: 1,
            boss_unlock_round: 20,
            rounds_per_tier: 5,
            max_monster_tier: 5,
            monster_hp_per_round: 10,
            monster_damage_per_round: 2,
            monster_defense_cap: 15,
            monster_gold_growth: 0.2,
            monster_drop_chance: 0.5,
            item_level_cap: 20,
            item_level_variance: 3,
            starting_potions: 1,
        }
    }
}

impl GameConfig {
    /// Validates that configuration values are sensible
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.board_size == 0 {
            return Err("board_size must be positive".to_string());
        }
        if self.max_encounter_rounds == 0 {
            return Err("max_encounter_rounds must be positive".to_string());
        }
        if self.min_damage < 1 {
            return Err("min_damage below 1 breaks combat termination".to_string());
        }
        if self.rounds_per_tier == 0 {
            return Err("rounds_per_tier must be positive".to_string());
        }
        if self.max_monster_tier == 0 {
            return Err("max_monster_tier must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.monster_drop_chance) {
            return Err("monster_drop_chance must be within [0, 1]".to_string());
        }
        if self.monster_gold_growth < 0.0 {
            return Err("monster_gold_growth must not be negative".to_string());
        }
        if self.item_level_cap == 0 {
            return Err("item_level_cap must be positive".to_string());
        }
        if self.item_level_variance < 0 {
            return Err("item_level_variance must not be negative".to_string());
        }
        Ok(())
    }

    /// Loads configuration from a TOML file, falling back to defaults for
    /// missing keys
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&text)
            .map_err(|e| GameError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate().map_err(GameError::ConfigError)?;
        Ok(config)
    }
}
