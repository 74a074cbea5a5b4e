//! Persistent profile: banked gold, upgrade levels, unlocks, lifetime stats
//!
//! This is the only state that survives across runs. It serializes to JSON
//! for the save file; run-scoped world state is never persisted.

use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Precondition, Result};
use crate::core::types::{Gold, Round};
use crate::progression::ledger::RunLedger;
use crate::progression::upgrades::{upgrade_cost, upgrade_def, UpgradeId};
use crate::roster::{character_template, ArchetypeId};

/// Lifetime counters across every run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaStats {
    pub total_runs: u32,
    pub best_round: Round,
    pub total_kills: u32,
    pub boss_victories: u32,
}

/// What one finished run contributed to the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub victory: bool,
    pub gold_banked: Gold,
    pub rounds_survived: Round,
}

/// The persistent profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaState {
    /// Banked gold available for upgrades and unlocks
    pub gold: Gold,
    /// Every gold piece ever banked, never spent down
    pub lifetime_gold: Gold,
    pub upgrades: AHashMap<UpgradeId, u32>,
    pub unlocked: AHashSet<ArchetypeId>,
    pub selected: ArchetypeId,
    pub stats: MetaStats,
}

impl Default for MetaState {
    fn default() -> Self {
        let mut unlocked = AHashSet::new();
        unlocked.insert(ArchetypeId::Warrior);
        Self {
            gold: 0,
            lifetime_gold: 0,
            upgrades: AHashMap::new(),
            unlocked,
            selected: ArchetypeId::Warrior,
            stats: MetaStats::default(),
        }
    }
}

impl MetaState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned level of an upgrade track, zero if never bought
    pub fn upgrade_level(&self, id: UpgradeId) -> u32 {
        self.upgrades.get(&id).copied().unwrap_or(0)
    }

    /// Buys the next level of an upgrade, returning (new level, cost paid)
    pub fn purchase_upgrade(&mut self, id: UpgradeId) -> Result<(u32, Gold)> {
        let def = upgrade_def(id);
        let level = self.upgrade_level(id);
        if level >= def.max_level {
            return Err(GameError::PreconditionNotMet(Precondition::UpgradeMaxed {
                max: def.max_level,
            }));
        }
        let cost = upgrade_cost(&def, level);
        if self.gold < cost {
            return Err(GameError::PreconditionNotMet(Precondition::NotEnoughGold {
                needed: cost,
                have: self.gold,
            }));
        }
        self.gold -= cost;
        self.upgrades.insert(id, level + 1);
        tracing::debug!("Bought {} level {} for {} gold", def.name, level + 1, cost);
        Ok((level + 1, cost))
    }

    /// Unlocks a character with banked gold, returning the cost paid
    pub fn unlock_character(&mut self, archetype: ArchetypeId) -> Result<Gold> {
        if self.unlocked.contains(&archetype) {
            return Err(GameError::PreconditionNotMet(Precondition::AlreadyUnlocked));
        }
        let cost = character_template(archetype).unlock_cost;
        if self.gold < cost {
            return Err(GameError::PreconditionNotMet(Precondition::NotEnoughGold {
                needed: cost,
                have: self.gold,
            }));
        }
        self.gold -= cost;
        self.unlocked.insert(archetype);
        tracing::debug!("Unlocked {archetype} for {cost} gold");
        Ok(cost)
    }

    /// Selects which character the next run uses
    pub fn choose_character(&mut self, archetype: ArchetypeId) -> Result<()> {
        if !self.unlocked.contains(&archetype) {
            return Err(GameError::PreconditionNotMet(Precondition::CharacterLocked));
        }
        self.selected = archetype;
        Ok(())
    }

    /// Folds a finished run into the profile
    ///
    /// Banks the run gold unconditionally; the caller decides when a run
    /// counts as ended.
    pub fn bank_run(&mut self, ledger: &RunLedger, victory: bool) -> RunSummary {
        self.gold += ledger.gold;
        self.lifetime_gold += ledger.gold;
        self.stats.total_runs += 1;
        self.stats.best_round = self.stats.best_round.max(ledger.round);
        self.stats.total_kills += ledger.kills;
        if victory {
            self.stats.boss_victories += 1;
        }
        RunSummary {
            victory,
            gold_banked: ledger.gold,
            rounds_survived: ledger.round,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
