//! Meta-progression: banked gold, permanent upgrades, and character unlocks

pub mod ledger;
pub mod meta;
pub mod upgrades;

pub use ledger::RunLedger;
pub use meta::{MetaState, MetaStats, RunSummary};
pub use upgrades::{
    upgrade_catalog, upgrade_cost, upgrade_def, UpgradeDef, UpgradeEffect, UpgradeId,
};
