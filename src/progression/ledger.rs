//! Per-run tallies

use serde::{Deserialize, Serialize};

use crate::core::types::{Gold, Round};

/// Run-scoped state that is folded into the profile when the run ends
///
/// Gold held here is at risk: it only becomes permanent through banking on
/// death or boss victory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLedger {
    pub gold: Gold,
    /// Current player round, starting at 1
    pub round: Round,
    pub kills: u32,
    pub items_collected: u32,
}

impl RunLedger {
    pub fn new(starting_gold: Gold) -> Self {
        Self {
            gold: starting_gold,
            round: 1,
            kills: 0,
            items_collected: 0,
        }
    }
}
