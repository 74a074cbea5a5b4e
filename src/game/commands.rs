//! Typed player intents
//!
//! Commands are the only way callers mutate a `Game`. Each either resolves
//! fully into events or is rejected with a typed error; there is no
//! partial application.

use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;
use crate::progression::UpgradeId;
use crate::roster::ArchetypeId;

/// A player intent submitted to [`crate::game::Game::handle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Roll the character dice and take a full turn
    RequestRoll,
    /// Drink a potion for a full heal
    UsePotion,
    /// Put a dropped item into a jewelry slot (0-based)
    EquipItem { slot: usize, item: EntityId },
    /// Sell a dropped or equipped item for run gold
    SellItem { item: EntityId },
    /// Spend banked gold on the next level of an upgrade track
    PurchaseUpgrade { upgrade: UpgradeId },
    /// Spend banked gold to unlock a character
    UnlockCharacter { archetype: ArchetypeId },
    /// Select which character future runs use
    ChooseCharacter { archetype: ArchetypeId },
    /// Abandon or replace the current run with a fresh one
    RestartRun,
}
