//! Events the core emits back to the caller
//!
//! Every accepted command resolves into an ordered list of these; a UI can
//! replay them one by one to narrate the turn. They carry plain data only,
//! so transcripts serialize cleanly.

use serde::{Deserialize, Serialize};

use crate::combat::{ActionRecord, Winner};
use crate::components::BonusKind;
use crate::core::types::{EntityId, Gold, Round, SquareIndex};
use crate::loot::Rarity;
use crate::progression::UpgradeId;
use crate::roster::ArchetypeId;

/// One observable thing that happened while resolving a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh run began with the selected character
    RunStarted { archetype: ArchetypeId, round: Round },
    /// The movement dice came up; breakdown lists every final die face
    RollResult {
        breakdown: Vec<i32>,
        modifier: i32,
        total: i32,
    },
    /// The pawn moved; `passed` is the full path ending with the landing
    MovementResult {
        from: SquareIndex,
        to: SquareIndex,
        passed: Vec<SquareIndex>,
    },
    /// The start square was crossed or landed on
    PassedStart { gold: Gold },
    /// A monster was spawned for an encounter
    MonsterAppeared {
        monster: EntityId,
        name: String,
        tier: u32,
    },
    /// One full combat round, every action in initiative order
    CombatRoundResult { round: u32, actions: Vec<ActionRecord> },
    /// The encounter finished
    CombatResolved {
        winner: Winner,
        rounds: u32,
        damage_dealt: i32,
        damage_taken: i32,
        lifesteal_occurred: bool,
        gold_earned: Gold,
    },
    /// An item entity entered the unequipped pool
    ItemDropped {
        item: EntityId,
        name: String,
        rarity: Rarity,
        level: u32,
    },
    /// A shrine blessing took effect
    BlessingApplied { name: String, permanent: bool },
    /// A timed blessing ran out at the end of the round
    BlessingExpired { kind: BonusKind },
    /// The inn restored hp to max
    InnRested { healed: i32 },
    /// Landed on the shop square; stock and purchase flow live in the UI
    ShopVisited,
    /// Landed on the boss square before the gate opens
    BossUnavailable { round: Round, required: Round },
    PotionUsed { healed: i32, remaining: u32 },
    ItemEquipped {
        item: EntityId,
        slot: usize,
        replaced: Option<EntityId>,
    },
    ItemSold { item: EntityId, gold: Gold },
    UpgradePurchased {
        upgrade: UpgradeId,
        level: u32,
        cost: Gold,
    },
    CharacterUnlocked { archetype: ArchetypeId, cost: Gold },
    CharacterChosen { archetype: ArchetypeId },
    /// The run ended and its gold was banked
    RunEnded {
        victory: bool,
        gold_banked: Gold,
        rounds_survived: Round,
    },
}
