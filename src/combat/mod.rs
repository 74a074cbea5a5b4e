//! Round-based combat

pub mod modifiers;
pub mod resolution;

pub use modifiers::CombatModifiers;
pub use resolution::{
    effective_stats, resolve_encounter, ActionRecord, EncounterResult, RoundRecord, Winner,
};
