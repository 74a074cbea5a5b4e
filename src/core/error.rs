use thiserror::Error;

use crate::core::types::EntityId;

/// Reason a rule-gated command was refused
///
/// These are expected, recoverable outcomes; UIs show them to the player
/// rather than treating them as faults.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("the boss is sealed until round {required} (current round {current})")]
    BossNotYetAvailable { current: u32, required: u32 },

    #[error("no potions left")]
    NoPotionsLeft,

    #[error("not enough gold: need {needed}, have {have}")]
    NotEnoughGold { needed: u32, have: u32 },

    #[error("upgrade already at its maximum level {max}")]
    UpgradeMaxed { max: u32 },

    #[error("character is still locked")]
    CharacterLocked,

    #[error("character is already unlocked")]
    AlreadyUnlocked,

    #[error("the run is already over")]
    RunOver,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Precondition not met: {0}")]
    PreconditionNotMet(Precondition),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid dice expression: {0}")]
    DiceError(#[from] crate::dice::ParseDiceError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
