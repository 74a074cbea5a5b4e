//! Monster marker component

use serde::{Deserialize, Serialize};

/// Marks a transient encounter monster and carries its reward data
///
/// Monsters exist only for the encounter that spawned them; they never get
/// a board position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub tier: u32,
    /// Gold paid on a kill, already scaled for the spawn round
    pub gold_reward: u32,
    /// Chance of dropping an item when defeated
    pub drop_chance: f32,
    pub boss: bool,
}
