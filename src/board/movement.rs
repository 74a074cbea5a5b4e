//! Movement along the loop

use serde::{Deserialize, Serialize};

/// Result of advancing along the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub from: usize,
    pub to: usize,
    /// Every square index stepped across, in order, ending with `to`
    pub passed: Vec<usize>,
    /// Times the start square was crossed or landed on
    pub laps: u32,
}

/// Advances `roll` squares from `position` around a loop of `board_size`
///
/// The landing square is `(position + roll) % board_size`. `passed` reports
/// the whole path so pass-start bonuses can be paid separately from landing
/// effects; a roll equal to the board size comes back to the same square
/// having passed everything exactly once.
pub fn advance(position: usize, roll: u32, board_size: usize) -> MoveOutcome {
    debug_assert!(board_size > 0);
    let from = position % board_size;
    let mut passed = Vec::with_capacity(roll as usize);
    for step in 1..=roll as usize {
        passed.push((from + step) % board_size);
    }
    let to = passed.last().copied().unwrap_or(from);
    let laps = passed.iter().filter(|&&square| square == 0).count() as u32;
    MoveOutcome {
        from,
        to,
        passed,
        laps,
    }
}
