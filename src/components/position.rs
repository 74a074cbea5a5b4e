//! Board position component

use serde::{Deserialize, Serialize};

/// Square index on the loop board
///
/// Only board-bound entities carry this; transient combat monsters do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub square: usize,
}
