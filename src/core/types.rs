//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Unique identifier for entities
///
/// Plain integer handle issued by the world's allocator. Handles are never
/// reused within a run; all entity data lives in the component stores.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[display(fmt = "entity#{}", _0)]
pub struct EntityId(pub u32);

/// Player-turn counter; starts at 1 and advances once per full turn
pub type Round = u32;

/// Gold amount, run-scoped or persistent
pub type Gold = u32;

/// Index of a square on the loop board
pub type SquareIndex = usize;
