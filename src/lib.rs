//! Dicebound - deterministic dice-roguelike simulation core
//!
//! A headless kernel for a single-player dice board game: the player rolls
//! character dice around a 40-square loop, fights scaled monsters, collects
//! jewelry and blessings, and banks gold into a persistent account on death
//! or boss victory. UIs submit typed commands and render the ordered event
//! stream that comes back; nothing in here draws, blocks, or spawns threads.

pub mod board;
pub mod combat;
pub mod components;
pub mod core;
pub mod dice;
pub mod ecs;
pub mod game;
pub mod loot;
pub mod progression;
pub mod roster;

pub use crate::core::error::{GameError, Result};
pub use crate::game::{Command, Game, GameEvent};
