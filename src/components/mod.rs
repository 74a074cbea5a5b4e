//! Components attached to entities

pub mod equipment;
pub mod item;
pub mod monster;
pub mod player;
pub mod position;
pub mod stats;
pub mod status;

pub use equipment::{Equipment, JEWELRY_SLOTS};
pub use item::{Item, StatDeltas};
pub use monster::Monster;
pub use player::Player;
pub use position::Position;
pub use stats::Stats;
pub use status::{BonusKind, StatusEffect, StatusEffects};
