//! Item rarity tiers and drop weighting

use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rarity ladder, Common likeliest through Mythical rarest
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Multiplier applied to an item's base stat deltas
    pub fn multiplier(&self) -> f32 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.3,
            Rarity::Rare => 1.7,
            Rarity::Epic => 2.2,
            Rarity::Legendary => 3.0,
            Rarity::Mythical => 4.0,
        }
    }

    /// Relative drop weight, out of 1000
    pub fn weight(&self) -> u32 {
        match self {
            Rarity::Common => 450,
            Rarity::Uncommon => 280,
            Rarity::Rare => 180,
            Rarity::Epic => 60,
            Rarity::Legendary => 25,
            Rarity::Mythical => 5,
        }
    }
}

/// Draws a rarity from the weighted table
pub fn roll_rarity<R: Rng>(rng: &mut R) -> Rarity {
    let total: u32 = Rarity::ALL.iter().map(|r| r.weight()).sum();
    let mut draw = rng.gen_range(0..total);
    for rarity in Rarity::ALL {
        if draw < rarity.weight() {
            return rarity;
        }
        draw -= rarity.weight();
    }
    Rarity::Common
}
