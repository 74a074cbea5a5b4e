//! Timed status effects granted by blessings

use serde::{Deserialize, Serialize};

/// What a timed bonus modifies
///
/// Magnitudes are flat points for `Damage` and `Defense`, additive
/// fractions for `CritChance`, `LifeSteal`, and `GoldFind`, and a
/// fractional speed bonus for `Speed` (0.25 = 25% faster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    Damage,
    Defense,
    CritChance,
    Speed,
    LifeSteal,
    GoldFind,
}

/// One active timed modifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: BonusKind,
    pub magnitude: f32,
    /// Player rounds left; removed once this reaches zero
    pub remaining: u32,
}

/// The set of active status effects on an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEffects {
    pub active: Vec<StatusEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: StatusEffect) {
        self.active.push(effect);
    }

    /// Sum of magnitudes currently active for one kind
    pub fn bonus(&self, kind: BonusKind) -> f32 {
        self.active
            .iter()
            .filter(|effect| effect.kind == kind)
            .map(|effect| effect.magnitude)
            .sum()
    }

    /// Ages every effect by one round, removing and returning the expired
    pub fn tick_round(&mut self) -> Vec<StatusEffect> {
        for effect in &mut self.active {
            effect.remaining = effect.remaining.saturating_sub(1);
        }
        let mut expired = Vec::new();
        self.active.retain(|effect| {
            if effect.remaining == 0 {
                expired.push(*effect);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}
