//! Combat statistics component

use serde::{Deserialize, Serialize};

/// Core combat statistics, shared by the player and monsters
///
/// Current hp stays within [0, max_hp] through the mutation helpers; the
/// combat system, equipment changes, and permanent upgrades are the only
/// writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub max_hp: i32,
    pub hp: i32,
    pub damage: i32,
    pub defense: i32,
    /// Chance in [0, 1] that a hit crits
    pub crit_chance: f32,
    /// Damage multiplier applied on a crit
    pub crit_mult: f32,
    /// Fraction of damage dealt returned as healing
    pub life_steal: f32,
    /// Initiative; higher acts first
    pub speed: f32,
}

impl Stats {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage, flooring hp at 0; returns the amount actually lost
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let lost = amount.clamp(0, self.hp);
        self.hp -= lost;
        lost
    }

    /// Heals up to max hp; returns the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.clamp(0, self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Restores hp to max; returns the amount restored
    pub fn full_heal(&mut self) -> i32 {
        self.heal(self.max_hp - self.hp)
    }

    /// Clamps hp back into [0, max_hp] after a max-hp change
    pub fn clamp_hp(&mut self) {
        self.hp = self.hp.clamp(0, self.max_hp.max(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(max_hp: i32, hp: i32) -> Stats {
        Stats {
            max_hp,
            hp,
            damage: 10,
            defense: 0,
            crit_chance: 0.0,
            crit_mult: 2.0,
            life_steal: 0.0,
            speed: 1.0,
        }
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut s = stats(50, 10);
        assert_eq!(s.take_damage(25), 10);
        assert_eq!(s.hp, 0);
        assert!(!s.is_alive());
    }

    #[test]
    fn negative_damage_is_ignored() {
        let mut s = stats(50, 10);
        assert_eq!(s.take_damage(-5), 0);
        assert_eq!(s.hp, 10);
    }

    #[test]
    fn heal_clamps_at_max() {
        let mut s = stats(50, 45);
        assert_eq!(s.heal(20), 5);
        assert_eq!(s.hp, 50);
    }

    #[test]
    fn full_heal_restores_exact_deficit() {
        let mut s = stats(80, 33);
        assert_eq!(s.full_heal(), 47);
        assert_eq!(s.hp, 80);
    }

    #[test]
    fn clamp_after_max_drop() {
        let mut s = stats(50, 50);
        s.max_hp = 30;
        s.clamp_hp();
        assert_eq!(s.hp, 30);
    }
}
