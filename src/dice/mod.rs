//! Dice specifications and rolling
//!
//! A `DiceSpec` is pure data: ordered terms, a flat modifier, and an
//! optional single-reroll rule. Rolling draws uniformly from the caller's
//! RNG stream and reports every final die face alongside the total, so the
//! same spec serves movement, UIs, and tests alike.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A group of identical dice, the "2d6" in "2d6+1"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTerm {
    pub count: u32,
    pub faces: u32,
}

impl DiceTerm {
    pub fn new(count: u32, faces: u32) -> Self {
        Self { count, faces }
    }
}

/// Reroll any die that comes up `value`, exactly once
///
/// The second result stands even if it matches again; rerolls are never
/// recursive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RerollRule {
    pub value: u32,
}

/// A dice formula: ordered terms, flat modifier, optional reroll rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    pub terms: Vec<DiceTerm>,
    pub modifier: i32,
    pub reroll: Option<RerollRule>,
}

/// Outcome of one roll: every final die face in term order, plus the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub total: i32,
    pub breakdown: Vec<i32>,
}

impl DiceSpec {
    pub fn new(terms: Vec<DiceTerm>, modifier: i32) -> Self {
        Self {
            terms,
            modifier,
            reroll: None,
        }
    }

    /// Single NdF convenience
    pub fn simple(count: u32, faces: u32) -> Self {
        Self::new(vec![DiceTerm::new(count, faces)], 0)
    }

    pub fn with_reroll(mut self, value: u32) -> Self {
        self.reroll = Some(RerollRule { value });
        self
    }

    /// Checks the spec is rollable
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.terms.is_empty() {
            return Err("dice spec has no terms".to_string());
        }
        for term in &self.terms {
            if term.count == 0 {
                return Err("dice term has zero dice".to_string());
            }
            if term.faces == 0 {
                return Err("dice term has zero faces".to_string());
            }
        }
        Ok(())
    }

    /// Smallest possible total
    pub fn min_total(&self) -> i32 {
        self.terms.iter().map(|t| t.count as i32).sum::<i32>() + self.modifier
    }

    /// Largest possible total
    pub fn max_total(&self) -> i32 {
        self.terms
            .iter()
            .map(|t| (t.count * t.faces) as i32)
            .sum::<i32>()
            + self.modifier
    }

    /// Rolls the spec against the caller's RNG stream
    ///
    /// Each die draws uniformly from [1, faces]. A die matching the reroll
    /// rule is redrawn once; the redraw stands.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> RollOutcome {
        let mut breakdown = Vec::with_capacity(self.terms.iter().map(|t| t.count as usize).sum());
        for term in &self.terms {
            for _ in 0..term.count {
                let mut face = rng.gen_range(1..=term.faces);
                if let Some(rule) = self.reroll {
                    if face == rule.value {
                        face = rng.gen_range(1..=term.faces);
                    }
                }
                breakdown.push(face as i32);
            }
        }
        let total = breakdown.iter().sum::<i32>() + self.modifier;
        RollOutcome { total, breakdown }
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}d{}", term.count, term.faces)?;
        }
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        if let Some(rule) = self.reroll {
            write!(f, " (reroll {}s)", rule.value)?;
        }
        Ok(())
    }
}

/// Error parsing a dice expression such as "2d6" or "1d6+1d8+2"
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{input}`: {reason}")]
pub struct ParseDiceError {
    pub input: String,
    pub reason: String,
}

impl FromStr for DiceSpec {
    type Err = ParseDiceError;

    /// Parses "NdF" terms joined by `+`, with an optional flat modifier:
    /// "2d6", "1d6+1d8", "2d4+2". A bare "dF" means one die.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = |reason: &str| ParseDiceError {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(err("empty expression"));
        }
        let mut terms = Vec::new();
        let mut modifier = 0i32;
        for part in trimmed.split('+') {
            let part = part.trim();
            if part.is_empty() {
                return Err(err("empty term"));
            }
            match part.split_once(['d', 'D']) {
                Some((count_str, faces_str)) => {
                    let count = if count_str.trim().is_empty() {
                        1
                    } else {
                        count_str
                            .trim()
                            .parse::<u32>()
                            .map_err(|_| err("bad die count"))?
                    };
                    let faces = faces_str
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| err("bad face count"))?;
                    if count == 0 || faces == 0 {
                        return Err(err("dice need at least one die and one face"));
                    }
                    terms.push(DiceTerm::new(count, faces));
                }
                None => {
                    modifier += part.parse::<i32>().map_err(|_| err("bad flat modifier"))?;
                }
            }
        }
        if terms.is_empty() {
            return Err(err("no dice terms"));
        }
        Ok(DiceSpec {
            terms,
            modifier,
            reroll: None,
        })
    }
}
