//! Board squares and the standard ring layout

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a square does when landed on
///
/// Kinds are static board data; monsters themselves are spawned fresh on
/// every landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    Empty,
    /// Combat encounter; tier sets the local difficulty floor
    Monster { tier: u32 },
    Item,
    Shrine,
    Shop,
    Inn,
    Boss,
}

impl fmt::Display for SquareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareKind::Empty => write!(f, "Empty"),
            SquareKind::Monster { tier } => write!(f, "Monster (tier {})", tier),
            SquareKind::Item => write!(f, "Item"),
            SquareKind::Shrine => write!(f, "Shrine"),
            SquareKind::Shop => write!(f, "Shop"),
            SquareKind::Inn => write!(f, "Inn"),
            SquareKind::Boss => write!(f, "Boss"),
        }
    }
}

/// One square of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub index: usize,
    pub kind: SquareKind,
}

/// The circular board; index 0 is the start square
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Builds the standard ring
    ///
    /// Fixed specials sit at the quarter points (shop, inn, boss) and every
    /// odd eighth (shrines); the rest alternates monster/item/empty on a %3
    /// cadence, with monster tiers hardening by ring quarter. On the
    /// canonical 40-square ring that puts the shop at 10, the inn at 20,
    /// the boss at 30, and shrines at 5, 15, 25, 35.
    pub fn standard(size: usize) -> Self {
        let squares = (0..size)
            .map(|index| Square {
                index,
                kind: Self::standard_kind(index, size),
            })
            .collect();
        Self { squares }
    }

    fn standard_kind(index: usize, size: usize) -> SquareKind {
        if index == 0 {
            return SquareKind::Empty;
        }
        if size >= 8 {
            let quarter = size / 4;
            if index == quarter {
                return SquareKind::Shop;
            }
            if index == quarter * 2 {
                return SquareKind::Inn;
            }
            if index == quarter * 3 {
                return SquareKind::Boss;
            }
            let eighth = size / 8;
            if eighth > 0 && index % eighth == 0 && (index / eighth) % 2 == 1 {
                return SquareKind::Shrine;
            }
        }
        match index % 3 {
            1 => SquareKind::Monster {
                tier: 1 + (index * 4 / size) as u32,
            },
            2 => SquareKind::Item,
            _ => SquareKind::Empty,
        }
    }

    pub fn size(&self) -> usize {
        self.squares.len()
    }

    pub fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    pub fn kind_at(&self, index: usize) -> Option<SquareKind> {
        self.squares.get(index).map(|square| square.kind)
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }
}
