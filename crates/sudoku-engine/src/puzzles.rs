//! Pre-authored puzzle bank, keyed by difficulty.
//!
//! The engine consumes fixed pre-generated puzzle strings rather than
//! generating boards itself; the bank is the built-in supplier of those
//! strings. Every entry is a trusted, well-formed 81-character string.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

const EASY: &[&str] = &[
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    "400000805030000000000700000020000060000080400000010000000603070500200000104000000",
];

const MEDIUM: &[&str] = &[
    "000260701680070090190004500820100040004602900050003028009300074040050036703018000",
    "001900030000000054090104000700062010500000006030410007000203070260000000010006800",
];

const HARD: &[&str] = &[
    "005300000800000020070010500400005300010070006003200000060000050000040700000000001",
    "000000907000420180000705026100904000050000040000507009920108000034059000507000000",
];

/// The fixed set of pre-generated puzzles
pub struct PuzzleBank {
    rng: StdRng,
}

impl Default for PuzzleBank {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleBank {
    /// Create a bank that draws puzzles at random
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a bank with a fixed seed for reproducible draws
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The pre-generated puzzle strings for a tier
    pub fn puzzles(difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }

    /// Draw one puzzle string from a tier
    pub fn pick(&mut self, difficulty: Difficulty) -> &'static str {
        let list = Self::puzzles(difficulty);
        list[self.rng.gen_range(0..list.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_every_bank_entry_parses() {
        for &difficulty in Difficulty::all_levels() {
            let list = PuzzleBank::puzzles(difficulty);
            assert!(!list.is_empty());
            for puzzle in list {
                assert_eq!(puzzle.len(), 81);
                let grid = Grid::from_string(puzzle).expect("bank entry should parse");
                assert!(grid.given_count() > 0);
            }
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = PuzzleBank::with_seed(7);
        let mut b = PuzzleBank::with_seed(7);
        for &difficulty in Difficulty::all_levels() {
            for _ in 0..4 {
                assert_eq!(a.pick(difficulty), b.pick(difficulty));
            }
        }
    }

    #[test]
    fn test_pick_stays_inside_the_tier() {
        let mut bank = PuzzleBank::with_seed(42);
        for _ in 0..8 {
            let puzzle = bank.pick(Difficulty::Hard);
            assert!(PuzzleBank::puzzles(Difficulty::Hard).contains(&puzzle));
        }
    }
}
