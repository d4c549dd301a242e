//! Interactive puzzle session: move entry, conflict tracking, checking, hints.

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};
use crate::puzzles::{Difficulty, PuzzleBank};
use crate::solver::Solver;

/// Outcome of a single move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// The move was accepted and violates no rule
    Clean,
    /// The move was accepted but collides with peers, and the mistake counter
    /// advanced by one. `cells` holds every colliding peer plus the placed
    /// cell itself.
    Conflict { cells: Vec<Position> },
    /// The cell is a given and was left untouched
    Given,
}

/// Result of checking the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResult {
    /// At least one cell is still empty
    Incomplete,
    /// Every cell is filled and no rule is violated
    Valid,
    /// Every cell is filled but some value collides with a peer
    Invalid,
}

/// Outcome of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    /// One cell was set to its value from the solution
    Revealed { pos: Position, value: u8 },
    /// The puzzle has no solution, so there is nothing to reveal
    NoSolution,
    /// Every cell already matches the solution
    AlreadySolved,
}

/// A single game: the initial puzzle, the player's working board, the lazily
/// computed solution, and the mistake counter.
///
/// All state lives in this one value; operations take `&mut self` and are the
/// only mutation entry points. The caller is expected to invoke them one at a
/// time (one user action at a time), so no synchronization is involved.
#[derive(Debug, Clone)]
pub struct Game {
    /// The puzzle as supplied, immutable for the lifetime of the game
    initial: Grid,
    /// The board the player mutates
    working: Grid,
    /// Cached full solution of `initial`, computed on first demand
    solved: Option<Grid>,
    /// Number of conflicting moves made so far
    mistakes: usize,
    /// Difficulty tier, when the puzzle came from the bank
    difficulty: Option<Difficulty>,
}

impl Game {
    /// Start a new game at the given difficulty, drawing from the built-in
    /// puzzle bank.
    pub fn new(difficulty: Difficulty) -> Self {
        let mut bank = PuzzleBank::new();
        let puzzle = bank.pick(difficulty);
        let mut game = Self::from_string(puzzle).expect("bank puzzles are well-formed");
        game.difficulty = Some(difficulty);
        game
    }

    /// Create a game from an 81-character puzzle string
    pub fn from_string(puzzle: &str) -> Option<Self> {
        let initial = Grid::from_string(puzzle)?;
        Some(Self {
            working: initial.clone(),
            initial,
            solved: None,
            mistakes: 0,
            difficulty: None,
        })
    }

    /// Replace the current puzzle with a new one.
    ///
    /// Resets the working board, the mistake counter, and the cached
    /// solution as one unit. Returns `false` and leaves the game untouched
    /// when the string does not parse.
    pub fn load(&mut self, puzzle: &str) -> bool {
        let Some(initial) = Grid::from_string(puzzle) else {
            return false;
        };
        self.working = initial.clone();
        self.initial = initial;
        self.solved = None;
        self.mistakes = 0;
        self.difficulty = None;
        true
    }

    /// Restore the working board to the initial puzzle and zero the mistake
    /// counter. The cached solution stays valid and is kept.
    pub fn reset(&mut self) {
        self.working = self.initial.clone();
        self.mistakes = 0;
    }

    /// The player's current board
    pub fn working(&self) -> &Grid {
        &self.working
    }

    /// The puzzle as it was loaded
    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    /// Number of conflicting moves made so far
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Whether the cell at `pos` is a given
    pub fn is_given(&self, pos: Position) -> bool {
        self.working.is_given(pos)
    }

    /// Difficulty tier, when the puzzle came from the bank
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Enter a value at a position; `0` erases.
    ///
    /// Givens are never touched (a silent no-op). A non-zero value triggers
    /// the conflict scan over the cell's row, column, and box, and a
    /// conflicting move advances the mistake counter by exactly one no
    /// matter how many peers collide. Erasing never scans and never counts.
    pub fn place(&mut self, pos: Position, value: u8) -> PlaceOutcome {
        debug_assert!(value <= 9);

        if self.working.is_given(pos) {
            return PlaceOutcome::Given;
        }

        if value == 0 {
            self.working.set(pos, None);
            return PlaceOutcome::Clean;
        }

        self.working.set(pos, Some(value));
        let mut cells = self.working.conflicts(pos);
        if cells.is_empty() {
            PlaceOutcome::Clean
        } else {
            cells.push(pos);
            self.mistakes += 1;
            PlaceOutcome::Conflict { cells }
        }
    }

    /// Solve whatever the player currently has on the board.
    ///
    /// Unlike hints, this does not use the cached solution of the initial
    /// puzzle: the search starts from the working board, wrong entries and
    /// all. On success the working board is replaced wholesale with the
    /// completed one; on failure it is left untouched and `false` comes back.
    pub fn solve_board(&mut self) -> bool {
        match Solver::new().solve(&self.working) {
            Some(solved) => {
                self.working = solved;
                true
            }
            None => false,
        }
    }

    /// Check the whole board.
    ///
    /// The first empty cell in row-major order short-circuits to
    /// [`CheckResult::Incomplete`] regardless of any rule violations; a full
    /// board short-circuits to [`CheckResult::Invalid`] at the first value
    /// that fails the safety check.
    pub fn check(&self) -> CheckResult {
        if self.working.first_empty().is_some() {
            return CheckResult::Incomplete;
        }

        for pos in Position::all() {
            match self.working.get(pos) {
                Some(value) if self.working.is_safe(pos, value) => {}
                _ => return CheckResult::Invalid,
            }
        }
        CheckResult::Valid
    }

    /// Reveal the first cell (row-major) that is empty or disagrees with the
    /// solution of the initial puzzle.
    ///
    /// The solution is computed on first demand and cached for the lifetime
    /// of the puzzle. The reveal goes through [`Game::place`], so it triggers
    /// the same conflict scan and mistake accounting as a player move.
    pub fn hint(&mut self) -> HintOutcome {
        if self.solved.is_none() {
            self.solved = Solver::new().solve(&self.initial);
        }
        let Some(solved) = &self.solved else {
            return HintOutcome::NoSolution;
        };

        let mut target = None;
        for pos in Position::all() {
            if self.working.get(pos) != solved.get(pos) {
                target = solved.get(pos).map(|value| (pos, value));
                break;
            }
        }

        let Some((pos, value)) = target else {
            return HintOutcome::AlreadySolved;
        };
        self.place(pos, value);
        HintOutcome::Revealed { pos, value }
    }
}
