//! Sudoku puzzle engine.
//!
//! The engine owns the state of a single game: the immutable initial puzzle,
//! the player's working board, a lazily computed and cached solution, and the
//! mistake counter. Solving, hinting, and checking are all built on one
//! primitive — the row/column/box safety check on [`Grid`].
//!
//! Puzzles come in as trusted 81-character digit strings (`'0'` meaning
//! empty), either from the built-in [`PuzzleBank`] or from the embedding
//! application. Rendering, input handling, and timers are the embedding
//! frontend's concern; this crate deliberately knows nothing about them.

pub mod game;
pub mod grid;
pub mod puzzles;
pub mod solver;

pub use game::{CheckResult, Game, HintOutcome, PlaceOutcome};
pub use grid::{Cell, Grid, Position};
pub use puzzles::{Difficulty, PuzzleBank};
pub use solver::Solver;
