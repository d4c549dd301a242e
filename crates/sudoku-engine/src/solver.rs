//! Exhaustive backtracking solver.

use crate::grid::Grid;

/// Backtracking solver — stateless, all state is per-call.
///
/// The search is deliberately plain: first empty cell in row-major order,
/// candidates tried in ascending order, no cell-ordering heuristics and no
/// propagation beyond the direct row/column/box check. Puzzle boards are
/// small enough that this always finishes within interactive time.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if one exists.
    ///
    /// The first solution found wins; boards with several completions are not
    /// detected or flagged.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve `grid` in place, returning whether a full solution was found.
    ///
    /// On failure every speculative placement is undone, leaving the grid
    /// exactly as it was passed in. A grid with no empty cells counts as
    /// solved as-is.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        let Some(pos) = grid.first_empty() else {
            return true;
        };

        for value in 1..=9 {
            if grid.is_safe(pos, value) {
                grid.set(pos, Some(value));
                if self.solve_in_place(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        false
    }
}
