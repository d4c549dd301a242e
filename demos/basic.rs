//! Basic example of using the Sudoku engine

use sudoku_engine::{
    CheckResult, Difficulty, Game, Grid, HintOutcome, PlaceOutcome, Position, Solver,
};

fn main() {
    // Start a game from the built-in bank
    let difficulty = Difficulty::Medium;
    println!("Starting a {} game...\n", difficulty);
    let mut game = Game::new(difficulty);

    println!("Puzzle:");
    println!("{}", game.working());
    println!("Given cells: {}", game.working().given_count());
    println!("Empty cells: {}", game.working().empty_count());

    // Make a move somewhere the puzzle left open
    if let Some(pos) = game.working().first_empty() {
        match game.place(pos, 5) {
            PlaceOutcome::Clean => println!("\nPlaced 5 at ({}, {})", pos.row, pos.col),
            PlaceOutcome::Conflict { cells } => {
                println!(
                    "\n5 at ({}, {}) collides with {} cell(s)",
                    pos.row,
                    pos.col,
                    cells.len()
                );
                println!("Mistakes so far: {}", game.mistakes());
            }
            PlaceOutcome::Given => unreachable!("first_empty never points at a given"),
        }
        // Take it back
        game.place(pos, 0);
    }

    // Ask for a hint
    match game.hint() {
        HintOutcome::Revealed { pos, value } => {
            println!("Hint: ({}, {}) is {}", pos.row, pos.col, value)
        }
        HintOutcome::NoSolution => println!("Hint: this puzzle has no solution"),
        HintOutcome::AlreadySolved => println!("Hint: nothing left to reveal"),
    }

    match game.check() {
        CheckResult::Incomplete => println!("Board check: still incomplete"),
        CheckResult::Valid => println!("Board check: valid"),
        CheckResult::Invalid => println!("Board check: invalid"),
    }

    // Give up and solve the rest
    println!("\nSolving the board...\n");
    if game.solve_board() {
        println!("{}", game.working());
    } else {
        println!("No solution exists for the current board.");
    }

    // The solver also works on bare grids, without a session
    println!("--- Solving a parsed grid directly ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    if let Some(grid) = Grid::from_string(puzzle_string) {
        println!("{}", grid);
        let solver = Solver::new();
        if let Some(solution) = solver.solve(&grid) {
            println!("Solution:");
            println!("{}", solution);
        }
        println!("4 fits at (0, 2): {}", grid.is_safe(Position::new(0, 2), 4));
    }
}
