//! This module contains the logic for completing a partially filled grid.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.
//! The free function [solve_code] is the entry point for callers that hold
//! a raw 81-character puzzle code rather than a parsed grid.

use crate::SudokuGrid;
use crate::constraint::{ClassicConstraint, Constraint};
use crate::error::{SolveError, SolveResult};

/// The outcome of attempting to solve a grid: either a completed grid or
/// the statement that no completion exists. The search stops at the first
/// solution it finds, so no claim of uniqueness is made.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the puzzle is not solveable at all. Puzzles whose
    /// givens already break a rule fall under this as well, since every
    /// branch of the search dies.
    Impossible,

    /// Indicates that a completion was found, which is wrapped in this
    /// instance. Every cell of the wrapped grid is filled.
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Sudoku puzzles, i.e.
/// complete a partially filled [SudokuGrid].
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. Returns
    /// [Solution::Solved] with a completed grid, or [Solution::Impossible]
    /// if no completion exists. The input grid is not modified.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A [Solver] which completes grids by recursively testing all legal digits
/// for the first empty cell. Its worst-case runtime is exponential in the
/// number of empty cells, but ordinary puzzles solve quickly.
///
/// The search is deterministic: the empty cell is always the first one in
/// row-major order, candidates are tried in ascending order, and the first
/// completion found is returned immediately. Each tentative placement is
/// undone on backtrack, so a single working grid is reused throughout.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut SudokuGrid) -> Solution {
        let coordinate = match grid.first_empty() {
            Some(coordinate) => coordinate,
            None => return Solution::Solved(grid.clone())
        };

        for digit in 1..=9 {
            if ClassicConstraint.check_number(grid, coordinate, digit) {
                grid.set(coordinate, digit);
                let solution = BacktrackingSolver::solve_rec(grid);
                grid.clear(coordinate);

                if let Solution::Solved(_) = solution {
                    return solution;
                }
            }
        }

        Solution::Impossible
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut working = grid.clone();
        BacktrackingSolver::solve_rec(&mut working)
    }
}

/// Parses the given 81-character puzzle code and solves it with the
/// [BacktrackingSolver], returning the code of the completed grid.
///
/// # Errors
///
/// * [SolveError::Parse] if the code is rejected by [SudokuGrid::parse];
/// no search is attempted in that case.
/// * [SolveError::Unsolvable] if the search exhausts every candidate
/// without finding a completion.
pub fn solve_code(code: &str) -> SolveResult<String> {
    let grid = SudokuGrid::parse(code)?;

    match BacktrackingSolver.solve(&grid) {
        Solution::Solved(solution) => Ok(solution.code()),
        Solution::Impossible => Err(SolveError::Unsolvable)
    }
}
