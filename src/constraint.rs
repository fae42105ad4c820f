//! This module defines the placement rules of classic Sudoku as constraints
//! which can be applied to a grid.
//!
//! Each of the three primitive rules is available on its own as
//! [RowConstraint], [ColumnConstraint], and [RegionConstraint], and their
//! conjunction as [ClassicConstraint]. All of them check a candidate digit
//! against the cells it shares a row, column, or 3x3 region with, *excluding
//! the checked cell itself*. That exclusion is deliberate: it makes the same
//! predicate usable both by the solver, where the checked cell is empty, and
//! by a placement checker that re-validates a digit which is already filled
//! in.
//!
//! For callers interested in *which* rules a placement breaks rather than a
//! single verdict, [conflicts] evaluates all three primitives without
//! short-circuiting and returns the violated ones in row, column, region
//! order.

use crate::{CELL_COUNT, Coordinate, REGION_SIZE, SIZE, SudokuGrid};

use serde::{Deserialize, Serialize};

/// A constraint defines a property that placing a digit in a cell of a
/// [SudokuGrid] must not violate. The three rules of classic Sudoku are
/// "no duplicates in a row" ([RowConstraint]), "no duplicates in a column"
/// ([ColumnConstraint]), and "no duplicates in a 3x3 region"
/// ([RegionConstraint]).
///
/// Implementors only need to provide [Constraint::check_number], which
/// judges a proposed digit for a specified cell. `check_cell` and `check`
/// are implemented by default based on it.
pub trait Constraint {

    /// Checks whether the given [SudokuGrid] matches this constraint, that
    /// is, every cell matches this constraint. By default, this runs
    /// [Constraint::check_cell] on every cell of the grid.
    fn check(&self, grid: &SudokuGrid) -> bool {
        (0..CELL_COUNT)
            .filter_map(Coordinate::from_index)
            .all(|coordinate| self.check_cell(grid, coordinate))
    }

    /// Checks whether the cell at the given coordinate fulfills the
    /// constraint. This is the same as calling [Constraint::check_number]
    /// with the digit which is actually filled in that cell. If the cell is
    /// empty, this function always returns `true`.
    fn check_cell(&self, grid: &SudokuGrid, coordinate: Coordinate) -> bool {
        if let Some(digit) = grid.get(coordinate) {
            self.check_number(grid, coordinate, digit)
        }
        else {
            true
        }
    }

    /// Checks whether the given `digit` could fill the cell at `coordinate`
    /// in the `grid` without violating this constraint. The checked cell
    /// itself is excluded from the scan, so its current content, if any,
    /// never counts as a conflict.
    fn check_number(&self, grid: &SudokuGrid, coordinate: Coordinate,
        digit: u8) -> bool;
}

/// A [Constraint] that there are no duplicates in each row.
#[derive(Clone, Copy, Deserialize, Serialize)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check_number(&self, grid: &SudokuGrid, coordinate: Coordinate,
            digit: u8) -> bool {
        let row = coordinate.row();

        for other_column in 0..SIZE {
            if other_column == coordinate.column() {
                continue;
            }

            let other = Coordinate::new(row, other_column).unwrap();

            if grid.has_digit(other, digit) {
                return false;
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicates in each column.
#[derive(Clone, Copy, Deserialize, Serialize)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check_number(&self, grid: &SudokuGrid, coordinate: Coordinate,
            digit: u8) -> bool {
        let column = coordinate.column();

        for other_row in 0..SIZE {
            if other_row == coordinate.row() {
                continue;
            }

            let other = Coordinate::new(other_row, column).unwrap();

            if grid.has_digit(other, digit) {
                return false;
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicates in each of the nine
/// non-overlapping 3x3 regions of the grid.
#[derive(Clone, Copy, Deserialize, Serialize)]
pub struct RegionConstraint;

impl Constraint for RegionConstraint {
    fn check_number(&self, grid: &SudokuGrid, coordinate: Coordinate,
            digit: u8) -> bool {
        let region_row = (coordinate.row() / REGION_SIZE) * REGION_SIZE;
        let region_column = (coordinate.column() / REGION_SIZE) * REGION_SIZE;

        for other_row in region_row..(region_row + REGION_SIZE) {
            for other_column in
                    region_column..(region_column + REGION_SIZE) {
                if other_row == coordinate.row() &&
                        other_column == coordinate.column() {
                    continue;
                }

                let other = Coordinate::new(other_row, other_column).unwrap();

                if grid.has_digit(other, digit) {
                    return false;
                }
            }
        }

        true
    }
}

/// The classic Sudoku [Constraint], a logical conjunction of
/// [RowConstraint], [ColumnConstraint], and [RegionConstraint]. This is the
/// legality oracle the [solver](crate::solver) uses.
#[derive(Clone, Copy, Deserialize, Serialize)]
pub struct ClassicConstraint;

impl Constraint for ClassicConstraint {
    fn check_number(&self, grid: &SudokuGrid, coordinate: Coordinate,
            digit: u8) -> bool {
        RowConstraint.check_number(grid, coordinate, digit) &&
            ColumnConstraint.check_number(grid, coordinate, digit) &&
            RegionConstraint.check_number(grid, coordinate, digit)
    }
}

/// One of the three uniqueness rules a candidate placement can violate.
/// Serializes to the lowercase rule name, i.e. `"row"`, `"column"`, or
/// `"region"`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {

    /// The digit already occurs elsewhere in the target cell's row.
    Row,

    /// The digit already occurs elsewhere in the target cell's column.
    Column,

    /// The digit already occurs elsewhere in the target cell's 3x3 region.
    Region
}

/// Collects the rules that placing `digit` at `coordinate` in `grid` would
/// violate. All three primitive constraints are evaluated, so simultaneous
/// violations are all reported, in the fixed order row, column, region. An
/// empty result means the placement is legal.
///
/// Like the underlying constraints, this ignores the target cell's current
/// content.
pub fn conflicts(grid: &SudokuGrid, coordinate: Coordinate, digit: u8)
        -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    if !RowConstraint.check_number(grid, coordinate, digit) {
        conflicts.push(Conflict::Row);
    }

    if !ColumnConstraint.check_number(grid, coordinate, digit) {
        conflicts.push(Conflict::Column);
    }

    if !RegionConstraint.check_number(grid, coordinate, digit) {
        conflicts.push(Conflict::Region);
    }

    conflicts
}
