// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

//! This crate implements a validator, placement checker, and solver for
//! classic 9x9 Sudoku. It supports the following key features:
//!
//! * Parsing and printing puzzles given as 81-character codes
//! * Checking whether a digit may legally be placed in a cell according to
//! the row, column, and 3x3-region uniqueness rules, reporting every rule
//! that would be violated
//! * Completing a partial puzzle with a backtracking solver
//! * A thin, transport-agnostic request layer ([api]) that mirrors the
//! wire format of the service this crate backs
//!
//! # Parsing and printing puzzles
//!
//! A puzzle is written as a single line of 81 characters in row-major order,
//! where rows A to I come first to last and columns 1 to 9 run left to right
//! within a row. A digit stands for a filled cell and `'.'` for an empty one.
//! See [SudokuGrid::parse] for the exact rules.
//!
//! ```
//! use sudoku_checker::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! ).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking placements
//!
//! Cells are addressed by a [Coordinate] such as `A2`, i.e. a row letter
//! followed by a column number. The [constraint] module offers the three
//! primitive rules as [Constraint](constraint::Constraint) implementations
//! as well as [conflicts](constraint::conflicts), which gathers the rules a
//! candidate digit would break. The checked cell itself is always excluded
//! from the scans, so a digit that is already placed somewhere may be
//! re-validated in place.
//!
//! ```
//! use sudoku_checker::{Coordinate, SudokuGrid};
//! use sudoku_checker::constraint::{conflicts, Conflict};
//!
//! let grid = SudokuGrid::parse(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! ).unwrap();
//! let a2 = Coordinate::parse("A2").unwrap();
//!
//! assert_eq!(Vec::<Conflict>::new(), conflicts(&grid, a2, 3));
//! assert_eq!(vec![Conflict::Row, Conflict::Region], conflicts(&grid, a2, 1));
//! ```
//!
//! # Solving puzzles
//!
//! The [Solver](solver::Solver) trait is implemented by
//! [BacktrackingSolver](solver::BacktrackingSolver), which finds the first
//! completion in a deterministic depth-first order or reports that none
//! exists.
//!
//! ```
//! use sudoku_checker::SudokuGrid;
//! use sudoku_checker::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let grid = SudokuGrid::parse(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! ).unwrap();
//!
//! match BacktrackingSolver.solve(&grid) {
//!     Solution::Solved(solution) => assert!(solution.is_full()),
//!     Solution::Impossible => panic!("sample puzzle is solveable")
//! }
//! ```

pub mod api;
pub mod constraint;
pub mod error;
pub mod solver;

use error::{CoordinateParseError, PuzzleParseError, PuzzleParseResult};

use std::fmt::{self, Display, Formatter};

/// The number of rows, columns, and regions of a grid, as well as the
/// largest digit.
pub const SIZE: usize = 9;

/// The width and height of one of the nine 3x3 regions of a grid.
pub const REGION_SIZE: usize = 3;

/// The total number of cells of a grid, which is also the length of a
/// puzzle code.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The address of one cell of a [SudokuGrid], written as a row letter from
/// 'A' (top) to 'I' (bottom) followed by a column number from 1 (left) to 9
/// (right). A coordinate is valid by construction, so grid accessors taking
/// one cannot go out of bounds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Coordinate {
    row: usize,
    column: usize
}

impl Coordinate {

    /// Creates a new coordinate from zero-based row and column indices.
    /// Returns `None` if either index is 9 or greater.
    pub fn new(row: usize, column: usize) -> Option<Coordinate> {
        if row < SIZE && column < SIZE {
            Some(Coordinate { row, column })
        }
        else {
            None
        }
    }

    /// Creates the coordinate addressing the cell at the given linear index
    /// in row-major order, i.e. the inverse of [Coordinate::index]. Returns
    /// `None` if `index` is 81 or greater.
    pub fn from_index(index: usize) -> Option<Coordinate> {
        if index < CELL_COUNT {
            Some(Coordinate {
                row: index / SIZE,
                column: index % SIZE
            })
        }
        else {
            None
        }
    }

    /// Parses a coordinate from its textual form: exactly two characters,
    /// a row letter from 'A' to 'I' (lower case is accepted) followed by a
    /// column digit from '1' to '9'.
    ///
    /// # Errors
    ///
    /// [CoordinateParseError] if `text` has any other shape.
    pub fn parse(text: &str) -> Result<Coordinate, CoordinateParseError> {
        let mut chars = text.chars();

        if let (Some(letter), Some(digit), None) =
                (chars.next(), chars.next(), chars.next()) {
            let letter = letter.to_ascii_uppercase();

            if ('A'..='I').contains(&letter) && ('1'..='9').contains(&digit) {
                return Ok(Coordinate {
                    row: letter as usize - 'A' as usize,
                    column: digit as usize - '1' as usize
                });
            }
        }

        Err(CoordinateParseError)
    }

    /// Gets the zero-based row index, where row 'A' is 0 and row 'I' is 8.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the zero-based column index, where column 1 is 0 and column 9
    /// is 8.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the linear index of the addressed cell in row-major order, that
    /// is `row * 9 + column`.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }

    /// Gets the row letter of this coordinate, from 'A' to 'I'.
    pub fn row_letter(&self) -> char {
        (b'A' + self.row as u8) as char
    }

    /// Gets the one-based column number of this coordinate, from 1 to 9.
    pub fn column_number(&self) -> usize {
        self.column + 1
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column_number())
    }
}

/// A classic 9x9 Sudoku grid. Each cell either holds a digit from 1 to 9 or
/// is empty. The canonical external representation is an 81-character code
/// in row-major order using `'.'` for empty cells, which [SudokuGrid::parse]
/// reads and [SudokuGrid::code] writes.
///
/// Parsing does *not* enforce the Sudoku rules themselves. A grid with a
/// duplicated digit in a row decodes fine; it is the
/// [constraint](crate::constraint) module's job to judge such a grid, and
/// the [solver](crate::solver) reports it as unsolvable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Option<u8>; CELL_COUNT]
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % REGION_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    line('║', '║', '│', |column| to_char(grid.cells[row * SIZE + column]),
        ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % REGION_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, fully empty grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Parses an 81-character puzzle code into a grid. The code lists all
    /// cells in row-major order, row A first and row I last, columns 1 to 9
    /// within each row. A digit from '1' to '9' stands for a filled cell and
    /// '.' for an empty one. No other characters, including whitespace, are
    /// permitted.
    ///
    /// The cells are taken over verbatim; whether they satisfy the Sudoku
    /// rules is not checked here.
    ///
    /// # Errors
    ///
    /// * [PuzzleParseError::WrongLength] if the code is not exactly 81
    /// characters long. This is checked first, so the content of a
    /// wrong-length code is never inspected.
    /// * [PuzzleParseError::InvalidCharacter] if any character is neither a
    /// digit from '1' to '9' nor '.'.
    pub fn parse(code: &str) -> PuzzleParseResult<SudokuGrid> {
        if code.len() != CELL_COUNT {
            return Err(PuzzleParseError::WrongLength);
        }

        let mut cells = [None; CELL_COUNT];

        for (index, byte) in code.bytes().enumerate() {
            match byte {
                b'.' => { },
                b'1'..=b'9' => cells[index] = Some(byte - b'0'),
                _ => return Err(PuzzleParseError::InvalidCharacter)
            }
        }

        Ok(SudokuGrid { cells })
    }

    /// Converts the grid back into its 81-character code in a way that is
    /// consistent with [SudokuGrid::parse]. That is, a code that is parsed
    /// and converted back does not change.
    ///
    /// ```
    /// use sudoku_checker::SudokuGrid;
    ///
    /// let code =
    ///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    /// let grid = SudokuGrid::parse(code).unwrap();
    /// assert_eq!(code, grid.code());
    /// ```
    pub fn code(&self) -> String {
        self.cells.iter()
            .map(|&cell| {
                if let Some(digit) = cell {
                    (b'0' + digit) as char
                }
                else {
                    '.'
                }
            })
            .collect()
    }

    /// Gets the content of the cell at the given coordinate, i.e. `Some`
    /// digit if it is filled and `None` if it is empty.
    pub fn get(&self, coordinate: Coordinate) -> Option<u8> {
        self.cells[coordinate.index()]
    }

    /// Indicates whether the cell at the given coordinate holds the given
    /// digit. This returns `false` both if the cell holds a different digit
    /// and if it is empty.
    pub fn has_digit(&self, coordinate: Coordinate, digit: u8) -> bool {
        self.cells[coordinate.index()] == Some(digit)
    }

    /// Sets the content of the cell at the given coordinate to the given
    /// digit, overwriting any previous content. `digit` must be in the range
    /// `[1, 9]`.
    pub fn set(&mut self, coordinate: Coordinate, digit: u8) {
        debug_assert!(digit >= 1 && digit <= 9);
        self.cells[coordinate.index()] = Some(digit);
    }

    /// Clears the content of the cell at the given coordinate. If it already
    /// is empty, it stays that way.
    pub fn clear(&mut self, coordinate: Coordinate) {
        self.cells[coordinate.index()] = None;
    }

    /// Indicates whether this grid is full, i.e. every cell holds a digit.
    /// The code of a full grid contains no '.' characters.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell holds a digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Counts the number of clues given by this grid, that is, the number of
    /// filled cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Finds the first empty cell in row-major order, i.e. scanning row A
    /// through row I and columns 1 through 9 within each row. Returns `None`
    /// if the grid is full.
    pub fn first_empty(&self) -> Option<Coordinate> {
        self.cells.iter()
            .position(|cell| cell.is_none())
            .and_then(Coordinate::from_index)
    }

    /// Gets a reference to the slice holding the cells in row-major order.
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const SAMPLE_PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    fn coordinate(text: &str) -> Coordinate {
        Coordinate::parse(text).unwrap()
    }

    #[test]
    fn parse_ok() {
        let grid = SudokuGrid::parse(SAMPLE_PUZZLE).unwrap();

        assert_eq!(Some(1), grid.get(coordinate("A1")));
        assert_eq!(None, grid.get(coordinate("A2")));
        assert_eq!(Some(5), grid.get(coordinate("A3")));
        assert_eq!(Some(2), grid.get(coordinate("A6")));
        assert_eq!(Some(6), grid.get(coordinate("B3")));
        assert_eq!(Some(2), grid.get(coordinate("I1")));
        assert_eq!(None, grid.get(coordinate("I9")));
        assert_eq!(38, grid.count_clues());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let too_short = &SAMPLE_PUZZLE[..80];
        let mut too_long = String::from(SAMPLE_PUZZLE);
        too_long.push('.');

        assert_eq!(Err(PuzzleParseError::WrongLength),
            SudokuGrid::parse(too_short));
        assert_eq!(Err(PuzzleParseError::WrongLength),
            SudokuGrid::parse(too_long.as_str()));
        assert_eq!(Err(PuzzleParseError::WrongLength), SudokuGrid::parse(""));
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        let mut with_letter = String::from(&SAMPLE_PUZZLE[..80]);
        with_letter.push('X');
        let mut with_zero = String::from(&SAMPLE_PUZZLE[..80]);
        with_zero.push('0');

        assert_eq!(Err(PuzzleParseError::InvalidCharacter),
            SudokuGrid::parse(with_letter.as_str()));
        assert_eq!(Err(PuzzleParseError::InvalidCharacter),
            SudokuGrid::parse(with_zero.as_str()));
    }

    #[test]
    fn length_is_checked_before_characters() {
        // 80 characters of garbage must still report the length problem
        let garbage = "X".repeat(80);

        assert_eq!(Err(PuzzleParseError::WrongLength),
            SudokuGrid::parse(garbage.as_str()));
    }

    #[test]
    fn parse_accepts_rule_violating_givens() {
        // duplicate 1 in row A; decoding is not a rules check
        let duplicated =
            "115..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
        let grid = SudokuGrid::parse(duplicated).unwrap();

        assert_eq!(Some(1), grid.get(coordinate("A1")));
        assert_eq!(Some(1), grid.get(coordinate("A2")));
    }

    #[test]
    fn code_round_trip() {
        let grid = SudokuGrid::parse(SAMPLE_PUZZLE).unwrap();

        assert_eq!(SAMPLE_PUZZLE, grid.code());
        assert_eq!(grid, SudokuGrid::parse(grid.code().as_str()).unwrap());
    }

    #[test]
    fn empty_grid_code() {
        let grid = SudokuGrid::new();

        assert!(grid.is_empty());
        assert!(!grid.is_full());
        assert_eq!(".".repeat(81), grid.code());
    }

    #[test]
    fn set_and_clear() {
        let mut grid = SudokuGrid::new();
        let e5 = coordinate("E5");

        grid.set(e5, 7);
        assert_eq!(Some(7), grid.get(e5));
        assert!(grid.has_digit(e5, 7));
        assert!(!grid.has_digit(e5, 3));

        grid.clear(e5);
        assert_eq!(None, grid.get(e5));
        assert!(!grid.has_digit(e5, 7));
    }

    #[test]
    fn first_empty_scans_row_major() {
        let grid = SudokuGrid::parse(SAMPLE_PUZZLE).unwrap();
        assert_eq!(Some(coordinate("A2")), grid.first_empty());

        let full = SudokuGrid::parse(
            "135762984946381257728459613694517832812936745357824196473298561581673429269145378"
        ).unwrap();
        assert!(full.is_full());
        assert_eq!(None, full.first_empty());
    }

    #[test]
    fn coordinate_parse_ok() {
        let a1 = Coordinate::parse("A1").unwrap();
        assert_eq!(0, a1.row());
        assert_eq!(0, a1.column());
        assert_eq!(0, a1.index());

        let i9 = Coordinate::parse("I9").unwrap();
        assert_eq!(8, i9.row());
        assert_eq!(8, i9.column());
        assert_eq!(80, i9.index());

        let c4 = Coordinate::parse("c4").unwrap();
        assert_eq!(2, c4.row());
        assert_eq!(3, c4.column());
        assert_eq!("C4", c4.to_string());
    }

    #[test]
    fn coordinate_parse_rejects_malformed_input() {
        for text in &["", "A", "A10", "J1", "Z5", "A0", "1A", "AA", "Ä2"] {
            assert_eq!(Err(CoordinateParseError), Coordinate::parse(text),
                "accepted invalid coordinate {:?}", text);
        }
    }

    #[test]
    fn coordinate_index_bijection() {
        for index in 0..CELL_COUNT {
            let coordinate = Coordinate::from_index(index).unwrap();
            assert_eq!(index, coordinate.index());
        }

        assert_eq!(None, Coordinate::from_index(CELL_COUNT));
        assert_eq!(None, Coordinate::new(9, 0));
        assert_eq!(None, Coordinate::new(0, 9));
    }

    #[test]
    fn display_marks_regions() {
        let grid = SudokuGrid::parse(SAMPLE_PUZZLE).unwrap();
        let printed = grid.to_string();
        let lines: Vec<&str> = printed.lines().collect();

        // 9 content rows plus 10 separator rows
        assert_eq!(19, lines.len());
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains('1'));
        assert!(lines[6].starts_with('╠'));
        assert!(lines[18].starts_with('╚'));
    }
}
