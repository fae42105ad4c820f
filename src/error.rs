//! This module contains the error and result definitions used in this crate.
//!
//! All errors here are ordinary result values. They implement [Display] with
//! the exact message a caller-facing layer is expected to render, so the
//! [api](crate::api) module can report them with `to_string()`.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that may occur when parsing the 81-character
/// code of a [SudokuGrid](crate::SudokuGrid).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the code does not consist of exactly 81 characters.
    /// This is checked before the content, so a code that is both too short
    /// and contains garbage is reported with this variant.
    WrongLength,

    /// Indicates that the code contains a character which is neither a digit
    /// from 1 to 9 nor the empty-cell marker '.'.
    InvalidCharacter
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleParseError::WrongLength =>
                write!(f, "Expected puzzle to be 81 characters long"),
            PuzzleParseError::InvalidCharacter =>
                write!(f, "Invalid characters in puzzle")
        }
    }
}

impl Error for PuzzleParseError { }

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;

/// The error raised when parsing a [Coordinate](crate::Coordinate) from text
/// that is not a valid cell reference, i.e. not a row letter from 'A' to 'I'
/// (in either case) followed by a column digit from 1 to 9.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CoordinateParseError;

impl Display for CoordinateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid coordinate")
    }
}

impl Error for CoordinateParseError { }

/// An enumeration of the ways solving a puzzle given as an 81-character code
/// can fail. Parse failures are distinguished from search failures so callers
/// can report them differently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {

    /// Indicates that the puzzle code itself was rejected, wrapping the
    /// specific [PuzzleParseError]. No search is attempted in this case.
    Parse(PuzzleParseError),

    /// Indicates that the backtracking search exhausted every candidate
    /// without finding a completion. Puzzles whose givens already violate a
    /// rule end up here as well, since every branch below them dies.
    Unsolvable
}

impl From<PuzzleParseError> for SolveError {
    fn from(e: PuzzleParseError) -> SolveError {
        SolveError::Parse(e)
    }
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Parse(e) => write!(f, "{}", e),
            SolveError::Unsolvable => write!(f, "Puzzle cannot be solved")
        }
    }
}

impl Error for SolveError { }

/// Syntactic sugar for `Result<V, SolveError>`.
pub type SolveResult<V> = Result<V, SolveError>;
