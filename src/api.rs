//! This module contains the thin request layer around the core: it takes
//! requests whose fields may be absent, performs the syntactic checks that
//! the core assumes have already happened, and shapes the core's results
//! into serializable responses.
//!
//! The module is transport-agnostic. A hosting service deserializes an
//! inbound body into a [CheckRequest] or [SolveRequest], calls [check] or
//! [solve], and serializes the returned response as the reply body. All
//! outcomes, including every validation failure, are ordinary response
//! values; nothing here panics or performs I/O.

use crate::{Coordinate, SudokuGrid};
use crate::constraint::{conflicts, Conflict};
use crate::solver::solve_code;

use serde::{Deserialize, Serialize};

const REQUIRED_FIELDS_MISSING: &str = "Required field(s) missing";
const REQUIRED_FIELD_MISSING: &str = "Required field missing";
const INVALID_VALUE: &str = "Invalid value";

/// A request to check whether a digit may be placed at a coordinate of a
/// puzzle. All fields are optional so that absent fields of the inbound
/// body survive deserialization and can be reported as missing.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CheckRequest {

    /// The 81-character puzzle code.
    #[serde(default)]
    pub puzzle: Option<String>,

    /// The target cell, e.g. `"A2"`.
    #[serde(default)]
    pub coordinate: Option<String>,

    /// The candidate digit as a 1-character string, `"1"` to `"9"`.
    #[serde(default)]
    pub value: Option<String>
}

/// A request to complete a puzzle.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SolveRequest {

    /// The 81-character puzzle code.
    #[serde(default)]
    pub puzzle: Option<String>
}

/// The response to a [CheckRequest]. Serializes untagged, so the wire shape
/// is `{"valid":true}`, `{"valid":false,"conflict":[...]}`, or
/// `{"error":"..."}`. Use the constructors to keep the `valid` flag
/// consistent with the variant.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {

    /// The request was rejected before or during puzzle validation.
    Error {
        /// The user-facing message describing the rejection.
        error: String
    },

    /// The placement violates at least one rule.
    Invalid {
        /// Always `false`.
        valid: bool,
        /// The violated rules in row, column, region order. Never empty.
        conflict: Vec<Conflict>
    },

    /// The placement is legal.
    Valid {
        /// Always `true`.
        valid: bool
    }
}

impl CheckResponse {
    fn error(message: impl Into<String>) -> CheckResponse {
        CheckResponse::Error {
            error: message.into()
        }
    }

    fn valid() -> CheckResponse {
        CheckResponse::Valid {
            valid: true
        }
    }

    fn invalid(conflict: Vec<Conflict>) -> CheckResponse {
        CheckResponse::Invalid {
            valid: false,
            conflict
        }
    }
}

/// The response to a [SolveRequest]. Serializes untagged, so the wire shape
/// is `{"solution":"..."}` or `{"error":"..."}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {

    /// The request was rejected or the puzzle has no completion.
    Error {
        /// The user-facing message describing the failure.
        error: String
    },

    /// The puzzle was completed.
    Solution {
        /// The 81-character code of the completed grid, without any '.'
        /// characters.
        solution: String
    }
}

impl SolveResponse {
    fn error(message: impl Into<String>) -> SolveResponse {
        SolveResponse::Error {
            error: message.into()
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    match field {
        Some(text) if !text.is_empty() => Some(text.as_str()),
        _ => None
    }
}

fn parse_value(text: &str) -> Option<u8> {
    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
        (Some(digit @ '1'..='9'), None) => Some(digit as u8 - b'0'),
        _ => None
    }
}

/// Answers a [CheckRequest]: is placing the given digit at the given
/// coordinate of the given puzzle legal?
///
/// Field presence, coordinate syntax, and value syntax are checked in that
/// order before the puzzle itself is validated; each failure is reported as
/// a [CheckResponse::Error] without touching the core. If the target cell
/// already holds the supplied digit, the placement is reported valid
/// without consulting the rules, as an already correctly placed digit is
/// trivially legal. Otherwise all three rules are evaluated and every
/// violated one is reported.
pub fn check(request: &CheckRequest) -> CheckResponse {
    let (puzzle, coordinate, value) = match (present(&request.puzzle),
            present(&request.coordinate), present(&request.value)) {
        (Some(puzzle), Some(coordinate), Some(value)) =>
            (puzzle, coordinate, value),
        _ => return CheckResponse::error(REQUIRED_FIELDS_MISSING)
    };

    let coordinate = match Coordinate::parse(coordinate) {
        Ok(coordinate) => coordinate,
        Err(e) => return CheckResponse::error(e.to_string())
    };

    let digit = match parse_value(value) {
        Some(digit) => digit,
        None => return CheckResponse::error(INVALID_VALUE)
    };

    let grid = match SudokuGrid::parse(puzzle) {
        Ok(grid) => grid,
        Err(e) => return CheckResponse::error(e.to_string())
    };

    if grid.has_digit(coordinate, digit) {
        return CheckResponse::valid();
    }

    let conflict = conflicts(&grid, coordinate, digit);

    if conflict.is_empty() {
        CheckResponse::valid()
    }
    else {
        CheckResponse::invalid(conflict)
    }
}

/// Answers a [SolveRequest]: the completed puzzle, or the reason there is
/// none. A missing or empty `puzzle` field is reported without touching the
/// core; parse failures and unsolvable puzzles are reported with their
/// respective messages.
pub fn solve(request: &SolveRequest) -> SolveResponse {
    let puzzle = match present(&request.puzzle) {
        Some(puzzle) => puzzle,
        None => return SolveResponse::error(REQUIRED_FIELD_MISSING)
    };

    match solve_code(puzzle) {
        Ok(solution) => SolveResponse::Solution { solution },
        Err(e) => SolveResponse::error(e.to_string())
    }
}
