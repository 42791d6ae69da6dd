//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on the cell accessors of the
/// [root module](../index.html). This does not include errors that occur when
/// parsing grids, see [GridParseError](enum.GridParseError.html) for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some digit is invalid for a Sudoku grid. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than or equal to
    /// 9.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may be raised by the solver. Malformed
/// input and unsolvable input are deliberately distinct: callers of
/// [is_unique](../solver/struct.BacktrackingSolver.html#method.is_unique)
/// must be able to tell "no solution" apart from "not unique".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverError {

    /// Indicates that the input grid already contains the same digit twice
    /// within one row, column, or block. Such a grid violates the solver's
    /// precondition and is never searched.
    DuplicateEntries,

    /// Indicates that a well-formed input grid has no completion in which
    /// every row, column, and block contains the digits 1 to 9.
    Unsolvable
}

/// Syntactic sugar for `Result<V, SolverError>`.
pub type SolverResult<V> = Result<V, SolverError>;

/// An enumeration of the errors that may be raised when generating a puzzle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeneratorError {

    /// Indicates that the requested number of clues lies outside the range
    /// from [MIN_CLUES](../generator/constant.MIN_CLUES.html) to
    /// [MAX_CLUES](../generator/constant.MAX_CLUES.html). This is checked
    /// before any search work begins.
    ClueCountOutOfRange,

    /// Indicates that the generator gave up after its configured number of
    /// attempts without finding a solution grid that can be reduced to the
    /// requested clue count while staying uniquely solvable. See
    /// [Generator::with_max_attempts](../generator/struct.Generator.html#method.with_max_attempts).
    AttemptsExhausted,

    /// Wraps a [SolverError] raised while generating. This cannot occur for
    /// the solver calls the generator makes on its own grids, but is kept
    /// explicit rather than being suppressed.
    Solver(SolverError)
}

/// Syntactic sugar for `Result<V, GeneratorError>`.
pub type GeneratorResult<V> = Result<V, GeneratorError>;

impl From<SolverError> for GeneratorError {
    fn from(e: SolverError) -> Self {
        GeneratorError::Solver(e)
    }
}

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

// Display is required for the serde try_from deserialization of SudokuGrid.
impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfCells =>
                write!(f, "a grid code must have exactly 81 cells"),
            GridParseError::NumberFormatError =>
                write!(f, "a cell entry could not be parsed as a number"),
            GridParseError::InvalidNumber =>
                write!(f, "cells can only contain the digits 1 to 9")
        }
    }
}
