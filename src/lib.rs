// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a Sudoku puzzle factory. It supports the following
//! key features:
//!
//! * Parsing and printing 9x9 Sudoku grids
//! * Solving partially filled grids using randomized backtracking
//! * Checking whether a grid has a unique solution
//! * Generating puzzles with a chosen number of clues that are guaranteed to
//! have exactly one solution
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_factory::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving grids
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills every empty
//! cell of a grid such that each row, column, and 3x3 block contains the
//! digits 1 to 9 exactly once. Candidate digits are tried in an order
//! determined by a random number generator, so repeated calls on the same
//! grid produce different completions with high probability. This is what
//! makes the solver usable for generating full random boards.
//!
//! ```
//! use sudoku_factory::SudokuGrid;
//! use sudoku_factory::solver::BacktrackingSolver;
//!
//! let solver = BacktrackingSolver;
//! let solution =
//!     solver.solve(&SudokuGrid::new(), &mut rand::thread_rng()).unwrap();
//! assert!(solution.is_full());
//! ```
//!
//! The solver can also check whether a grid has a unique solution, which is
//! the defining property of a proper Sudoku puzzle. See
//! [BacktrackingSolver::is_unique](solver::BacktrackingSolver::is_unique)
//! for details and limitations of that check.
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) produces a [Puzzle](puzzle::Puzzle)
//! with a given number of clues by solving an empty grid and then removing
//! digits in random order as long as the remainder stays uniquely solvable.
//!
//! ```
//! use sudoku_factory::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.create(40).unwrap();
//! assert_eq!(40, puzzle.clue_count());
//! ```
//!
//! # Note regarding performance
//!
//! Generating puzzles close to [MIN_CLUES](generator::MIN_CLUES) clues
//! requires many uniqueness checks and possibly several generation attempts.
//! It is strongly recommended to use at least `opt-level = 2`, even in tests
//! that use puzzle generation, and to run generation off of any UI thread.

pub mod error;
pub mod generator;
pub mod puzzle;
pub mod solver;

mod util;

use error::{
    GridParseError,
    GridParseResult,
    SudokuError,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells in one row, column, or block of a Sudoku grid.
pub const BOARD_SIZE: usize = 9;

/// The width and height of one of the nine square blocks of a Sudoku grid.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a Sudoku grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The lowest digit that may be entered into a Sudoku grid.
pub const MIN_VALUE: u8 = 1;

/// The highest digit that may be entered into a Sudoku grid.
pub const MAX_VALUE: u8 = 9;

/// The marker for an empty cell.
pub const EMPTY: u8 = 0;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * BOARD_SIZE + column
}

/// Computes the index of the block containing the cell at the given position.
/// Blocks are indexed 0 to 8 in row-major order:
///
/// ```text
/// | 0 | 1 | 2 |
/// | 3 | 4 | 5 |
/// | 6 | 7 | 8 |
/// ```
///
/// Both coordinates must be less than [BOARD_SIZE] for the result to be
/// meaningful. The solver, generator, and puzzle sections all rely on this
/// same mapping.
pub fn block_index(column: usize, row: usize) -> usize {
    (row / BLOCK_SIZE) * BLOCK_SIZE + column / BLOCK_SIZE
}

/// A Sudoku grid is a 9x9 matrix of cells, each either empty or holding a
/// digit from 1 to 9. The grid is additionally divided into nine 3x3 blocks.
/// A full, correct grid contains each digit exactly once in every row,
/// column, and block.
///
/// Grids are plain values: the solver and generator always operate on their
/// own copies, so no grid is ever shared and mutated concurrently.
///
/// `SudokuGrid` implements `Display` for a pretty, box-drawn rendering and
/// serializes to/from the code format described in [SudokuGrid::parse].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<u8>
}

fn to_char(cell: u8) -> char {
    if cell == EMPTY {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..BOARD_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
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

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..BOARD_SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &u8) -> String {
    if *cell == EMPTY {
        String::from("")
    }
    else {
        cell.to_string()
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![EMPTY; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of exactly 81 entries, each either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<u8>()?;

            if number < MIN_VALUE || number > MAX_VALUE {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = number;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_factory::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position. An empty cell
    /// is represented by [EMPTY].
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize) -> SudokuResult<u8> {
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: u8)
            -> SudokuResult<()> {
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number < MIN_VALUE || number > MAX_VALUE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = number;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = EMPTY;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns [CELL_COUNT].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|&c| c == EMPTY)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Gets a slice of the 81 cells of this grid. They are in left-to-right,
    /// top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}
