//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the definition of
//! [BacktrackingSolver](struct.BacktrackingSolver.html), which can complete
//! any solvable grid and check whether a grid has a unique solution.

use crate::{
    SudokuGrid,
    BLOCK_SIZE,
    BOARD_SIZE,
    EMPTY,
    MAX_VALUE,
    MIN_VALUE
};
use crate::error::{SolverError, SolverResult};
use crate::util::shuffle;

use rand::Rng;

const VALUE_COUNT: usize = MAX_VALUE as usize;

fn mark_taken(cell: u8, taken: &mut [bool; VALUE_COUNT]) -> bool {
    if cell == EMPTY {
        return true;
    }

    let i = (cell - MIN_VALUE) as usize;

    if taken[i] {
        false
    }
    else {
        taken[i] = true;
        true
    }
}

/// Checks the solver precondition: no digit may appear twice within any row,
/// column, or block of the input grid. Grid dimensions and the value range
/// are already enforced by [SudokuGrid] itself.
fn validate(grid: &SudokuGrid) -> SolverResult<()> {
    let cells = grid.cells();

    for i in 0..BOARD_SIZE {
        let mut row_taken = [false; VALUE_COUNT];
        let mut column_taken = [false; VALUE_COUNT];

        for j in 0..BOARD_SIZE {
            if !mark_taken(cells[crate::index(j, i)], &mut row_taken) ||
                    !mark_taken(cells[crate::index(i, j)], &mut column_taken) {
                return Err(SolverError::DuplicateEntries);
            }
        }
    }

    for block in 0..BOARD_SIZE {
        let mut block_taken = [false; VALUE_COUNT];
        let start_column = (block % BLOCK_SIZE) * BLOCK_SIZE;
        let start_row = (block / BLOCK_SIZE) * BLOCK_SIZE;

        for y in start_row..(start_row + BLOCK_SIZE) {
            for x in start_column..(start_column + BLOCK_SIZE) {
                if !mark_taken(cells[crate::index(x, y)], &mut block_taken) {
                    return Err(SolverError::DuplicateEntries);
                }
            }
        }
    }

    Ok(())
}

/// Indicates whether entering `number` into the empty cell at the given
/// position would keep its row, column, and block free of duplicates. This is
/// the candidate check of the backtracking search.
fn placement_allowed(grid: &SudokuGrid, column: usize, row: usize, number: u8)
        -> bool {
    let cells = grid.cells();

    for i in 0..BOARD_SIZE {
        if cells[crate::index(i, row)] == number ||
                cells[crate::index(column, i)] == number {
            return false;
        }
    }

    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

    for y in block_row..(block_row + BLOCK_SIZE) {
        for x in block_column..(block_column + BLOCK_SIZE) {
            if cells[crate::index(x, y)] == number {
                return false;
            }
        }
    }

    true
}

/// The recursive backtracking search. Cells are visited in row-major scan
/// order; at each empty cell the candidate digits are taken in the order
/// yielded by `order`, which is invoked once per visited empty cell. On
/// failure the grid is restored to the state it had on entry.
fn solve_rec(grid: &mut SudokuGrid, column: usize, row: usize,
        order: &mut impl FnMut() -> Vec<u8>) -> bool {
    if row == BOARD_SIZE {
        return true;
    }

    let next_column = (column + 1) % BOARD_SIZE;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if grid.get_cell(column, row).unwrap() != EMPTY {
        return solve_rec(grid, next_column, next_row, order);
    }

    for number in order() {
        if placement_allowed(grid, column, row, number) {
            grid.set_cell(column, row, number).unwrap();

            if solve_rec(grid, next_column, next_row, order) {
                return true;
            }

            grid.clear_cell(column, row).unwrap();
        }
    }

    false
}

/// A solver which completes Sudoku grids by recursively testing all valid
/// digits for each empty cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the grid
/// has many missing digits.
/// * It finds a completion for every grid that has one.
///
/// The order in which candidate digits are tried is what distinguishes the
/// two operations: [BacktrackingSolver::solve] draws a fresh random
/// permutation for every empty cell, which makes repeated calls on the same
/// input produce different completions with high probability, while
/// [BacktrackingSolver::is_unique] runs two fixed-order searches and compares
/// them.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Computes a completion of the given grid: a grid that agrees with the
    /// input on every filled cell and contains each digit from 1 to 9 exactly
    /// once in every row, column, and block.
    ///
    /// The input grid is not mutated. If the input has more than one
    /// completion, the result is chosen randomly by trying candidate digits
    /// in an order permuted by `rng` at every empty cell. Solving an empty
    /// grid therefore yields a uniformly varied full board, which is how the
    /// [Generator](crate::generator::Generator) obtains its solutions.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to complete. May be partially filled or empty.
    /// * `rng`: The random number generator that determines the candidate
    /// order.
    ///
    /// # Errors
    ///
    /// * `SolverError::DuplicateEntries` If the input already contains the
    /// same digit twice within one row, column, or block. The input is then
    /// rejected without searching.
    /// * `SolverError::Unsolvable` If the input is well-formed but has no
    /// completion.
    pub fn solve(&self, grid: &SudokuGrid, rng: &mut impl Rng)
            -> SolverResult<SudokuGrid> {
        validate(grid)?;

        let mut solution = grid.clone();
        let solved = solve_rec(&mut solution, 0, 0,
            &mut || shuffle(rng, MIN_VALUE..=MAX_VALUE));

        if solved {
            Ok(solution)
        }
        else {
            Err(SolverError::Unsolvable)
        }
    }

    /// Checks whether the given grid has a unique completion.
    ///
    /// This runs two independent deterministic searches over the same input,
    /// one trying candidates in ascending order (1 to 9) at every choice
    /// point and one in descending order (9 to 1), and compares the two
    /// completed grids cell by cell. If either search fails, the input has no
    /// completion at all and `SolverError::Unsolvable` is raised - callers
    /// can therefore always tell "no solution" apart from "not unique".
    ///
    /// Note that comparing two fixed-order traversals is a cheap heuristic,
    /// not a formal uniqueness proof: it catches the common case where an
    /// alternate digit choice propagates into a different completion, but a
    /// grid with multiple solutions can in degenerate cases still yield the
    /// same completion under both orders.
    ///
    /// # Errors
    ///
    /// * `SolverError::DuplicateEntries` If the input already contains the
    /// same digit twice within one row, column, or block.
    /// * `SolverError::Unsolvable` If the input has no completion.
    pub fn is_unique(&self, grid: &SudokuGrid) -> SolverResult<bool> {
        validate(grid)?;

        let mut ascending = grid.clone();
        let mut descending = grid.clone();
        let ascending_solved = solve_rec(&mut ascending, 0, 0,
            &mut || (MIN_VALUE..=MAX_VALUE).collect());
        let descending_solved = solve_rec(&mut descending, 0, 0,
            &mut || (MIN_VALUE..=MAX_VALUE).rev().collect());

        if ascending_solved && descending_solved {
            Ok(ascending == descending)
        }
        else {
            Err(SolverError::Unsolvable)
        }
    }
}
