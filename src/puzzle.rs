//! This module contains the puzzle value produced by the
//! [Generator](crate::generator::Generator).
//!
//! A [Puzzle] holds 81 [Cell]s, each knowing its correct value, its current
//! value, and whether the player may edit it. [Section] views project the
//! same cells as rows, columns, and blocks for display and checking.

use crate::{
    block_index,
    index,
    SudokuGrid,
    BLOCK_SIZE,
    BOARD_SIZE,
    EMPTY,
    MAX_VALUE,
    MIN_VALUE
};
use crate::error::{SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

/// A single cell of a [Puzzle]. It contains the correct value from the
/// solution, the current value (the player's input, or the correct value for
/// clue cells), and an editable flag. The current value of a non-editable
/// cell never changes.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell {
    correct_value: u8,
    current_value: u8,
    editable: bool
}

impl Cell {

    fn clue(value: u8) -> Cell {
        Cell {
            correct_value: value,
            current_value: value,
            editable: false
        }
    }

    fn blank(value: u8) -> Cell {
        Cell {
            correct_value: value,
            current_value: EMPTY,
            editable: true
        }
    }

    /// Gets the correct value of this cell, i.e. the digit the solution
    /// holds at its position.
    pub fn correct_value(&self) -> u8 {
        self.correct_value
    }

    /// Gets the current value of this cell. For clue cells this equals the
    /// correct value; for editable cells it is the player's input, or
    /// [EMPTY] if none was entered.
    pub fn current_value(&self) -> u8 {
        self.current_value
    }

    /// Indicates whether the current value of this cell may be changed.
    /// Clue cells are not editable.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Indicates whether the current value equals the correct value.
    pub fn is_correct(&self) -> bool {
        self.current_value == self.correct_value
    }

    fn set_current_value(&mut self, value: u8) {
        if self.editable {
            self.current_value = value;
        }
    }

    fn clear(&mut self) {
        if self.editable {
            self.current_value = EMPTY;
        }
    }
}

/// A view of the nine cells forming one row, column, or block of a [Puzzle],
/// together with their positions. Sections are pure projections over the
/// puzzle's cells and impose no invariants of their own.
#[derive(Clone, Debug)]
pub struct Section<'a> {
    cells: Vec<((usize, usize), &'a Cell)>
}

impl<'a> Section<'a> {

    /// Gets the cell at the given position, or `None` if the position does
    /// not belong to this section.
    pub fn get(&self, column: usize, row: usize) -> Option<&'a Cell> {
        self.cells.iter()
            .find(|((c, r), _)| *c == column && *r == row)
            .map(|(_, cell)| *cell)
    }

    /// An iterator over the positions and cells of this section, in
    /// left-to-right, top-to-bottom order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &'a Cell)> + '_ {
        self.cells.iter().copied()
    }

    /// Indicates whether every cell of this section currently holds its
    /// correct value.
    pub fn is_correct(&self) -> bool {
        self.cells.iter().all(|(_, cell)| cell.is_correct())
    }

    /// Gets the positions of all cells of this section whose current value
    /// differs from their correct value. Empty editable cells count as
    /// incorrect.
    pub fn incorrect_positions(&self) -> Vec<(usize, usize)> {
        self.cells.iter()
            .filter(|(_, cell)| !cell.is_correct())
            .map(|(position, _)| *position)
            .collect()
    }
}

/// A Sudoku puzzle as handed to the player: 81 cells, of which the clue
/// cells show their correct value and cannot be edited, while the remaining
/// cells are editable and start out empty. The full solution is retained in
/// the cells' correct values, so a puzzle can check itself without solving
/// again.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    cells: Vec<Cell>
}

impl Puzzle {

    /// Creates a puzzle from a full `solution` grid and a `puzzle` grid that
    /// is the solution with some cells cleared. Cleared positions become
    /// editable, empty cells; all others become clues.
    pub(crate) fn new(solution: &SudokuGrid, puzzle: &SudokuGrid) -> Puzzle {
        let cells = solution.cells().iter()
            .zip(puzzle.cells().iter())
            .map(|(&value, &shown)| {
                if shown == EMPTY {
                    Cell::blank(value)
                }
                else {
                    Cell::clue(value)
                }
            })
            .collect();

        Puzzle {
            cells
        }
    }

    fn check_bounds(column: usize, row: usize) -> SudokuResult<()> {
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets the cell at the specified position.
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
    pub fn cell(&self, column: usize, row: usize) -> SudokuResult<&Cell> {
        Puzzle::check_bounds(column, row)?;
        Ok(&self.cells[index(column, row)])
    }

    /// Sets the current value of the cell at the specified position. If that
    /// cell is not editable, the puzzle is left unchanged.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `value`: The digit to enter. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `value` is not in the specified
    /// range.
    pub fn set_current_value(&mut self, column: usize, row: usize, value: u8)
            -> SudokuResult<()> {
        Puzzle::check_bounds(column, row)?;

        if value < MIN_VALUE || value > MAX_VALUE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)].set_current_value(value);
        Ok(())
    }

    /// Clears the current value of the cell at the specified position. If
    /// that cell is not editable, the puzzle is left unchanged.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        Puzzle::check_bounds(column, row)?;
        self.cells[index(column, row)].clear();
        Ok(())
    }

    /// Clears the current value of every editable cell, returning the puzzle
    /// to its initial state.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
    }

    fn section(&self, positions: impl Iterator<Item = (usize, usize)>)
            -> Section<'_> {
        Section {
            cells: positions
                .map(|(column, row)|
                    ((column, row), &self.cells[index(column, row)]))
                .collect()
        }
    }

    /// Gets the section of cells forming the row with the given
    /// y-coordinate.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row(&self, row: usize) -> SudokuResult<Section<'_>> {
        Puzzle::check_bounds(0, row)?;
        Ok(self.section((0..BOARD_SIZE).map(|column| (column, row))))
    }

    /// Gets the section of cells forming the column with the given
    /// x-coordinate.
    ///
    /// # Errors
    ///
    /// If `column` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column(&self, column: usize) -> SudokuResult<Section<'_>> {
        Puzzle::check_bounds(column, 0)?;
        Ok(self.section((0..BOARD_SIZE).map(|row| (column, row))))
    }

    /// Gets the section of cells forming the block containing the given
    /// position, using the same block partition as the solver (see
    /// [block_index]).
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn block(&self, column: usize, row: usize)
            -> SudokuResult<Section<'_>> {
        Puzzle::check_bounds(column, row)?;

        let block = block_index(column, row);
        let block_column = (block % BLOCK_SIZE) * BLOCK_SIZE;
        let block_row = (block / BLOCK_SIZE) * BLOCK_SIZE;
        let positions = (block_row..(block_row + BLOCK_SIZE))
            .flat_map(move |r| (block_column..(block_column + BLOCK_SIZE))
                .map(move |c| (c, r)));
        Ok(self.section(positions))
    }

    /// Counts the clue cells of this puzzle, i.e. the non-editable cells
    /// whose correct value is shown.
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_editable()).count()
    }

    /// Indicates whether every cell currently holds its correct value, i.e.
    /// the player has completed the puzzle.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_correct)
    }

    /// Gets all row, column, and block sections that contain at least one
    /// cell whose current value differs from its correct value. Empty
    /// editable cells count as incorrect.
    pub fn incorrect_sections(&self) -> Vec<Section<'_>> {
        let mut sections = Vec::new();

        for i in 0..BOARD_SIZE {
            let row = self.row(i).unwrap();

            if !row.is_correct() {
                sections.push(row);
            }

            let column = self.column(i).unwrap();

            if !column.is_correct() {
                sections.push(column);
            }

            let block_column = (i % BLOCK_SIZE) * BLOCK_SIZE;
            let block_row = (i / BLOCK_SIZE) * BLOCK_SIZE;
            let block = self.block(block_column, block_row).unwrap();

            if !block.is_correct() {
                sections.push(block);
            }
        }

        sections
    }

    /// Gets the full solution of this puzzle as a grid of correct values.
    pub fn solution(&self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let value = self.cells[index(column, row)].correct_value();
                grid.set_cell(column, row, value).unwrap();
            }
        }

        grid
    }

    /// Gets the current state of this puzzle as a grid: clue cells and
    /// filled editable cells contribute their current value, empty editable
    /// cells stay empty.
    pub fn current_grid(&self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let value = self.cells[index(column, row)].current_value();

                if value != EMPTY {
                    grid.set_cell(column, row, value).unwrap();
                }
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOLUTION: &str = "\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    const CLUES: &str = "\
        5,3, , ,7, , , , ,\
        6, , ,1,9,5, , , ,\
         ,9,8, , , , ,6, ,\
        8, , , ,6, , , ,3,\
        4, , ,8, ,3, , ,1,\
        7, , , ,2, , , ,6,\
         ,6, , , , ,2,8, ,\
         , , ,4,1,9, , ,5,\
         , , , ,8, , ,7,9";

    fn example_puzzle() -> Puzzle {
        let solution = SudokuGrid::parse(SOLUTION).unwrap();
        let clues = SudokuGrid::parse(CLUES).unwrap();
        Puzzle::new(&solution, &clues)
    }

    #[test]
    fn cells_reflect_clue_mask() {
        let puzzle = example_puzzle();

        // (0, 0) is a clue, (2, 0) is cleared in the mask.
        let clue = puzzle.cell(0, 0).unwrap();
        assert!(!clue.is_editable());
        assert_eq!(5, clue.correct_value());
        assert_eq!(5, clue.current_value());
        assert!(clue.is_correct());

        let blank = puzzle.cell(2, 0).unwrap();
        assert!(blank.is_editable());
        assert_eq!(4, blank.correct_value());
        assert_eq!(EMPTY, blank.current_value());
        assert!(!blank.is_correct());
    }

    #[test]
    fn clue_count_matches_mask() {
        let puzzle = example_puzzle();
        let clues = SudokuGrid::parse(CLUES).unwrap();

        assert_eq!(clues.count_clues(), puzzle.clue_count());
    }

    #[test]
    fn set_current_value_respects_editable_flag() {
        let mut puzzle = example_puzzle();

        puzzle.set_current_value(2, 0, 9).unwrap();
        assert_eq!(9, puzzle.cell(2, 0).unwrap().current_value());

        // (0, 0) is a clue; writing to it is ignored.
        puzzle.set_current_value(0, 0, 9).unwrap();
        assert_eq!(5, puzzle.cell(0, 0).unwrap().current_value());
    }

    #[test]
    fn set_current_value_checks_arguments() {
        let mut puzzle = example_puzzle();

        assert_eq!(Err(SudokuError::OutOfBounds),
            puzzle.set_current_value(9, 0, 1));
        assert_eq!(Err(SudokuError::InvalidNumber),
            puzzle.set_current_value(2, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber),
            puzzle.set_current_value(2, 0, 10));
    }

    #[test]
    fn clear_cell_respects_editable_flag() {
        let mut puzzle = example_puzzle();

        puzzle.set_current_value(2, 0, 9).unwrap();
        puzzle.clear_cell(2, 0).unwrap();
        assert_eq!(EMPTY, puzzle.cell(2, 0).unwrap().current_value());

        puzzle.clear_cell(0, 0).unwrap();
        assert_eq!(5, puzzle.cell(0, 0).unwrap().current_value());
    }

    #[test]
    fn clear_resets_to_initial_state() {
        let mut puzzle = example_puzzle();
        let initial = puzzle.clone();

        puzzle.set_current_value(2, 0, 9).unwrap();
        puzzle.set_current_value(1, 1, 3).unwrap();
        puzzle.clear();

        assert_eq!(initial, puzzle);
    }

    #[test]
    fn row_section_contains_row_cells() {
        let puzzle = example_puzzle();
        let section = puzzle.row(2).unwrap();
        let mut count = 0;

        for ((column, row), cell) in section.cells() {
            assert_eq!(2, row);
            assert_eq!(cell.correct_value(),
                puzzle.cell(column, row).unwrap().correct_value());
            count += 1;
        }

        assert_eq!(BOARD_SIZE, count);
        assert!(section.get(4, 2).is_some());
        assert!(section.get(4, 3).is_none());
    }

    #[test]
    fn column_section_contains_column_cells() {
        let puzzle = example_puzzle();
        let section = puzzle.column(7).unwrap();

        for ((column, _), _) in section.cells() {
            assert_eq!(7, column);
        }

        assert_eq!(BOARD_SIZE, section.cells().count());
    }

    #[test]
    fn block_section_matches_block_index() {
        let puzzle = example_puzzle();
        // (4, 4) lies in the central block, covering (3, 3) to (5, 5).
        let section = puzzle.block(4, 4).unwrap();

        for ((column, row), _) in section.cells() {
            assert_eq!(4, block_index(column, row));
            assert!((3..6).contains(&column));
            assert!((3..6).contains(&row));
        }

        assert_eq!(BOARD_SIZE, section.cells().count());
    }

    #[test]
    fn sections_check_bounds() {
        let puzzle = example_puzzle();

        assert!(puzzle.row(9).is_err());
        assert!(puzzle.column(9).is_err());
        assert!(puzzle.block(9, 0).is_err());
    }

    #[test]
    fn section_correctness() {
        let mut puzzle = example_puzzle();

        assert!(!puzzle.row(0).unwrap().is_correct());

        // Fill row 0 with its correct values.
        for column in 0..BOARD_SIZE {
            let correct =
                puzzle.cell(column, 0).unwrap().correct_value();
            puzzle.set_current_value(column, 0, correct).unwrap();
        }

        let row = puzzle.row(0).unwrap();
        assert!(row.is_correct());
        assert!(row.incorrect_positions().is_empty());

        // A wrong entry makes the row incorrect again.
        puzzle.set_current_value(2, 0, 1).unwrap();
        let row = puzzle.row(0).unwrap();
        assert!(!row.is_correct());
        assert_eq!(vec![(2, 0)], row.incorrect_positions());
    }

    #[test]
    fn solving_the_puzzle() {
        let mut puzzle = example_puzzle();

        assert!(!puzzle.is_solved());
        assert!(!puzzle.incorrect_sections().is_empty());

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let correct =
                    puzzle.cell(column, row).unwrap().correct_value();
                puzzle.set_current_value(column, row, correct).unwrap();
            }
        }

        assert!(puzzle.is_solved());
        assert!(puzzle.incorrect_sections().is_empty());
    }

    #[test]
    fn solution_and_current_grid_extraction() {
        let mut puzzle = example_puzzle();
        let solution = SudokuGrid::parse(SOLUTION).unwrap();
        let clues = SudokuGrid::parse(CLUES).unwrap();

        assert_eq!(solution, puzzle.solution());
        assert_eq!(clues, puzzle.current_grid());

        puzzle.set_current_value(2, 0, 4).unwrap();
        let mut expected = clues.clone();
        expected.set_cell(2, 0, 4).unwrap();
        assert_eq!(expected, puzzle.current_grid());
    }

    #[test]
    fn serde_round_trip() {
        let puzzle = example_puzzle();
        let json = serde_json::to_string(&puzzle).unwrap();
        let deserialized: Puzzle =
            serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(puzzle, deserialized);
    }
}
