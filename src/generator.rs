//! This module contains the logic for generating random Sudoku puzzles.
//!
//! A [Generator] first obtains a full random solution grid from the
//! [BacktrackingSolver](crate::solver::BacktrackingSolver) and then removes
//! digits from a copy, in random order, as long as the remainder keeps a
//! unique solution. The result is a [Puzzle] pairing the visible clues with
//! the full solution.

use crate::{SudokuGrid, BOARD_SIZE, CELL_COUNT, EMPTY};
use crate::error::{GeneratorError, GeneratorResult};
use crate::puzzle::Puzzle;
use crate::solver::BacktrackingSolver;
use crate::util::shuffle;

use rand::Rng;
use rand::rngs::ThreadRng;

/// The lowest number of clues a generated puzzle may have. Proper Sudoku with
/// as few as 17 clues exist, but they are exceedingly rare; requiring a few
/// more keeps generation times reasonable. This is a tunable of this crate,
/// not a mathematical bound.
pub const MIN_CLUES: usize = 25;

/// The highest number of clues a generated puzzle may have, i.e. a fully
/// visible board.
pub const MAX_CLUES: usize = CELL_COUNT;

/// The number of generation attempts a [Generator] makes by default before
/// giving up. See [Generator::with_max_attempts].
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

fn positions() -> impl Iterator<Item = (usize, usize)> {
    (0..BOARD_SIZE)
        .flat_map(|column| (0..BOARD_SIZE).map(move |row| (column, row)))
}

/// A generator randomly creates Sudoku puzzles with a chosen number of clues
/// and a guaranteed unique solution. It uses a random number generator to
/// vary both the solution grid and the choice of removed digits. For most
/// cases, sensible defaults are provided by [Generator::new_default].
///
/// Generation is a blocking, CPU-bound computation. Every call operates on
/// its own grid copies, so independent generators may run in parallel on
/// independent threads; invoke generation off of any UI thread.
pub struct Generator<R: Rng> {
    solver: BacktrackingSolver,
    rng: R,
    max_attempts: usize
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to vary the generated
    /// puzzles and gives up after [DEFAULT_MAX_ATTEMPTS] attempts.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator to
    /// vary the generated puzzles and gives up after [DEFAULT_MAX_ATTEMPTS]
    /// attempts.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            solver: BacktrackingSolver,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS
        }
    }

    /// Sets the number of generation attempts after which [Generator::create]
    /// reports `GeneratorError::AttemptsExhausted` instead of retrying with
    /// yet another fresh solution. Must be at least 1.
    ///
    /// Some solution grids are too rigid to be reduced to a low clue count
    /// while staying unique, in which case the generator retries with a new
    /// solution. Without a budget that retry loop has no termination
    /// guarantee, so it is capped explicitly.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Generator<R> {
        assert!(max_attempts > 0, "max_attempts must be at least 1");
        self.max_attempts = max_attempts;
        self
    }

    /// Creates a new Sudoku puzzle with exactly `target_clues` visible clues
    /// and a unique solution (subject to the heuristic described in
    /// [BacktrackingSolver::is_unique]).
    ///
    /// The puzzle is built by solving an empty grid into a random full
    /// `solution`, copying it, and then walking all 81 positions in a random
    /// order: each visited digit is tentatively removed and the removal is
    /// kept only if the remaining grid still has a unique solution. Once the
    /// clue count reaches `target_clues` the walk stops. If the walk exhausts
    /// all positions while still above the target, the solution was too rigid
    /// and the whole attempt is retried with a fresh solution and a fresh
    /// position order, up to the configured attempt budget.
    ///
    /// In the returned puzzle, every position holds the correct value from
    /// `solution`; the removed cells are editable with a cleared current
    /// value, the remaining `target_clues` cells are non-editable clues.
    ///
    /// # Arguments
    ///
    /// * `target_clues`: The number of visible clues the puzzle shall have.
    /// Must be in the range `[MIN_CLUES, MAX_CLUES]`.
    ///
    /// # Errors
    ///
    /// * `GeneratorError::ClueCountOutOfRange` If `target_clues` violates its
    /// bounds. This is checked before any search work begins.
    /// * `GeneratorError::AttemptsExhausted` If no attempt within the budget
    /// reached the target clue count.
    pub fn create(&mut self, target_clues: usize) -> GeneratorResult<Puzzle> {
        if target_clues < MIN_CLUES || target_clues > MAX_CLUES {
            return Err(GeneratorError::ClueCountOutOfRange);
        }

        let empty = SudokuGrid::new();

        for _ in 0..self.max_attempts {
            let solution = self.solver.solve(&empty, &mut self.rng)?;
            let mut puzzle = solution.clone();
            let mut current_clues = MAX_CLUES;

            // Reshuffled on every attempt so a failed attempt does not retry
            // the same doomed removal order.
            for (column, row) in shuffle(&mut self.rng, positions()) {
                if current_clues == target_clues {
                    break;
                }

                let removed = puzzle.get_cell(column, row).unwrap();

                if removed == EMPTY {
                    continue;
                }

                puzzle.clear_cell(column, row).unwrap();

                if self.solver.is_unique(&puzzle)? {
                    current_clues -= 1;
                }
                else {
                    puzzle.set_cell(column, row, removed).unwrap();
                }
            }

            if current_clues == target_clues {
                return Ok(Puzzle::new(&solution, &puzzle));
            }
        }

        Err(GeneratorError::AttemptsExhausted)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::BLOCK_SIZE;
    use crate::error::SolverError;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TARGET_CLUES: usize = 40;

    fn create_default() -> Puzzle {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(90));
        generator.create(TARGET_CLUES).unwrap()
    }

    #[test]
    fn created_puzzle_has_requested_clue_count() {
        let puzzle = create_default();
        let mut clues = 0;
        let mut editable_empty = 0;

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let cell = puzzle.cell(column, row).unwrap();

                if cell.is_editable() {
                    assert_eq!(EMPTY, cell.current_value());
                    editable_empty += 1;
                }
                else {
                    assert_eq!(cell.correct_value(), cell.current_value());
                    clues += 1;
                }
            }
        }

        assert_eq!(TARGET_CLUES, clues);
        assert_eq!(CELL_COUNT - TARGET_CLUES, editable_empty);
        assert_eq!(TARGET_CLUES, puzzle.clue_count());
    }

    #[test]
    fn created_puzzle_is_uniquely_solvable() {
        let puzzle = create_default();
        let solver = BacktrackingSolver;

        assert_eq!(Ok(true), solver.is_unique(&puzzle.current_grid()));
    }

    #[test]
    fn created_puzzle_clues_match_solution() {
        let puzzle = create_default();
        let solution = puzzle.solution();

        assert!(solution.is_full());

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let cell = puzzle.cell(column, row).unwrap();
                assert_eq!(solution.get_cell(column, row).unwrap(),
                    cell.correct_value());
            }
        }
    }

    #[test]
    fn round_trip_restores_solution() {
        let mut puzzle = create_default();
        let solution = puzzle.solution();

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let correct = puzzle.cell(column, row).unwrap()
                    .correct_value();
                puzzle.set_current_value(column, row, correct).unwrap();
            }
        }

        assert!(puzzle.is_solved());
        assert_eq!(solution, puzzle.current_grid());

        let solver = BacktrackingSolver;
        assert_eq!(Ok(true), solver.is_unique(&solution));
    }

    #[test]
    fn blocks_hold_distinct_correct_values() {
        let puzzle = create_default();

        for block in 0..BOARD_SIZE {
            let column = (block % BLOCK_SIZE) * BLOCK_SIZE;
            let row = (block / BLOCK_SIZE) * BLOCK_SIZE;
            let section = puzzle.block(column, row).unwrap();
            let mut seen = [false; BOARD_SIZE];

            for (_, cell) in section.cells() {
                let i = (cell.correct_value() - 1) as usize;
                assert!(!seen[i], "Duplicate correct value in block {}.",
                    block);
                seen[i] = true;
            }
        }
    }

    #[test]
    fn full_clue_count_yields_fixed_board() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let puzzle = generator.create(MAX_CLUES).unwrap();

        assert_eq!(MAX_CLUES, puzzle.clue_count());
        assert!(puzzle.is_solved());
    }

    #[test]
    fn too_few_clues_rejected() {
        let mut generator = Generator::new_default();

        assert_eq!(Err(GeneratorError::ClueCountOutOfRange),
            generator.create(MIN_CLUES - 1));
    }

    #[test]
    fn too_many_clues_rejected() {
        let mut generator = Generator::new_default();

        assert_eq!(Err(GeneratorError::ClueCountOutOfRange),
            generator.create(MAX_CLUES + 1));
    }

    #[test]
    fn solver_errors_convert_into_generator_errors() {
        assert_eq!(GeneratorError::Solver(SolverError::Unsolvable),
            GeneratorError::from(SolverError::Unsolvable));
    }

    #[test]
    #[should_panic]
    fn zero_attempt_budget_rejected() {
        let _ = Generator::new_default().with_max_attempts(0);
    }
}
