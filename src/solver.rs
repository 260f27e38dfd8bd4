//! This module contains the logic for solving boards.
//!
//! The [BacktrackingSolver] fills every empty cell of a board by recursively
//! testing candidate digits. Candidate order is either ascending or uniformly
//! shuffled, depending on [Config::shuffle_candidates](crate::Config), which
//! is what lets repeated solves of the same puzzle yield different
//! completions when shuffling is enabled.

use crate::{SIZE, Sudoku};
use crate::candidates::legal_candidates;
use crate::error::{SudokuError, SudokuResult};
use crate::util::shuffle;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A perfect solver which fills boards by recursively testing all legal
/// candidates for each empty cell, in row-major order. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow on
/// pathological inputs, although typical puzzles solve quickly.
/// * It finds a completion whenever one exists.
///
/// The solver owns a random number generator used to shuffle candidate order
/// when the solved Sudoku's configuration asks for it, and two counters for
/// instrumentation: the number of recursive calls and the number of
/// backtracks of the last [BacktrackingSolver::solve] invocation.
///
/// Cells filled before solving begins are never touched: the search only
/// selects empty cells, so given cells stay fixed throughout.
pub struct BacktrackingSolver<R: Rng> {
    rng: R,
    recursion_count: u64,
    backtrack_count: u64
}

impl BacktrackingSolver<ThreadRng> {

    /// Creates a new solver that uses a [ThreadRng] to shuffle candidates.
    pub fn new_default() -> BacktrackingSolver<ThreadRng> {
        BacktrackingSolver::new(rand::thread_rng())
    }
}

impl<R: Rng> BacktrackingSolver<R> {

    /// Creates a new solver that uses the given random number generator to
    /// shuffle candidates. Providing a seeded generator makes solving with
    /// shuffled candidates reproducible.
    pub fn new(rng: R) -> BacktrackingSolver<R> {
        BacktrackingSolver {
            rng,
            recursion_count: 0,
            backtrack_count: 0
        }
    }

    /// The number of recursive search calls made by the last call to
    /// [BacktrackingSolver::solve]. At least one per cell the solve filled.
    pub fn recursion_count(&self) -> u64 {
        self.recursion_count
    }

    /// The number of abandoned placements of the last call to
    /// [BacktrackingSolver::solve], i.e. how often a tentative digit was
    /// undone because every downstream candidate path failed.
    pub fn backtrack_count(&self) -> u64 {
        self.backtrack_count
    }

    fn solve_rec(&mut self, sudoku: &mut Sudoku, position: usize) -> bool {
        self.recursion_count += 1;

        let position = match sudoku.board().next_empty(position) {
            Some(position) => position,
            None => return true
        };
        let column = position % SIZE;
        let row = position / SIZE;
        let candidates = legal_candidates(sudoku.board(), column, row);
        let ordered = if sudoku.config().shuffle_candidates {
            shuffle(&mut self.rng, candidates.iter())
        }
        else {
            candidates.iter().collect()
        };

        for digit in ordered {
            sudoku.place_digit(column, row, digit);

            if self.solve_rec(sudoku, position + 1) {
                return true;
            }

            self.backtrack_count += 1;
            sudoku.unplace_digit(column, row, digit);
        }

        false
    }

    /// Attempts to fill every empty cell of the given Sudoku's board with a
    /// digit such that no row, column, or block contains a duplicate. On
    /// success, `true` is returned and the board is left fully filled. If no
    /// completion exists, `false` is returned and the board is restored to
    /// exactly its pre-call state - every tentative placement is undone on
    /// the failing path.
    ///
    /// The board is validated first; a board with active conflicts is not
    /// searched at all, the solver reports failure immediately. This also
    /// means the constraint tracker is synchronized with the board whenever
    /// this method returns.
    ///
    /// Both counters are reset at the start of every call.
    pub fn solve(&mut self, sudoku: &mut Sudoku) -> bool {
        self.start(sudoku, 0)
    }

    /// Like [BacktrackingSolver::solve], but starts scanning for the first
    /// empty cell at the given coordinates instead of the top-left corner.
    /// Cells before that position are left as they are.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn solve_from(&mut self, sudoku: &mut Sudoku, column: usize,
            row: usize) -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok(self.start(sudoku, crate::index(column, row)))
    }

    fn start(&mut self, sudoku: &mut Sudoku, position: usize) -> bool {
        self.recursion_count = 0;
        self.backtrack_count = 0;

        if !sudoku.validate_board() {
            return false;
        }

        self.solve_rec(sudoku, position)
    }
}
