// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a 9x9 Sudoku engine built around an incrementally
//! maintained constraint tracker. It supports the following key features:
//!
//! * Parsing and printing boards
//! * Incremental per-cell validation on every edit as well as whole-board
//! validation with a well-defined scan-order duplicate rule
//! * Solving boards using recursive backtracking, optionally with uniformly
//! shuffled candidate order so that repeated runs on the same puzzle can
//! yield different completions
//! * Recursion and backtrack counters for instrumentation by the caller
//!
//! # Parsing and printing boards
//!
//! See [Board::parse] for the exact format of a board code.
//!
//! ```
//! use sudoku_engine::Board;
//!
//! let board = Board::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Validating boards
//!
//! A [Sudoku] bundles a [Board] with the [Validator](validator::Validator)
//! that tracks digit occurrences per row, column, and block. Edits go through
//! [Sudoku::set_cell], which keeps board and tracker synchronized and, if
//! [Config::validate_on_insert] is set, reports whether the new value
//! conflicts with a digit already present in one of its lines.
//!
//! ```
//! use sudoku_engine::{CellValue, Config, Sudoku};
//!
//! let mut sudoku = Sudoku::new(Config::default());
//! assert_eq!(Some(true),
//!     sudoku.set_cell(0, 0, CellValue::Digit(5)).unwrap());
//!
//! // 5 is already present in the top-left block
//! assert_eq!(Some(false),
//!     sudoku.set_cell(1, 1, CellValue::Digit(5)).unwrap());
//! ```
//!
//! Whole-board validation is order-sensitive: scanning in row-major order,
//! the first occurrence of a digit within a shared line is reported valid and
//! every later occurrence invalid. See [Sudoku::validate_board] and
//! [Sudoku::invalid_cells].
//!
//! # Solving boards
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills all empty cells
//! of a valid board, or reports failure and restores the board if no
//! completion exists.
//!
//! ```
//! use sudoku_engine::{Config, Sudoku};
//! use sudoku_engine::solver::BacktrackingSolver;
//!
//! let mut sudoku = Sudoku::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9", Config::default()).unwrap();
//! let mut solver = BacktrackingSolver::new_default();
//!
//! assert!(solver.solve(&mut sudoku));
//! assert!(sudoku.board().is_full());
//! ```

pub mod candidates;
pub mod error;
pub mod solver;
pub mod tracker;
pub mod util;
pub mod validator;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use tracker::ConstraintTracker;
use validator::Validator;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The size of the grid on one axis, i.e. the number of cells per line.
pub const SIZE: usize = 9;

/// The number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The content of one cell of a [Board].
///
/// An invalid token is not rejected at the boundary: it is stored in the cell
/// so that validation can flag the cell as invalid, allowing a caller to
/// render the error state instead of losing the input.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CellValue {

    /// The cell contains no value.
    Empty,

    /// The cell contains a digit, which is in the range `[1, 9]` for all
    /// values produced by this crate. A caller-constructed out-of-range digit
    /// is treated like an invalid token by validation and never contributes
    /// constraint state.
    Digit(u8),

    /// The cell contains a token that is not a digit from 1 to 9. The raw
    /// token is retained for display purposes.
    Invalid(String)
}

impl CellValue {

    /// Converts a raw input token into a cell value. Surrounding whitespace
    /// is ignored. An empty token yields [CellValue::Empty], a digit from 1
    /// to 9 yields [CellValue::Digit], and everything else yields
    /// [CellValue::Invalid] wrapping the trimmed token.
    pub fn from_token(token: &str) -> CellValue {
        let token = token.trim();

        if token.is_empty() {
            return CellValue::Empty;
        }

        match token.parse::<u8>() {
            Ok(digit) if digit >= 1 && digit <= 9 => CellValue::Digit(digit),
            _ => CellValue::Invalid(String::from(token))
        }
    }

    /// Returns the digit contained in this cell value, if it is a digit in
    /// the range `[1, 9]`. This is the single gate deciding whether a value
    /// contributes constraint state to the tracker.
    pub fn digit(&self) -> Option<u8> {
        match self {
            CellValue::Digit(digit) if *digit >= 1 && *digit <= 9 =>
                Some(*digit),
            _ => None
        }
    }

    /// Indicates whether this is the [CellValue::Empty] variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

fn to_char(cell: &CellValue) -> char {
    match cell {
        CellValue::Empty => ' ',
        CellValue::Digit(digit) if *digit >= 1 && *digit <= 9 =>
            (b'0' + *digit) as char,
        _ => '?'
    }
}

fn to_string(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::from(""),
        CellValue::Digit(digit) => digit.to_string(),
        CellValue::Invalid(token) => token.clone()
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A Sudoku board is the exclusive owner of the 81 cell values, stored in
/// row-major order. It knows nothing about the rules of the puzzle; checking
/// entries against the row/column/block uniqueness constraints is the job of
/// the [Validator](validator::Validator), which a [Sudoku] pairs with the
/// board.
///
/// `Board` implements `Display` and renders as a bordered grid:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │ 3 │   ║   │ 7 │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 6 │   │   ║ 1 │ 9 │ 5 ║   │   │   ║
/// ...
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    cells: Vec<CellValue>
}

fn line(start: char, thick_sep: char, thin_sep: char, segment: impl Fn(usize) -> char,
        pad: char, end: char, newline: bool) -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % 3 == 0 {
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

fn content_row(board: &Board, y: usize) -> String {
    line('║', '║', '│', |x| to_char(&board.cells[index(x, y)]), ' ', '║',
        true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % 3 == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl Board {

    /// Creates a new, empty board.
    pub fn new() -> Board {
        Board {
            cells: vec![CellValue::Empty; CELL_COUNT]
        }
    }

    /// Parses a code encoding a board. The code is a comma-separated list of
    /// exactly 81 entries, assigned left-to-right, top-to-bottom, where each
    /// row is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// An empty entry yields an empty cell and a digit from 1 to 9 yields a
    /// filled cell. Any other entry is kept as [CellValue::Invalid] rather
    /// than rejected, so that validation can flag the affected cell. See
    /// [CellValue::from_token].
    ///
    /// # Errors
    ///
    /// `SudokuParseError::WrongNumberOfCells` if the number of entries is not
    /// 81.
    pub fn parse(code: &str) -> SudokuParseResult<Board> {
        let tokens: Vec<&str> = code.split(',').collect();

        if tokens.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        Ok(Board {
            cells: tokens.iter()
                .map(|token| CellValue::from_token(token))
                .collect()
        })
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [Board::parse]. That is, a board that is converted to a string and
    /// parsed again will not change.
    ///
    /// ```
    /// use sudoku_engine::{Board, CellValue};
    ///
    /// let mut board = Board::new();
    /// board.set_cell(1, 1, CellValue::Digit(4)).unwrap();
    /// board.set_cell(1, 2, CellValue::Digit(5)).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = Board::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    fn check_bounds(column: usize, row: usize) -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets the content of the cell at the specified position.
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
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<&CellValue> {
        Board::check_bounds(column, row)?;
        Ok(&self.cells[index(column, row)])
    }

    /// Sets the content of the cell at the specified position to the given
    /// value, overwriting the old content. Assigning [CellValue::Empty]
    /// clears the cell.
    ///
    /// Note that a board on its own does not maintain any constraint state;
    /// when the board is managed by a [Sudoku], edits must go through
    /// [Sudoku::set_cell] instead so that board and tracker stay
    /// synchronized.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `value`: The new content of the specified cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn set_cell(&mut self, column: usize, row: usize, value: CellValue)
            -> SudokuResult<()> {
        Board::check_bounds(column, row)?;
        self.cells[index(column, row)] = value;
        Ok(())
    }

    /// Indicates whether the cell at the specified position contains the
    /// given digit. Out-of-range coordinates or digits yield `false`.
    pub(crate) fn has_digit(&self, column: usize, row: usize, digit: u8)
            -> bool {
        column < SIZE && row < SIZE &&
            self.cells[index(column, row)].digit() == Some(digit)
    }

    /// Scans forward from the given row-major position (inclusive) for the
    /// first empty cell and returns its position, or `None` if all cells at
    /// or after `position` are filled.
    pub(crate) fn next_empty(&self, position: usize) -> Option<usize> {
        (position..CELL_COUNT).find(|&i| self.cells[i].is_empty())
    }

    /// Indicates whether this board is full, i.e. no cell is empty. Cells
    /// with invalid tokens count as filled.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    /// Indicates whether this board is empty, i.e. every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Counts the number of clues given by this board, that is, the number of
    /// cells containing a digit.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.digit().is_some())
            .count()
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Configuration consumed by the engine, supplied by the caller. Loading
/// configuration from any source is the caller's responsibility.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {

    /// If set, [Sudoku::set_cell] checks every edit against the constraint
    /// tracker and reports whether the new value is free of conflicts. If
    /// unset, edits still update the tracker but no check is performed.
    pub validate_on_insert: bool,

    /// If set, the [BacktrackingSolver](solver::BacktrackingSolver) tries the
    /// candidates of each cell in uniformly shuffled order, so repeated
    /// solves of the same puzzle can yield different completions. If unset,
    /// candidates are tried in ascending order and solving is deterministic.
    pub shuffle_candidates: bool
}

impl Default for Config {
    fn default() -> Config {
        Config {
            validate_on_insert: true,
            shuffle_candidates: true
        }
    }
}

/// A Sudoku bundles a [Board] with the [Validator] that maintains the
/// occurrence counts for its rows, columns, and blocks, together with the
/// caller-supplied [Config].
///
/// Board and tracker are created together and reset together, and every edit
/// performs a paired tracker update (remove the old value's contribution,
/// add the new one's), so the two can never desynchronize. Each `Sudoku` is
/// an independent value; multiple boards can coexist safely.
#[derive(Clone, Debug)]
pub struct Sudoku {
    board: Board,
    validator: Validator,
    config: Config
}

impl Sudoku {

    /// Creates a new Sudoku with an empty board, an empty tracker, and the
    /// given configuration.
    pub fn new(config: Config) -> Sudoku {
        Sudoku {
            board: Board::new(),
            validator: Validator::new(),
            config
        }
    }

    /// Creates a new Sudoku holding the given board, which may already
    /// contain some values. The tracker is synchronized with the board's
    /// content. Note that it is *not* checked whether the board is free of
    /// conflicts - it is perfectly legal to create an invalid Sudoku here and
    /// query [Sudoku::validate_board] afterwards.
    pub fn new_with_board(board: Board, config: Config) -> Sudoku {
        let mut validator = Validator::new();
        validator.rebuild(&board);

        Sudoku {
            board,
            validator,
            config
        }
    }

    /// Parses the code into a [Board] using [Board::parse] and wraps the
    /// result in a Sudoku with the given configuration.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [Board::parse] for further information.
    pub fn parse(code: &str, config: Config) -> SudokuParseResult<Sudoku> {
        Ok(Sudoku::new_with_board(Board::parse(code)?, config))
    }

    /// Gets a reference to the [Board] of this Sudoku.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets a reference to the [ConstraintTracker] maintained for this
    /// Sudoku's board.
    pub fn tracker(&self) -> &ConstraintTracker {
        self.validator.tracker()
    }

    /// Gets the [Config] of this Sudoku.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the content of the cell at the specified position. See
    /// [Board::get_cell].
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<&CellValue> {
        self.board.get_cell(column, row)
    }

    /// Sets the content of the cell at the specified position to the given
    /// value. This is the edit path for callers: it always performs the
    /// paired tracker update (the old value's contribution is removed, the
    /// new one's added), never one without the other.
    ///
    /// If [Config::validate_on_insert] is set, the new value is additionally
    /// checked against the tracker and `Some(validity)` is returned, where
    /// the validity is as defined by
    /// [Validator::validate_cell](validator::Validator::validate_cell). If
    /// the option is unset, no check is performed and `None` is returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `SudokuError::OutOfBounds` is returned and neither board nor
    /// tracker change.
    pub fn set_cell(&mut self, column: usize, row: usize, value: CellValue)
            -> SudokuResult<Option<bool>> {
        let old = self.board.get_cell(column, row)?.clone();
        let result = if self.config.validate_on_insert {
            Some(self.validator.validate_cell(column, row, &value, &old))
        }
        else {
            self.validator.update_cell(column, row, &value, &old);
            None
        };

        self.board.set_cell(column, row, value)?;
        Ok(result)
    }

    /// Checks the entire board for conflicts. Cells are checked in row-major
    /// order against a tracker that is rebuilt during the scan, which makes
    /// the result order-sensitive: the first occurrence of a digit within a
    /// shared row, column, or block is valid and every later occurrence in
    /// scan order is invalid. The board is valid if and only if no cell was
    /// flagged.
    ///
    /// Afterwards, the tracker is fully synchronized with the board. Calling
    /// this method twice without intervening edits yields the same result.
    pub fn validate_board(&mut self) -> bool {
        self.validator.validate_board(&self.board)
    }

    /// Performs the same scan as [Sudoku::validate_board], but returns the
    /// coordinates of all flagged cells as `(column, row)` pairs, in
    /// row-major order. Intended for callers that render error states.
    pub fn invalid_cells(&mut self) -> Vec<(usize, usize)> {
        self.validator.invalid_cells(&self.board)
    }

    /// Resets this Sudoku to an empty board and an empty tracker, in
    /// lockstep. The configuration is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.validator.reset();
    }

    /// Places a digit into an empty cell on behalf of the solver, updating
    /// board and tracker together. The caller guarantees in-range coordinates
    /// and digit.
    pub(crate) fn place_digit(&mut self, column: usize, row: usize,
            digit: u8) {
        self.board.cells[index(column, row)] = CellValue::Digit(digit);
        self.validator.tracker_mut().add_cell(column, row, digit);
    }

    /// Reverts a previous [Sudoku::place_digit], clearing the cell and
    /// removing the digit's contribution from the tracker.
    pub(crate) fn unplace_digit(&mut self, column: usize, row: usize,
            digit: u8) {
        self.board.cells[index(column, row)] = CellValue::Empty;
        self.validator.tracker_mut().remove_cell(column, row, digit);
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn from_token_classification() {
        assert_eq!(CellValue::Empty, CellValue::from_token(""));
        assert_eq!(CellValue::Empty, CellValue::from_token("  "));
        assert_eq!(CellValue::Digit(1), CellValue::from_token("1"));
        assert_eq!(CellValue::Digit(9), CellValue::from_token(" 9 "));
        assert_eq!(CellValue::Invalid(String::from("0")),
            CellValue::from_token("0"));
        assert_eq!(CellValue::Invalid(String::from("10")),
            CellValue::from_token("10"));
        assert_eq!(CellValue::Invalid(String::from("x")),
            CellValue::from_token("x"));
    }

    #[test]
    fn digit_gate() {
        assert_eq!(Some(5), CellValue::Digit(5).digit());
        assert_eq!(None, CellValue::Empty.digit());
        assert_eq!(None, CellValue::Invalid(String::from("x")).digit());
        assert_eq!(None, CellValue::Digit(0).digit());
        assert_eq!(None, CellValue::Digit(12).digit());
    }

    #[test]
    fn parse_ok() {
        let mut code = String::from("5,3, , ,7");
        code.push_str(&",".repeat(76));
        let board = Board::parse(code.as_str()).unwrap();

        assert_eq!(&CellValue::Digit(5), board.get_cell(0, 0).unwrap());
        assert_eq!(&CellValue::Digit(3), board.get_cell(1, 0).unwrap());
        assert_eq!(&CellValue::Empty, board.get_cell(2, 0).unwrap());
        assert_eq!(&CellValue::Digit(7), board.get_cell(4, 0).unwrap());
        assert_eq!(&CellValue::Empty, board.get_cell(8, 8).unwrap());
        assert_eq!(5, board.cells().iter().next().unwrap().digit().unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Board::parse("1,2,3"));

        let too_many = ",".repeat(81);
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Board::parse(too_many.as_str()));
    }

    #[test]
    fn parse_keeps_invalid_tokens() {
        let mut code = String::from("w,0,17");
        code.push_str(&",".repeat(78));
        let board = Board::parse(code.as_str()).unwrap();

        assert_eq!(&CellValue::Invalid(String::from("w")),
            board.get_cell(0, 0).unwrap());
        assert_eq!(&CellValue::Invalid(String::from("0")),
            board.get_cell(1, 0).unwrap());
        assert_eq!(&CellValue::Invalid(String::from("17")),
            board.get_cell(2, 0).unwrap());
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut board = Board::new();
        board.set_cell(0, 0, CellValue::Digit(1)).unwrap();
        board.set_cell(4, 4, CellValue::Digit(5)).unwrap();
        board.set_cell(8, 8, CellValue::Invalid(String::from("x"))).unwrap();

        let reparsed = Board::parse(board.to_parseable_string().as_str())
            .unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds),
            board.set_cell(9, 9, CellValue::Digit(1)));

        let mut sudoku = Sudoku::new(Config::default());
        assert_eq!(Err(SudokuError::OutOfBounds),
            sudoku.set_cell(0, 9, CellValue::Digit(1)));
    }

    #[test]
    fn clue_counting_and_fill_state() {
        let mut board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(0, board.count_clues());

        board.set_cell(0, 0, CellValue::Digit(3)).unwrap();
        board.set_cell(1, 0, CellValue::Invalid(String::from("x"))).unwrap();
        assert!(!board.is_empty());
        assert_eq!(1, board.count_clues());
    }

    #[test]
    fn next_empty_scans_forward() {
        let mut board = Board::new();
        assert_eq!(Some(0), board.next_empty(0));

        board.set_cell(0, 0, CellValue::Digit(1)).unwrap();
        board.set_cell(1, 0, CellValue::Digit(2)).unwrap();
        assert_eq!(Some(2), board.next_empty(0));
        assert_eq!(Some(2), board.next_empty(2));
        assert_eq!(Some(3), board.next_empty(3));
        assert_eq!(None, board.next_empty(CELL_COUNT));
    }

    #[test]
    fn set_cell_gated_by_config() {
        let mut checked = Sudoku::new(Config::default());
        assert_eq!(Some(true),
            checked.set_cell(0, 0, CellValue::Digit(4)).unwrap());
        assert_eq!(Some(false),
            checked.set_cell(1, 0, CellValue::Digit(4)).unwrap());

        let config = Config {
            validate_on_insert: false,
            ..Config::default()
        };
        let mut unchecked = Sudoku::new(config);
        assert_eq!(None,
            unchecked.set_cell(0, 0, CellValue::Digit(4)).unwrap());
        assert_eq!(None,
            unchecked.set_cell(1, 0, CellValue::Digit(4)).unwrap());

        // the tracker is updated even when checking is gated off
        assert!(unchecked.tracker().seen(5, 0, 4));
    }

    #[test]
    fn set_cell_keeps_tracker_synchronized() {
        let mut sudoku = Sudoku::new(Config::default());
        sudoku.set_cell(3, 3, CellValue::Digit(7)).unwrap();
        assert!(sudoku.tracker().seen(3, 8, 7));

        sudoku.set_cell(3, 3, CellValue::Digit(2)).unwrap();
        assert!(!sudoku.tracker().seen(3, 8, 7));
        assert!(sudoku.tracker().seen(3, 8, 2));

        sudoku.set_cell(3, 3, CellValue::Empty).unwrap();
        assert!(!sudoku.tracker().seen(3, 8, 2));
    }

    #[test]
    fn reset_clears_board_and_tracker() {
        let mut sudoku = Sudoku::new(Config::default());
        sudoku.set_cell(0, 0, CellValue::Digit(9)).unwrap();
        sudoku.reset();

        assert!(sudoku.board().is_empty());
        assert!(!sudoku.tracker().seen(8, 0, 9));
        assert_eq!(Some(true),
            sudoku.set_cell(1, 0, CellValue::Digit(9)).unwrap());
    }

    #[test]
    fn board_serde_round_trip() {
        let mut board = Board::new();
        board.set_cell(2, 5, CellValue::Digit(6)).unwrap();
        board.set_cell(7, 1, CellValue::Invalid(String::from("na"))).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = Config {
            validate_on_insert: false,
            shuffle_candidates: true
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config =
            serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn display_renders_digits_and_invalid_tokens() {
        let mut board = Board::new();
        board.set_cell(0, 0, CellValue::Digit(5)).unwrap();
        board.set_cell(1, 0, CellValue::Invalid(String::from("zz"))).unwrap();

        let rendered = format!("{}", board);
        assert!(rendered.contains("║ 5 │ ? │"));
    }
}
