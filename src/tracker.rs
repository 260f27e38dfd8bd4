//! This module contains the [ConstraintTracker], which records how often each
//! digit occurs in every row, column, and block of a board.
//!
//! The tracker is the incremental counterpart to a full line scan: every cell
//! edit updates it in constant time, so checking whether a digit is already
//! used in a line does not require rescanning the board. It is owned by the
//! [Validator](crate::validator::Validator) and kept in lockstep with the
//! [Board](crate::Board) through paired remove/add updates.

/// An enumeration of the three kinds of lines a Sudoku cell belongs to. A
/// line is any group of nine cells that must contain each digit at most once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {

    /// A horizontal line of nine cells. The line id is the row index.
    Row,

    /// A vertical line of nine cells. The line id is the column index.
    Column,

    /// One of the nine 3x3 sub-grids. The line id is computed by
    /// [block_index].
    Block
}

/// Computes the id of the block containing the cell at the given coordinates.
/// Blocks are numbered 0 to 8 in row-major order, i.e. the top-left block is
/// 0 and the bottom-right block is 8.
pub fn block_index(column: usize, row: usize) -> usize {
    3 * (row / 3) + column / 3
}

/// Records the occurrence count of every digit in every row, column, and
/// block. Counts are plain multiplicities: a count greater than 1 is a valid
/// transient state which arises when a duplicate digit is entered. The
/// duplicate is retained deliberately, so that when one of two colliding
/// digits is later removed, the other is still correctly known to be present.
///
/// All mutation goes through [ConstraintTracker::add] and
/// [ConstraintTracker::remove] (or the cell-level wrappers), which keeps the
/// three line families consistent with each other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintTracker {
    rows: [[u8; 9]; 9],
    columns: [[u8; 9]; 9],
    blocks: [[u8; 9]; 9]
}

impl ConstraintTracker {

    /// Creates a new tracker with all counts at zero, matching an empty
    /// board.
    pub fn new() -> ConstraintTracker {
        ConstraintTracker {
            rows: [[0; 9]; 9],
            columns: [[0; 9]; 9],
            blocks: [[0; 9]; 9]
        }
    }

    /// Resets all counts to zero, matching an empty board.
    pub fn clear(&mut self) {
        self.rows = [[0; 9]; 9];
        self.columns = [[0; 9]; 9];
        self.blocks = [[0; 9]; 9];
    }

    fn count_mut(&mut self, kind: LineKind, line: usize, digit: u8)
            -> Option<&mut u8> {
        if line >= 9 || digit < 1 || digit > 9 {
            return None;
        }

        let counts = match kind {
            LineKind::Row => &mut self.rows,
            LineKind::Column => &mut self.columns,
            LineKind::Block => &mut self.blocks
        };

        Some(&mut counts[line][(digit - 1) as usize])
    }

    /// Increments the occurrence count of the given digit in the given line.
    /// No upper bound is enforced, multiplicities greater than 1 are valid
    /// transient states. Out-of-range lines and digits are ignored.
    pub fn add(&mut self, kind: LineKind, line: usize, digit: u8) {
        if let Some(count) = self.count_mut(kind, line, digit) {
            *count += 1;
        }
    }

    /// Decrements the occurrence count of the given digit in the given line,
    /// if it is nonzero. Removing an absent digit is a legitimate and
    /// frequent no-op, not an error: it happens whenever an empty cell is
    /// (re-)assigned. Out-of-range lines and digits are ignored.
    pub fn remove(&mut self, kind: LineKind, line: usize, digit: u8) {
        if let Some(count) = self.count_mut(kind, line, digit) {
            if *count > 0 {
                *count -= 1;
            }
        }
    }

    /// Indicates whether the given digit currently occurs at least once in
    /// the given line. Out-of-range lines and digits are never present.
    pub fn present(&self, kind: LineKind, line: usize, digit: u8) -> bool {
        if line >= 9 || digit < 1 || digit > 9 {
            return false;
        }

        let counts = match kind {
            LineKind::Row => &self.rows,
            LineKind::Column => &self.columns,
            LineKind::Block => &self.blocks
        };

        counts[line][(digit - 1) as usize] > 0
    }

    /// Adds the given digit to the row, column, and block of the cell at the
    /// given coordinates. This is one half of the paired update performed on
    /// every cell edit.
    pub fn add_cell(&mut self, column: usize, row: usize, digit: u8) {
        self.add(LineKind::Row, row, digit);
        self.add(LineKind::Column, column, digit);
        self.add(LineKind::Block, block_index(column, row), digit);
    }

    /// Removes the given digit from the row, column, and block of the cell at
    /// the given coordinates. This is the other half of the paired update
    /// performed on every cell edit.
    pub fn remove_cell(&mut self, column: usize, row: usize, digit: u8) {
        self.remove(LineKind::Row, row, digit);
        self.remove(LineKind::Column, column, digit);
        self.remove(LineKind::Block, block_index(column, row), digit);
    }

    /// Indicates whether the given digit occurs in the row, column, or block
    /// of the cell at the given coordinates.
    pub fn seen(&self, column: usize, row: usize, digit: u8) -> bool {
        self.present(LineKind::Row, row, digit) ||
            self.present(LineKind::Column, column, digit) ||
            self.present(LineKind::Block, block_index(column, row), digit)
    }
}

impl Default for ConstraintTracker {
    fn default() -> ConstraintTracker {
        ConstraintTracker::new()
    }
}
