//! This module contains the [Validator], which answers whether a cell or the
//! whole board is currently free of row/column/block conflicts.
//!
//! The validator owns the [ConstraintTracker] and is the only component that
//! mutates it during editing. Per-cell validation is incremental: it adjusts
//! the tracker by the edit being checked instead of rescanning any lines.

use crate::{Board, CellValue, SIZE};
use crate::tracker::ConstraintTracker;

/// Checks cells and boards for conflicts against an incrementally maintained
/// [ConstraintTracker]. A [Sudoku](crate::Sudoku) creates its validator
/// together with its board and resets both in lockstep.
#[derive(Clone, Debug)]
pub struct Validator {
    tracker: ConstraintTracker
}

impl Validator {

    /// Creates a new validator with an empty tracker, matching an empty
    /// board.
    pub fn new() -> Validator {
        Validator {
            tracker: ConstraintTracker::new()
        }
    }

    /// Gets a reference to the [ConstraintTracker] owned by this validator.
    pub fn tracker(&self) -> &ConstraintTracker {
        &self.tracker
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut ConstraintTracker {
        &mut self.tracker
    }

    /// Resets the tracker to match an empty board.
    pub fn reset(&mut self) {
        self.tracker.clear();
    }

    /// Rebuilds the tracker from scratch to match the given board's content.
    pub fn rebuild(&mut self, board: &Board) {
        self.tracker.clear();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Ok(cell) = board.get_cell(column, row) {
                    if let Some(digit) = cell.digit() {
                        self.tracker.add_cell(column, row, digit);
                    }
                }
            }
        }
    }

    /// Applies a cell edit to the tracker without checking it: the old
    /// value's contribution is removed and the new value's is added. This is
    /// the paired update every edit must perform; it is used directly when
    /// per-edit validation is gated off by the configuration.
    ///
    /// Only digits from 1 to 9 contribute constraint state. Empty cells and
    /// invalid tokens contribute nothing (see [Validator::validate_cell]).
    pub fn update_cell(&mut self, column: usize, row: usize, new: &CellValue,
            old: &CellValue) {
        if let Some(digit) = old.digit() {
            self.tracker.remove_cell(column, row, digit);
        }

        if let Some(digit) = new.digit() {
            self.tracker.add_cell(column, row, digit);
        }
    }

    /// Checks a cell edit against the tracker and applies it. The old
    /// value's contribution is removed first, then the new value is checked
    /// against the already-updated state, then its contribution is added.
    ///
    /// The result is defined as follows:
    ///
    /// * An empty new value is never itself a conflict; the result is `true`.
    /// * An invalid token (or an out-of-range digit) fails the check; the
    /// result is `false`. Such a value is *not* entered into the tracker:
    /// the tracker counts digits, and a non-digit has no occurrence slot.
    /// Two identical invalid tokens are therefore both flagged individually
    /// rather than as duplicates of each other, and an invalid token never
    /// makes a digit in the same line a conflict.
    /// * A digit is valid if and only if it is not already present in the
    /// cell's row, column, or block. It is added to the tracker in either
    /// case - duplicates are retained deliberately, so that when one of two
    /// colliding digits is later removed, the other is still correctly known
    /// to be present (and is no longer flagged when re-validated).
    pub fn validate_cell(&mut self, column: usize, row: usize,
            new: &CellValue, old: &CellValue) -> bool {
        if let Some(digit) = old.digit() {
            self.tracker.remove_cell(column, row, digit);
        }

        if new.is_empty() {
            return true;
        }

        match new.digit() {
            Some(digit) => {
                let valid = !self.tracker.seen(column, row, digit);
                self.tracker.add_cell(column, row, digit);
                valid
            },
            None => false
        }
    }

    /// Checks every cell of the given board in row-major order and returns
    /// the coordinates of all flagged cells as `(column, row)` pairs, also in
    /// row-major order.
    ///
    /// The tracker is rebuilt during the scan by re-validating each cell's
    /// current value, which makes the result order-sensitive: the first
    /// occurrence of a digit within a shared row, column, or block is valid,
    /// and every later occurrence in scan order is flagged, because the
    /// earlier occurrence has already been entered into the tracker by the
    /// time the later one is checked. Afterwards, the tracker is fully
    /// synchronized with the board.
    pub fn invalid_cells(&mut self, board: &Board) -> Vec<(usize, usize)> {
        self.tracker.clear();
        let mut flagged = Vec::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Ok(cell) = board.get_cell(column, row) {
                    let value = cell.clone();

                    if !self.validate_cell(column, row, &value, &value) {
                        flagged.push((column, row));
                    }
                }
            }
        }

        flagged
    }

    /// Checks whether the entire given board is free of conflicts. This is
    /// the logical AND of the per-cell results of the scan described in
    /// [Validator::invalid_cells]: the board is valid if and only if no cell
    /// was flagged. Calling this method twice without intervening edits
    /// yields the same result and the same set of flagged cells.
    pub fn validate_board(&mut self, board: &Board) -> bool {
        self.invalid_cells(board).is_empty()
    }
}

impl Default for Validator {
    fn default() -> Validator {
        Validator::new()
    }
}
