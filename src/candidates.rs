//! This module contains the candidate computation for empty cells: the
//! digits not already present in a cell's row, column, or block.
//!
//! Candidates are computed by direct scans of the nine cells of each line on
//! the [Board], independently of the
//! [ConstraintTracker](crate::tracker::ConstraintTracker). The scans only
//! need to know whether a digit is present anywhere in a line right now, so
//! the tracker's duplicate-retention semantics do not apply here.

use crate::{Board, SIZE};
use crate::util::DigitSet;

/// Computes the set of digits that could legally be placed in the cell at
/// the given coordinates: all digits from 1 to 9 that do not occur in the
/// cell's row, column, or block. Cells containing invalid tokens do not
/// exclude any digit.
///
/// The content of the target cell itself is not special-cased; a digit
/// already present there is excluded like any other occurrence in its lines.
/// The solver only queries empty cells, for which this makes no difference.
pub fn legal_candidates(board: &Board, column: usize, row: usize)
        -> DigitSet {
    let mut candidates = DigitSet::full();

    for other_column in 0..SIZE {
        if let Ok(cell) = board.get_cell(other_column, row) {
            if let Some(digit) = cell.digit() {
                candidates.remove(digit);
            }
        }
    }

    for other_row in 0..SIZE {
        if let Ok(cell) = board.get_cell(column, other_row) {
            if let Some(digit) = cell.digit() {
                candidates.remove(digit);
            }
        }
    }

    let block_column = (column / 3) * 3;
    let block_row = (row / 3) * 3;

    for other_row in block_row..(block_row + 3) {
        for other_column in block_column..(block_column + 3) {
            if let Ok(cell) = board.get_cell(other_column, other_row) {
                if let Some(digit) = cell.digit() {
                    candidates.remove(digit);
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::CellValue;

    #[test]
    fn empty_board_allows_all_digits() {
        let board = Board::new();
        let candidates = legal_candidates(&board, 4, 4);

        assert_eq!(9, candidates.len());
    }

    #[test]
    fn row_column_and_block_digits_excluded() {
        let board = Board::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9").unwrap();

        // row 0 contains 5, 3, 7; column 2 contains 8; the top-left block
        // contains 5, 3, 6, 9, 8
        let candidates = legal_candidates(&board, 2, 0);
        let digits: Vec<u8> = candidates.iter().collect();
        assert_eq!(vec![1, 2, 4], digits);
    }

    #[test]
    fn covered_cell_has_no_candidates() {
        let mut board = Board::new();

        // row 0 holds 1 to 8, the 9 is below in column 8
        for column in 0..8 {
            board.set_cell(column, 0, CellValue::Digit(column as u8 + 1))
                .unwrap();
        }

        board.set_cell(8, 1, CellValue::Digit(9)).unwrap();

        let candidates = legal_candidates(&board, 8, 0);
        assert!(candidates.is_empty());
    }

    #[test]
    fn invalid_tokens_exclude_nothing() {
        let mut board = Board::new();
        board.set_cell(0, 0, CellValue::Invalid(String::from("77"))).unwrap();
        board.set_cell(1, 0, CellValue::Invalid(String::from("x"))).unwrap();

        let candidates = legal_candidates(&board, 4, 0);
        assert_eq!(9, candidates.len());
    }

    #[test]
    fn only_shared_lines_matter() {
        let mut board = Board::new();
        board.set_cell(0, 0, CellValue::Digit(5)).unwrap();

        // (4, 4) shares no line with (0, 0)
        let candidates = legal_candidates(&board, 4, 4);
        assert!(candidates.contains(5));

        // (8, 0) shares the row
        assert!(!legal_candidates(&board, 8, 0).contains(5));

        // (0, 8) shares the column
        assert!(!legal_candidates(&board, 0, 8).contains(5));

        // (2, 2) shares the block
        assert!(!legal_candidates(&board, 2, 2).contains(5));
    }
}
