//! Win detection.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

const fn line(a: usize, b: usize, c: usize) -> [Position; 3] {
    [Position::ALL[a], Position::ALL[b], Position::ALL[c]]
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

/// Returns the mark owning the first fully-owned line in [`LINES`] order.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        if let Cell::Occupied(mark) = board.get(a)
            && board.get(b) == Cell::Occupied(mark)
            && board.get(c) == Cell::Occupied(mark)
        {
            return Some(mark);
        }
    }

    None
}
