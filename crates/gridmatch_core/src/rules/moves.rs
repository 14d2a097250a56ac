//! Legal moves and turn ownership.

use super::super::{Board, Mark, Position};

/// Empty positions in ascending index order.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

/// The mark to move next: X on an even number of occupied cells, O on odd.
///
/// Assumes marks were placed one per turn, alternating from X.
pub fn active_mark(board: &Board) -> Mark {
    if board.occupied() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}
