//! Tie detection.

use super::super::{Board, Cell};
use super::win::winner;
use tracing::instrument;

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A tie is a full board with no winner.
#[instrument(level = "trace")]
pub fn is_tie(board: &Board) -> bool {
    winner(board).is_none() && is_full(board)
}
