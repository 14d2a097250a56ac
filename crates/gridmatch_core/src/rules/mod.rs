//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from
//! board storage so the round, the opponent and the invariants can
//! all evaluate the same board the same way.

pub mod moves;
pub mod tie;
pub mod win;

pub use moves::{active_mark, legal_moves};
pub use tie::{is_full, is_tie};
pub use win::{LINES, winner};

use super::{Board, Outcome};

/// Evaluates the outcome of a board. Winner takes precedence over tie.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Tied
    } else {
        Outcome::InProgress
    }
}
