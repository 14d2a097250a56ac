//! First-class move types.
//!
//! A move is a mark placed at a position. Moves are validated by the
//! round before they touch the board, and a rejected move is reported
//! as a [`MoveError`] rather than a panic.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected. The round it was submitted to is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The round already has a winner or is tied.
    #[display("Round is already over")]
    GameOver,

    /// Index is not in 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The acting mark is not the active mark.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
