//! Gridmatch core - tic-tac-toe rules and round lifecycle
//!
//! Pure, synchronous game logic with no I/O. A presentation layer drives
//! it by calling [`Session`] operations and rendering the values they
//! return.
//!
//! # Architecture
//!
//! - **Board**: nine [`Cell`]s in row-major order, addressed by [`Position`]
//! - **Rules**: winner, tie, legal moves and turn ownership ([`rules`])
//! - **Opponent**: greedy win / block / random move choice ([`opponent`])
//! - **Round**: immutable snapshots with contract-checked transitions ([`Round`])
//! - **Session**: rounds, mode and score ([`Session`])
//!
//! # Example
//!
//! ```
//! use gridmatch_core::{Mark, Outcome, Session};
//!
//! let mut session = Session::new().start_round();
//! for index in [0, 4, 1, 5, 2] {
//!     session = session.submit_move(index).expect("legal move");
//! }
//! assert_eq!(session.outcome(), Some(Outcome::Won(Mark::X)));
//! assert_eq!(*session.score().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
pub mod opponent;
mod position;
mod round;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeConsistentInvariant, RoundInvariants,
};
pub use opponent::{GreedyOpponent, choose_move, choose_move_with};
pub use position::Position;
pub use round::{Round, RoundId};
pub use session::{Mode, Score, Session, SessionError};
pub use types::{Board, Cell, Mark, Outcome};
