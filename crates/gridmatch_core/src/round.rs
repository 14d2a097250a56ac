//! Round state machine.
//!
//! A [`Round`] is an immutable snapshot: `submit_move` borrows the
//! current round and returns a brand-new one, so earlier snapshots stay
//! valid and history is never rewritten.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, RoundInProgress};
use super::{Board, Mark, Outcome, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Identity of a round within a session.
///
/// Used to tell whether a delayed automated move was computed against
/// the round that is still current.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{}", _0)]
pub struct RoundId(u64);

impl RoundId {
    /// The id of a session's first round.
    pub const FIRST: RoundId = RoundId(1);

    /// The id following this one.
    pub fn next(self) -> Self {
        RoundId(self.0 + 1)
    }

    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One playthrough from an empty board to a terminal outcome.
///
/// The mark to move is not stored; it is derived from the board so it
/// can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    pub(crate) board: Board,
    pub(crate) outcome: Outcome,
    history: Vec<Move>,
}

impl Round {
    /// Creates a fresh round: empty board, X to move, in progress.
    #[instrument]
    pub fn new(id: RoundId) -> Self {
        Self {
            id,
            board: Board::new(),
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the round's identity.
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark whose turn it is.
    pub fn active_mark(&self) -> Mark {
        rules::active_mark(&self.board)
    }

    /// Returns true once the round is won or tied.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Empty positions, ascending.
    pub fn legal_moves(&self) -> Vec<Position> {
        rules::legal_moves(&self.board)
    }

    /// Places `acting` at board index `index`, returning the next round.
    ///
    /// Rejected, in this order, when the round is terminal, the index is
    /// outside 0-8, the square is taken, or `acting` is not the active mark.
    /// On rejection `self` is unchanged.
    #[instrument(skip(self), fields(round_id = %self.id))]
    pub fn submit_move(&self, index: usize, acting: Mark) -> Result<Round, MoveError> {
        RoundInProgress::check(self).inspect_err(|_| {
            warn!(index, %acting, outcome = %self.outcome, "Move on finished round rejected");
        })?;

        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, %acting, "Move out of range rejected");
            MoveError::OutOfRange(index)
        })?;

        let action = Move::new(acting, position);
        MoveContract::pre(self, &action).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let board = self.board.with_mark(position, acting);
        let mut history = self.history.clone();
        history.push(action);

        // Winner is checked before tie inside evaluate.
        let outcome = rules::evaluate(&board);

        let next = Round {
            id: self.id,
            board,
            outcome,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        if outcome.is_terminal() {
            info!(%action, %outcome, "Round finished");
        } else {
            debug!(%action, next = %next.active_mark(), "Move applied");
        }

        Ok(next)
    }

    /// Rebuilds a round from positions played alternately starting with X.
    #[instrument]
    pub fn replay(id: RoundId, positions: &[Position]) -> Result<Round, MoveError> {
        positions.iter().try_fold(Round::new(id), |round, pos| {
            let mark = round.active_mark();
            round.submit_move(pos.to_index(), mark)
        })
    }
}
