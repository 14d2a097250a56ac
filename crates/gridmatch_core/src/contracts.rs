//! Contract-based move validation.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::Round;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the round has not reached a terminal outcome.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects with [`MoveError::GameOver`] on a terminal round.
    pub fn check(round: &Round) -> Result<(), MoveError> {
        if round.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`MoveError::SquareOccupied`] on a taken square.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if round.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the acting mark is the active mark.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects with [`MoveError::WrongPlayer`] when moving out of turn.
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if mov.mark == round.active_mark() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.mark))
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in rejection order.
    #[instrument(level = "debug", skip(round), fields(round_id = %round.id()))]
    pub fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        RoundInProgress::check(round)?;
        SquareIsEmpty::check(mov, round)?;
        PlayersTurn::check(mov, round)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Preconditions: round in progress, square empty, acting mark's turn.
/// Postconditions: every [`RoundInvariants`] member holds and the
/// new round extends the old history by exactly one move.
pub struct MoveContract;

impl Contract<Round, Move> for MoveContract {
    fn pre(round: &Round, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1
            || !after.history().starts_with(before.history())
        {
            warn!(round_id = %after.id(), "History did not grow by one move");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(round_id = %after.id(), %descriptions, "Round invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
