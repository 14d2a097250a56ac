//! Outcome consistency: the stored outcome is what the rules say.

use super::super::{Round, rules};
use super::Invariant;

/// Invariant: the round's outcome equals [`rules::evaluate`] of its board.
pub struct OutcomeConsistentInvariant;

impl Invariant<Round> for OutcomeConsistentInvariant {
    fn holds(round: &Round) -> bool {
        round.outcome() == rules::evaluate(round.board())
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}
