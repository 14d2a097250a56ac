//! History consistency: the move log explains the board exactly.

use super::super::{Cell, Mark, Round};
use super::Invariant;

/// Invariant: history length equals occupied cells, marks alternate
/// from X, and every logged move is present on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if history.len() != round.board().occupied() {
            return false;
        }

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        history
            .iter()
            .all(|m| round.board().get(m.position) == Cell::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "Move history alternates from X and matches the board"
    }
}
