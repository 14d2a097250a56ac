//! Mark balance invariant: X leads O by zero or one.

use super::super::{Mark, Round, rules};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1, and the active mark
/// derived from the board agrees with that balance.
pub struct MarkBalanceInvariant;

impl Invariant<Round> for MarkBalanceInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);

        let expected = if x == o { Mark::X } else { Mark::O };
        (x == o || x == o + 1) && rules::active_mark(board) == expected
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}
