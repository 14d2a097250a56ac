//! Round invariants.
//!
//! Properties every reachable [`Round`](crate::Round) satisfies. The
//! round checks them after each move in debug builds; tests can check
//! them directly.

/// A property of a state `S`.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Which property failed.
    pub description: String,
}

impl InvariantViolation {
    /// Records a failed property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as one. Implemented for tuples of up to
/// three members.
pub trait InvariantSet<S> {
    /// Checks every member and reports all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! invariant_tuple {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let failed: Vec<InvariantViolation> = [
                    $(($member::holds(state), $member::description()),)+
                ]
                .into_iter()
                .filter(|(ok, _)| !ok)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if failed.is_empty() { Ok(()) } else { Err(failed) }
            }
        }
    };
}

invariant_tuple!(A);
invariant_tuple!(A, B);
invariant_tuple!(A, B, C);

pub mod history_consistent;
pub mod mark_balance;
pub mod outcome_consistent;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All round invariants as a composable set.
pub type RoundInvariants = (
    MarkBalanceInvariant,
    HistoryConsistentInvariant,
    OutcomeConsistentInvariant,
);
