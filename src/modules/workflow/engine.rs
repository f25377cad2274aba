//! Tax status workflow engine.
//!
//! Two state machines selected by tax category:
//!
//! - acquisition taxes: `accountant_review` → `pending` → `completed`
//! - everything else:   `pending` → `completed`
//!
//! Both machines allow a revert edge out of `completed`, and the
//! acquisition machine allows sending a pending tax back to review.
//! The machines are encoded as static edge tables; every caller that
//! mutates a stored status must pass [`StatusWorkflow::can_transition`]
//! first and refuse on `false`.

use super::classifier::{requires_accountant_review, TaxCategory};
use super::status::TaxStatus::{AccountantReview, Completed, Pending};
use super::status::{StoredStatus, TaxStatus};

/// One workflow variant: its states and edges.
struct Machine {
    category: TaxCategory,
    /// Status a newly created tax starts in; also the fail-safe routing
    /// target for values outside `states`
    initial: TaxStatus,
    /// Statuses this machine has rules for
    states: &'static [TaxStatus],
    /// Canonical forward flow, one edge per non-terminal state
    forward: &'static [(TaxStatus, TaxStatus)],
    /// Every legal `(from, to)` pair, including revert edges
    legal: &'static [(TaxStatus, TaxStatus)],
}

/// Review-required variant for acquisition taxes
static REVIEW_MACHINE: Machine = Machine {
    category: TaxCategory::Acquisition,
    initial: AccountantReview,
    states: &[AccountantReview, Pending, Completed],
    forward: &[(AccountantReview, Pending), (Pending, Completed)],
    legal: &[
        (AccountantReview, Pending),
        (Pending, Completed),
        (Pending, AccountantReview),
        (Completed, Pending),
    ],
};

/// Standard variant for every other tax type
static STANDARD_MACHINE: Machine = Machine {
    category: TaxCategory::Standard,
    initial: Pending,
    states: &[Pending, Completed],
    forward: &[(Pending, Completed)],
    legal: &[(Pending, Completed), (Completed, Pending)],
};

impl Machine {
    fn has_rules_for(&self, status: TaxStatus) -> bool {
        self.states.contains(&status)
    }

    fn next(&self, current: &StoredStatus) -> Option<TaxStatus> {
        match current.as_known() {
            Some(status) if self.has_rules_for(status) => {
                if status == Completed {
                    // terminal: no forward action offered
                    return None;
                }
                self.forward
                    .iter()
                    .find(|(from, _)| *from == status)
                    .map(|(_, to)| *to)
            }
            Some(status) => {
                // recognized value the workflow has no rules for (e.g. a
                // manually set `cancelled`); route back to the start state
                tracing::warn!(
                    status = %status,
                    category = %self.category,
                    "tax status outside workflow authority; routing to start state"
                );
                Some(self.initial)
            }
            None => {
                tracing::warn!(
                    status = %current,
                    category = %self.category,
                    "unrecognized stored tax status; routing to start state"
                );
                Some(self.initial)
            }
        }
    }

    fn allows(&self, current: &StoredStatus, target: TaxStatus) -> bool {
        match current.as_known() {
            Some(status) if self.has_rules_for(status) => {
                self.legal.contains(&(status, target))
            }
            // from any other value only the start state is reachable
            _ => target == self.initial,
        }
    }
}

fn machine_for(category: TaxCategory) -> &'static Machine {
    if requires_accountant_review(category) {
        &REVIEW_MACHINE
    } else {
        &STANDARD_MACHINE
    }
}

/// The workflow engine. Pure and stateless; safe to call from any number
/// of concurrent callers.
pub struct StatusWorkflow;

impl StatusWorkflow {
    /// Status a newly created tax record starts in
    pub fn initial_status(category: TaxCategory) -> TaxStatus {
        machine_for(category).initial
    }

    /// Canonical next status in the forward flow, or `None` when the
    /// current status is terminal. Total over arbitrary stored values:
    /// anything outside the machine routes back to its start state.
    pub fn next_status(current: &StoredStatus, category: TaxCategory) -> Option<TaxStatus> {
        machine_for(category).next(current)
    }

    /// Whether an arbitrary requested transition is legal. This is the
    /// single workflow gate for status mutations; callers must refuse the
    /// write when it returns `false`.
    pub fn can_transition(
        current: &StoredStatus,
        target: TaxStatus,
        category: TaxCategory,
    ) -> bool {
        machine_for(category).allows(current, target)
    }

    /// Statuses the given category's workflow has rules for
    pub fn states(category: TaxCategory) -> &'static [TaxStatus] {
        machine_for(category).states
    }

    /// Targets legal from the given status, in workflow order
    pub fn allowed_targets(current: &StoredStatus, category: TaxCategory) -> Vec<TaxStatus> {
        let machine = machine_for(category);
        machine
            .states
            .iter()
            .copied()
            .filter(|target| machine.allows(current, *target))
            .collect()
    }

    /// Presentation label for a stored status; echoes the raw value for
    /// anything unrecognized. Not authoritative for logic.
    pub fn status_label(status: &StoredStatus) -> &str {
        match status {
            StoredStatus::Known(known) => known.label(),
            StoredStatus::Unrecognized(raw) => raw,
        }
    }
}
