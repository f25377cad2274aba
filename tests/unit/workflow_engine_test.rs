// Exhaustive checks of the status workflow tables: every (category,
// current, target) combination is compared against the edges the workflow
// is specified to allow, so an accidental extra or missing edge fails
// loudly rather than surfacing as a mystery in production.

use proptest::prelude::*;

use chargetax::modules::workflow::TaxStatus::{AccountantReview, Cancelled, Completed, Pending};
use chargetax::modules::workflow::{StatusWorkflow, StoredStatus, TaxCategory, TaxStatus};

/// Every current-status shape worth testing: the three workflow states,
/// the legacy `cancelled`, and two corrupt stored values.
fn current_statuses() -> Vec<StoredStatus> {
    vec![
        StoredStatus::Known(AccountantReview),
        StoredStatus::Known(Pending),
        StoredStatus::Known(Completed),
        StoredStatus::Known(Cancelled),
        StoredStatus::from(""),
        StoredStatus::from("overdue"),
    ]
}

/// The complete legal edge set for a category. Anything not listed here,
/// plus the from-outside-the-machine fallback, must be rejected.
fn legal_edges(category: TaxCategory) -> Vec<(TaxStatus, TaxStatus)> {
    match category {
        TaxCategory::Acquisition => vec![
            (AccountantReview, Pending),
            (Pending, Completed),
            (Pending, AccountantReview),
            (Completed, Pending),
        ],
        TaxCategory::Standard => vec![(Pending, Completed), (Completed, Pending)],
    }
}

fn machine_states(category: TaxCategory) -> Vec<TaxStatus> {
    match category {
        TaxCategory::Acquisition => vec![AccountantReview, Pending, Completed],
        TaxCategory::Standard => vec![Pending, Completed],
    }
}

#[test]
fn legality_grid_is_exactly_the_specified_edges() {
    let mut combinations = 0;

    for category in [TaxCategory::Acquisition, TaxCategory::Standard] {
        let edges = legal_edges(category);
        let states = machine_states(category);
        let initial = StatusWorkflow::initial_status(category);

        for current in current_statuses() {
            for target in TaxStatus::ALL {
                combinations += 1;

                let in_machine = current
                    .as_known()
                    .map(|s| states.contains(&s))
                    .unwrap_or(false);

                let expected = if in_machine {
                    edges.contains(&(current.as_known().unwrap(), target))
                } else {
                    // from any other value only the start state is reachable
                    target == initial
                };

                assert_eq!(
                    StatusWorkflow::can_transition(&current, target, category),
                    expected,
                    "category={:?} current={} target={}",
                    category,
                    current,
                    target
                );
            }
        }
    }

    // 2 categories x 6 current shapes x 4 targets
    assert_eq!(combinations, 48);
}

#[test]
fn no_status_is_legal_to_itself() {
    for category in [TaxCategory::Acquisition, TaxCategory::Standard] {
        for status in TaxStatus::ALL {
            assert!(
                !StatusWorkflow::can_transition(&StoredStatus::Known(status), status, category),
                "self-loop allowed for {:?} under {:?}",
                status,
                category
            );
        }
    }
}

#[test]
fn forward_flow_matches_the_tables() {
    let acq = TaxCategory::Acquisition;
    assert_eq!(
        StatusWorkflow::next_status(&StoredStatus::Known(AccountantReview), acq),
        Some(Pending)
    );
    assert_eq!(
        StatusWorkflow::next_status(&StoredStatus::Known(Pending), acq),
        Some(Completed)
    );
    assert_eq!(StatusWorkflow::next_status(&StoredStatus::Known(Completed), acq), None);

    let std = TaxCategory::Standard;
    assert_eq!(
        StatusWorkflow::next_status(&StoredStatus::Known(Pending), std),
        Some(Completed)
    );
    assert_eq!(StatusWorkflow::next_status(&StoredStatus::Known(Completed), std), None);
    // accountant_review has no rules in the standard machine
    assert_eq!(
        StatusWorkflow::next_status(&StoredStatus::Known(AccountantReview), std),
        Some(Pending)
    );
}

#[test]
fn next_status_is_always_a_legal_transition() {
    // whatever the forward table proposes, the legality table must accept
    for category in [TaxCategory::Acquisition, TaxCategory::Standard] {
        for current in current_statuses() {
            if let Some(next) = StatusWorkflow::next_status(&current, category) {
                assert!(
                    StatusWorkflow::can_transition(&current, next, category),
                    "forward step {} -> {} rejected by legality table ({:?})",
                    current,
                    next,
                    category
                );
            }
        }
    }
}

#[test]
fn corrupted_status_routes_to_machine_start() {
    let corrupt = StoredStatus::from("");
    assert_eq!(
        StatusWorkflow::next_status(&corrupt, TaxCategory::Standard),
        Some(Pending)
    );
    assert!(StatusWorkflow::can_transition(&corrupt, Pending, TaxCategory::Standard));
    assert!(!StatusWorkflow::can_transition(&corrupt, Completed, TaxCategory::Standard));

    assert_eq!(
        StatusWorkflow::next_status(&corrupt, TaxCategory::Acquisition),
        Some(AccountantReview)
    );
}

#[test]
fn terminal_state_offers_no_forward_action() {
    for category in [TaxCategory::Acquisition, TaxCategory::Standard] {
        assert_eq!(
            StatusWorkflow::next_status(&StoredStatus::Known(Completed), category),
            None
        );
    }
}

#[test]
fn allowed_targets_never_include_cancelled() {
    for category in [TaxCategory::Acquisition, TaxCategory::Standard] {
        for current in current_statuses() {
            let allowed = StatusWorkflow::allowed_targets(&current, category);
            assert!(!allowed.contains(&Cancelled));
        }
    }
}

proptest! {
    /// Arbitrary stored garbage behaves exactly like the specified
    /// "unknown value" row of each machine.
    #[test]
    fn arbitrary_unknown_statuses_route_to_start(raw in "[a-z_]{0,24}") {
        prop_assume!(TaxStatus::parse(&raw).is_none());
        let stored = StoredStatus::from(raw.as_str());

        for category in [TaxCategory::Acquisition, TaxCategory::Standard] {
            let initial = StatusWorkflow::initial_status(category);
            prop_assert_eq!(StatusWorkflow::next_status(&stored, category), Some(initial));

            for target in TaxStatus::ALL {
                prop_assert_eq!(
                    StatusWorkflow::can_transition(&stored, target, category),
                    target == initial
                );
            }
        }
    }
}
