// Transition flows through the tax service and the in-memory store:
// workflow gating, the paid_date invariant, and the compare-and-swap
// write discipline.

#[path = "../support/mod.rs"]
mod support;

use std::sync::atomic::Ordering;

use rust_decimal_macros::dec;

use chargetax::core::{AppError, Kst};
use chargetax::modules::taxes::models::CreateTaxRequest;
use chargetax::modules::workflow::{StoredStatus, TaxStatus};
use support::{acquisition_type, date, harness, property_type, seeded_detail, OWNER_ID};

#[tokio::test]
async fn acquisition_tax_walks_the_review_workflow() {
    let acquisition = acquisition_type();
    let h = harness(vec![acquisition.clone()]);

    let created = h
        .state
        .taxes
        .create_tax(
            CreateTaxRequest {
                charge_station_id: "station-1".to_string(),
                tax_type_id: acquisition.id.clone(),
                amount: dec!(1650000),
                due_date: date(2024, 2, 15),
                description: Some("법인 차량 취득".to_string()),
            },
            OWNER_ID,
        )
        .await
        .unwrap();

    // created in the review gate, not yet payable
    assert!(created.detail.tax.status.is(TaxStatus::AccountantReview));
    assert_eq!(created.detail.tax.paid_date, None);
    assert_eq!(created.amount_display, "₩1,650,000");

    let id = created.detail.tax.id.clone();

    // review sign-off
    let view = h.state.taxes.workflow_view(&id, OWNER_ID).await.unwrap();
    assert_eq!(view.next, Some(TaxStatus::Pending));
    let advanced = h.state.taxes.advance(&id, OWNER_ID).await.unwrap();
    assert!(advanced.detail.tax.status.is(TaxStatus::Pending));
    assert_eq!(advanced.detail.tax.paid_date, None);

    // payment
    let paid = h.state.taxes.advance(&id, OWNER_ID).await.unwrap();
    assert!(paid.detail.tax.status.is(TaxStatus::Completed));
    assert_eq!(paid.detail.tax.paid_date, Some(Kst::today()));

    // terminal: no further forward step
    let view = h.state.taxes.workflow_view(&id, OWNER_ID).await.unwrap();
    assert_eq!(view.next, None);
    let err = h.state.taxes.advance(&id, OWNER_ID).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // revert clears the paid date in the same write
    let reverted = h
        .state
        .taxes
        .transition(&id, OWNER_ID, TaxStatus::Pending)
        .await
        .unwrap();
    assert!(reverted.detail.tax.status.is(TaxStatus::Pending));
    assert_eq!(reverted.detail.tax.paid_date, None);

    // re-pay: round trip ends completed with a fresh paid date
    let repaid = h
        .state
        .taxes
        .transition(&id, OWNER_ID, TaxStatus::Completed)
        .await
        .unwrap();
    assert!(repaid.detail.tax.status.is(TaxStatus::Completed));
    assert_eq!(repaid.detail.tax.paid_date, Some(Kst::today()));
}

#[tokio::test]
async fn property_tax_skips_review_and_cannot_enter_it() {
    let property = property_type();
    let h = harness(vec![property.clone()]);

    let created = h
        .state
        .taxes
        .create_tax(
            CreateTaxRequest {
                charge_station_id: "station-1".to_string(),
                tax_type_id: property.id.clone(),
                amount: dec!(300000),
                due_date: date(2024, 6, 30),
                description: None,
            },
            OWNER_ID,
        )
        .await
        .unwrap();

    // no review step for standard taxes
    assert!(created.detail.tax.status.is(TaxStatus::Pending));
    let id = created.detail.tax.id.clone();

    let view = h.state.taxes.workflow_view(&id, OWNER_ID).await.unwrap();
    assert_eq!(view.next, Some(TaxStatus::Completed));
    assert_eq!(view.allowed, vec![TaxStatus::Completed]);

    // the review state is unreachable even if requested explicitly
    let err = h
        .state
        .taxes
        .transition(&id, OWNER_ID, TaxStatus::AccountantReview)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // rejected transition left the record untouched
    let detail = h.taxes.get(&id).unwrap();
    assert!(detail.tax.status.is(TaxStatus::Pending));
    assert_eq!(detail.tax.paid_date, None);
}

#[tokio::test]
async fn cancelled_is_never_an_accepted_target() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        TaxStatus::Pending.into(),
        dec!(100000),
        date(2024, 6, 30),
        None,
    ));

    let err = h
        .state
        .taxes
        .transition("tax-1", OWNER_ID, TaxStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(h.taxes.get("tax-1").unwrap().tax.status.is(TaxStatus::Pending));
}

#[tokio::test]
async fn lost_cas_race_surfaces_as_conflict() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        TaxStatus::Pending.into(),
        dec!(100000),
        date(2024, 6, 30),
        None,
    ));

    h.taxes.fail_next_cas.store(true, Ordering::SeqCst);
    let err = h.state.taxes.advance("tax-1", OWNER_ID).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // nothing was written
    let detail = h.taxes.get("tax-1").unwrap();
    assert!(detail.tax.status.is(TaxStatus::Pending));
    assert_eq!(detail.tax.paid_date, None);

    // a retry from a fresh read succeeds
    let paid = h.state.taxes.advance("tax-1", OWNER_ID).await.unwrap();
    assert!(paid.detail.tax.status.is(TaxStatus::Completed));
}

#[tokio::test]
async fn corrupt_stored_status_self_heals_through_the_workflow() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        StoredStatus::from(""),
        dec!(100000),
        date(2024, 6, 30),
        None,
    ));

    // the defensive default points the record back at the machine start
    let view = h.state.taxes.workflow_view("tax-1", OWNER_ID).await.unwrap();
    assert_eq!(view.next, Some(TaxStatus::Pending));
    assert_eq!(view.allowed, vec![TaxStatus::Pending]);

    // completing directly is refused; only the start state is reachable
    let err = h
        .state
        .taxes
        .transition("tax-1", OWNER_ID, TaxStatus::Completed)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let healed = h.state.taxes.advance("tax-1", OWNER_ID).await.unwrap();
    assert!(healed.detail.tax.status.is(TaxStatus::Pending));
}

#[tokio::test]
async fn reads_are_scoped_to_the_owner() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        TaxStatus::Pending.into(),
        dec!(100000),
        date(2024, 6, 30),
        None,
    ));

    let err = h
        .state
        .taxes
        .get_tax("tax-1", "someone-else")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn search_matches_station_type_and_description() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        TaxStatus::Pending.into(),
        dec!(100000),
        date(2024, 6, 30),
        None,
    ));

    let by_type = h.state.taxes.search_taxes(OWNER_ID, "재산세").await.unwrap();
    assert_eq!(by_type.len(), 1);

    let by_station = h.state.taxes.search_taxes(OWNER_ID, "강남").await.unwrap();
    assert_eq!(by_station.len(), 1);

    let none = h.state.taxes.search_taxes(OWNER_ID, "없는검색어").await.unwrap();
    assert!(none.is_empty());
}
