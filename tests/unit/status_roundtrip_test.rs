// Serialization and labeling checks for the status types: the storage
// strings, JSON representation and presentation labels must all agree.

use chargetax::modules::workflow::{StatusWorkflow, StoredStatus, TaxStatus, OVERDUE_LABEL};

#[test]
fn storage_strings_round_trip() {
    for status in TaxStatus::ALL {
        assert_eq!(TaxStatus::parse(status.as_str()), Some(status));
        assert_eq!(StoredStatus::from(status.as_str()), StoredStatus::Known(status));
    }
}

#[test]
fn json_representation_matches_storage_strings() {
    for status in TaxStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));

        let back: TaxStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn stored_status_serializes_raw_values_verbatim() {
    let stored = StoredStatus::from("overdue");
    assert_eq!(serde_json::to_string(&stored).unwrap(), "\"overdue\"");

    let parsed: StoredStatus = serde_json::from_str("\"pending\"").unwrap();
    assert_eq!(parsed, StoredStatus::Known(TaxStatus::Pending));

    let unknown: StoredStatus = serde_json::from_str("\"mystery\"").unwrap();
    assert_eq!(unknown, StoredStatus::Unrecognized("mystery".to_string()));
}

#[test]
fn labels_cover_workflow_statuses_and_echo_the_rest() {
    assert_eq!(
        StatusWorkflow::status_label(&StoredStatus::Known(TaxStatus::Pending)),
        "납부예정"
    );
    assert_eq!(
        StatusWorkflow::status_label(&StoredStatus::Known(TaxStatus::Completed)),
        "납부완료"
    );
    assert_eq!(
        StatusWorkflow::status_label(&StoredStatus::Known(TaxStatus::AccountantReview)),
        "회계사검토"
    );

    // outside the workflow's vocabulary: echoed as stored
    assert_eq!(
        StatusWorkflow::status_label(&StoredStatus::Known(TaxStatus::Cancelled)),
        "cancelled"
    );
    assert_eq!(StatusWorkflow::status_label(&StoredStatus::from("weird")), "weird");

    assert_eq!(OVERDUE_LABEL, "연체");
}

#[test]
fn transition_request_rejects_unknown_targets() {
    use chargetax::modules::taxes::models::TransitionRequest;

    let ok: TransitionRequest = serde_json::from_str(r#"{ "target": "completed" }"#).unwrap();
    assert_eq!(ok.target, TaxStatus::Completed);

    // unknown targets never reach the legality gate
    assert!(serde_json::from_str::<TransitionRequest>(r#"{ "target": "paid" }"#).is_err());
}
