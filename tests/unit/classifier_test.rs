// Property tests for the tax-type classifier and its coupling to the
// workflow's initial status.

use proptest::prelude::*;

use chargetax::modules::tax_types::models::TaxType;
use chargetax::modules::workflow::{
    requires_accountant_review, StatusWorkflow, TaxCategory, TaxStatus,
};

#[test]
fn known_tax_type_names_classify_correctly() {
    let acquisition = ["취득세", "부동산 취득세", "Acquisition Tax", "ACQUISITION"];
    for name in acquisition {
        assert_eq!(TaxCategory::from_name(name), TaxCategory::Acquisition, "{}", name);
    }

    let standard = ["재산세", "부가가치세", "자동차세", "Property Tax", "VAT", ""];
    for name in standard {
        assert_eq!(TaxCategory::from_name(name), TaxCategory::Standard, "{}", name);
    }
}

#[test]
fn initial_status_follows_the_classifier() {
    assert_eq!(
        StatusWorkflow::initial_status(TaxCategory::Acquisition),
        TaxStatus::AccountantReview
    );
    assert_eq!(
        StatusWorkflow::initial_status(TaxCategory::Standard),
        TaxStatus::Pending
    );
}

#[test]
fn stored_category_survives_model_roundtrip() {
    let tax_type = TaxType::new("서울 취득세".to_string(), None, None).unwrap();
    assert!(tax_type.requires_accountant_review());

    let mut renamed = tax_type.clone();
    renamed.apply("재산세".to_string(), None, None).unwrap();
    assert!(!renamed.requires_accountant_review());
}

proptest! {
    /// Any name containing the Korean marker is an acquisition tax,
    /// regardless of what surrounds it.
    #[test]
    fn korean_marker_always_wins(prefix in "[가-힣a-z ]{0,12}", suffix in "[가-힣a-z ]{0,12}") {
        let name = format!("{}취득세{}", prefix, suffix);
        prop_assert_eq!(TaxCategory::from_name(&name), TaxCategory::Acquisition);
        prop_assert!(requires_accountant_review(TaxCategory::from_name(&name)));
    }

    /// The English marker matches in any letter case.
    #[test]
    fn english_marker_is_case_insensitive(mask in proptest::collection::vec(any::<bool>(), 11)) {
        let name: String = "acquisition"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(TaxCategory::from_name(&name), TaxCategory::Acquisition);
    }

    /// Names free of both markers never require review.
    #[test]
    fn unmarked_names_are_standard(name in "[가-힣0-9 ]{0,24}") {
        prop_assume!(!name.contains("취득세"));
        prop_assert_eq!(TaxCategory::from_name(&name), TaxCategory::Standard);
    }
}
