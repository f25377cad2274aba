use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow category of a tax type.
///
/// Acquisition-tax filings legally require accountant sign-off before they
/// may be marked payable; every other tax type (property tax, value-added
/// tax, ...) skips that gate. The category is computed from the tax-type
/// name whenever the name is created or edited, and stored alongside it,
/// rather than re-derived by substring matching on every workflow call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    Acquisition,
    Standard,
}

impl TaxCategory {
    /// Classify a tax-type name.
    ///
    /// A name marks an acquisition tax when it contains "취득세", or the
    /// English fallback "acquisition" in any letter case. An empty name is
    /// a standard tax.
    pub fn from_name(name: &str) -> TaxCategory {
        if name.contains("취득세") || name.to_lowercase().contains("acquisition") {
            TaxCategory::Acquisition
        } else {
            TaxCategory::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCategory::Acquisition => "acquisition",
            TaxCategory::Standard => "standard",
        }
    }

    pub fn parse(s: &str) -> Option<TaxCategory> {
        match s {
            "acquisition" => Some(TaxCategory::Acquisition),
            "standard" => Some(TaxCategory::Standard),
            _ => None,
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether taxes of this category pass through the accountant-review gate
pub fn requires_accountant_review(category: TaxCategory) -> bool {
    category == TaxCategory::Acquisition
}
