use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a tax record.
///
/// `AccountantReview`, `Pending` and `Completed` are produced by the
/// workflow. `Cancelled` exists in stored data and badge rendering but is
/// never produced nor accepted by the workflow; it is carried here so the
/// transition tables can match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxStatus {
    AccountantReview,
    Pending,
    Completed,
    Cancelled,
}

/// Display label for the derived overdue state (never stored)
pub const OVERDUE_LABEL: &str = "연체";

impl TaxStatus {
    pub const ALL: [TaxStatus; 4] = [
        TaxStatus::AccountantReview,
        TaxStatus::Pending,
        TaxStatus::Completed,
        TaxStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxStatus::AccountantReview => "accountant_review",
            TaxStatus::Pending => "pending",
            TaxStatus::Completed => "completed",
            TaxStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a stored status value. Returns `None` for anything outside the
    /// recognized set; callers decide how to route unrecognized values.
    pub fn parse(s: &str) -> Option<TaxStatus> {
        match s {
            "accountant_review" => Some(TaxStatus::AccountantReview),
            "pending" => Some(TaxStatus::Pending),
            "completed" => Some(TaxStatus::Completed),
            "cancelled" => Some(TaxStatus::Cancelled),
            _ => None,
        }
    }

    /// Human-facing label, as rendered in lists and notification emails
    pub fn label(&self) -> &'static str {
        match self {
            TaxStatus::AccountantReview => "회계사검토",
            TaxStatus::Pending => "납부예정",
            TaxStatus::Completed => "납부완료",
            // outside the workflow's authority; echoed as stored
            TaxStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaxStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TaxStatus::parse(s).ok_or_else(|| format!("Invalid tax status: {}", s))
    }
}

/// A status value exactly as the store holds it.
///
/// Writes only ever persist recognized values, but reads must tolerate
/// whatever is actually in the column (legacy values, manual edits). The
/// raw text is preserved so the display layer can echo it and the workflow
/// can route it back to a start state instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredStatus {
    Known(TaxStatus),
    Unrecognized(String),
}

impl StoredStatus {
    pub fn as_known(&self) -> Option<TaxStatus> {
        match self {
            StoredStatus::Known(status) => Some(*status),
            StoredStatus::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StoredStatus::Known(status) => status.as_str(),
            StoredStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn is(&self, status: TaxStatus) -> bool {
        self.as_known() == Some(status)
    }
}

impl From<TaxStatus> for StoredStatus {
    fn from(status: TaxStatus) -> Self {
        StoredStatus::Known(status)
    }
}

impl From<String> for StoredStatus {
    fn from(raw: String) -> Self {
        match TaxStatus::parse(&raw) {
            Some(status) => StoredStatus::Known(status),
            None => StoredStatus::Unrecognized(raw),
        }
    }
}

impl From<&str> for StoredStatus {
    fn from(raw: &str) -> Self {
        StoredStatus::from(raw.to_string())
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StoredStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StoredStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StoredStatus::from(raw))
    }
}
