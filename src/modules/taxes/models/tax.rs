use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Krw, Result};
use crate::modules::tax_types::models::TaxType;
use crate::modules::workflow::{StatusWorkflow, StoredStatus, TaxCategory, TaxStatus, OVERDUE_LABEL};

/// A tax obligation tied to one charge station and one tax type.
///
/// `status` carries whatever the store holds (see [`StoredStatus`]);
/// `paid_date` is present exactly while the status is `completed`, and the
/// two fields only ever change together in a single write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tax {
    pub id: String,
    pub charge_station_id: String,
    pub tax_type_id: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: StoredStatus,
    pub paid_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tax {
    /// Create a new tax record; the initial status follows the tax type's
    /// workflow category.
    pub fn new(
        charge_station_id: String,
        tax_type: &TaxType,
        amount: Decimal,
        due_date: NaiveDate,
        description: Option<String>,
    ) -> Result<Self> {
        Krw::validate_amount(amount).map_err(AppError::validation)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            charge_station_id,
            tax_type_id: tax_type.id.clone(),
            amount,
            due_date,
            status: StatusWorkflow::initial_status(tax_type.category).into(),
            paid_date: None,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Derived display state: an unpaid tax whose due date has passed.
    /// Never stored; computed against the KST calendar date at read time.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        let unpaid = self.status.is(TaxStatus::Pending)
            || self.status.is(TaxStatus::AccountantReview);
        unpaid && self.due_date < today
    }

    /// Badge label: the overdue state overrides the stored status label
    pub fn display_label(&self, today: NaiveDate) -> &str {
        if self.is_overdue(today) {
            OVERDUE_LABEL
        } else {
            StatusWorkflow::status_label(&self.status)
        }
    }

    /// The `paid_date` value that must accompany a transition into the
    /// given status. Entering `completed` stamps today's KST date; every
    /// other target clears the field.
    pub fn paid_date_for(target: TaxStatus, today: NaiveDate) -> Option<NaiveDate> {
        (target == TaxStatus::Completed).then_some(today)
    }
}

/// A tax joined with the names its lists and emails render
#[derive(Debug, Clone, Serialize)]
pub struct TaxDetail {
    #[serde(flatten)]
    pub tax: Tax,
    pub station_name: String,
    pub tax_type_name: String,
    pub category: TaxCategory,
}

impl TaxDetail {
    pub fn to_view(&self, today: NaiveDate) -> TaxView {
        TaxView {
            detail: self.clone(),
            status_label: self.tax.display_label(today).to_string(),
            overdue: self.tax.is_overdue(today),
            amount_display: Krw::format(self.tax.amount),
        }
    }
}

/// Response shape for tax reads: the record plus its derived display state
#[derive(Debug, Clone, Serialize)]
pub struct TaxView {
    #[serde(flatten)]
    pub detail: TaxDetail,
    pub status_label: String,
    pub overdue: bool,
    pub amount_display: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaxRequest {
    pub charge_station_id: String,
    pub tax_type_id: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

/// Body of POST /taxes/{id}/transition. Unknown target values are rejected
/// at deserialization; `cancelled` parses but no legality table accepts it.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionRequest {
    pub target: TaxStatus,
}

/// What the presentation layer needs to render workflow affordances
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowView {
    pub status: StoredStatus,
    pub status_label: String,
    pub overdue: bool,
    /// Canonical next status; absent at the terminal state, in which case
    /// the "advance" affordance must be suppressed
    pub next: Option<TaxStatus>,
    /// Every target legal from the current status
    pub allowed: Vec<TaxStatus>,
}
