use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything one reminder email needs: the tax, the names rendered into
/// the body, and the recipient resolved through the owning station.
#[derive(Debug, Clone)]
pub struct NotificationTarget {
    pub tax_id: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub tax_type_name: String,
    pub station_name: String,
    pub user_id: String,
    pub recipient_email: String,
    pub recipient_name: String,
}

/// A rendered email: subject plus HTML and plain-text bodies
#[derive(Debug, Clone, PartialEq)]
pub struct EmailTemplate {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Outcome of a batch send
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationReport {
    pub sent: usize,
    pub failed: usize,
}
