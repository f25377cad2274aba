use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Korea Standard Time handling.
///
/// All timestamps are stored as UTC. Due dates and paid dates are calendar
/// dates in KST (UTC+9): whether a tax is overdue, and which date a payment
/// is recorded under, follow the Korean calendar day rather than the UTC one.
pub struct Kst;

impl Kst {
    /// Fixed offset for Asia/Seoul (no DST)
    pub fn offset() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).expect("valid KST offset")
    }

    /// Convert a UTC timestamp to KST
    pub fn from_utc(utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&Self::offset())
    }

    /// The current calendar date in KST
    pub fn today() -> NaiveDate {
        Self::from_utc(Utc::now()).date_naive()
    }

    /// The KST calendar date of a UTC timestamp
    pub fn date_of(utc_time: DateTime<Utc>) -> NaiveDate {
        Self::from_utc(utc_time).date_naive()
    }

    /// Format a date the way it is rendered in notification emails,
    /// e.g. `2024. 2. 15.`
    pub fn format_date(date: NaiveDate) -> String {
        use chrono::Datelike;
        format!("{}. {}. {}.", date.year(), date.month(), date.day())
    }
}
