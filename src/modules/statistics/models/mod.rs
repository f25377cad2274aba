pub mod tax_summary;

pub use tax_summary::{MonthlyBreakdown, StationBreakdown, StatusBreakdown, TaxSummary};
