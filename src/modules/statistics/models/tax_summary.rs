use rust_decimal::Decimal;
use serde::Serialize;

/// Count and won total for one stored status value
#[derive(Debug, Clone, Serialize)]
pub struct StatusBreakdown {
    pub status: String,
    pub count: i64,
    pub total_amount: Decimal,
}

/// Count and won total for one charge station
#[derive(Debug, Clone, Serialize)]
pub struct StationBreakdown {
    pub station_id: String,
    pub station_name: String,
    pub count: i64,
    pub total_amount: Decimal,
}

/// Count and won total for taxes due in one month of the requested year
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBreakdown {
    pub month: u32,
    pub count: i64,
    pub total_amount: Decimal,
}

/// Dashboard aggregate for one user and one year
#[derive(Debug, Clone, Serialize)]
pub struct TaxSummary {
    pub year: i32,
    pub by_status: Vec<StatusBreakdown>,
    pub by_station: Vec<StationBreakdown>,
    pub by_month: Vec<MonthlyBreakdown>,
}
