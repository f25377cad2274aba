use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::statistics::models::{
    MonthlyBreakdown, StationBreakdown, StatusBreakdown, TaxSummary,
};

/// Aggregation queries backing the statistics dashboard
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    async fn summarize(&self, user_id: &str, year: i32) -> Result<TaxSummary>;
}

pub struct MySqlStatisticsRepository {
    pool: MySqlPool,
}

impl MySqlStatisticsRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatusRow {
    status: String,
    count: i64,
    total_amount: Option<Decimal>,
}

#[derive(Debug, sqlx::FromRow)]
struct StationRow {
    station_id: String,
    station_name: String,
    count: i64,
    total_amount: Option<Decimal>,
}

#[derive(Debug, sqlx::FromRow)]
struct MonthRow {
    month: i32,
    count: i64,
    total_amount: Option<Decimal>,
}

#[async_trait]
impl StatisticsRepository for MySqlStatisticsRepository {
    async fn summarize(&self, user_id: &str, year: i32) -> Result<TaxSummary> {
        let by_status = sqlx::query_as::<_, StatusRow>(
            r#"
            SELECT t.status AS status, COUNT(*) AS count, SUM(t.amount) AS total_amount
            FROM taxes t
            JOIN charge_stations cs ON cs.id = t.charge_station_id
            WHERE cs.user_id = ? AND YEAR(t.due_date) = ?
            GROUP BY t.status
            ORDER BY t.status
            "#,
        )
        .bind(user_id)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        let by_station = sqlx::query_as::<_, StationRow>(
            r#"
            SELECT cs.id AS station_id, cs.name AS station_name,
                   COUNT(*) AS count, SUM(t.amount) AS total_amount
            FROM taxes t
            JOIN charge_stations cs ON cs.id = t.charge_station_id
            WHERE cs.user_id = ? AND YEAR(t.due_date) = ?
            GROUP BY cs.id, cs.name
            ORDER BY total_amount DESC
            "#,
        )
        .bind(user_id)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        let by_month = sqlx::query_as::<_, MonthRow>(
            r#"
            SELECT MONTH(t.due_date) AS month, COUNT(*) AS count, SUM(t.amount) AS total_amount
            FROM taxes t
            JOIN charge_stations cs ON cs.id = t.charge_station_id
            WHERE cs.user_id = ? AND YEAR(t.due_date) = ?
            GROUP BY MONTH(t.due_date)
            ORDER BY month
            "#,
        )
        .bind(user_id)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(TaxSummary {
            year,
            by_status: by_status
                .into_iter()
                .map(|r| StatusBreakdown {
                    status: r.status,
                    count: r.count,
                    total_amount: r.total_amount.unwrap_or_default(),
                })
                .collect(),
            by_station: by_station
                .into_iter()
                .map(|r| StationBreakdown {
                    station_id: r.station_id,
                    station_name: r.station_name,
                    count: r.count,
                    total_amount: r.total_amount.unwrap_or_default(),
                })
                .collect(),
            by_month: by_month
                .into_iter()
                .map(|r| MonthlyBreakdown {
                    month: r.month as u32,
                    count: r.count,
                    total_amount: r.total_amount.unwrap_or_default(),
                })
                .collect(),
        })
    }
}
