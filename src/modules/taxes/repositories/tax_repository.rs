use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::notifications::models::NotificationTarget;
use crate::modules::taxes::models::{Tax, TaxDetail};
use crate::modules::workflow::{StoredStatus, TaxCategory, TaxStatus};

/// Repository for tax records.
///
/// Status writes go through [`update_status_cas`](TaxRepository::update_status_cas)
/// only: the update is conditioned on the status the caller read, so two
/// admins racing different transitions cannot both win, and `paid_date`
/// always travels in the same statement as the status it belongs to.
#[async_trait]
pub trait TaxRepository: Send + Sync {
    async fn create(&self, tax: &Tax) -> Result<()>;

    async fn find_detail(&self, id: &str, user_id: &str) -> Result<Option<TaxDetail>>;

    /// Taxes across the user's stations, soonest due first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<TaxDetail>>;

    /// Substring search over description, station name and tax-type name
    async fn search(&self, user_id: &str, query: &str) -> Result<Vec<TaxDetail>>;

    async fn delete(&self, id: &str, user_id: &str) -> Result<()>;

    /// Compare-and-swap status update. Writes `status` and `paid_date`
    /// atomically, conditioned on the status still being `expected`.
    /// Returns `false` when the record changed since it was read (or no
    /// longer exists); the caller re-reads and revalidates.
    async fn update_status_cas(
        &self,
        id: &str,
        expected: &StoredStatus,
        target: TaxStatus,
        paid_date: Option<NaiveDate>,
    ) -> Result<bool>;

    /// Everything a reminder email needs for one tax
    async fn find_target(&self, tax_id: &str) -> Result<Option<NotificationTarget>>;

    /// Pending taxes whose due date has passed, with their recipients
    async fn list_overdue_targets(&self, today: NaiveDate) -> Result<Vec<NotificationTarget>>;
}

pub struct MySqlTaxRepository {
    pool: MySqlPool,
}

impl MySqlTaxRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaxRow {
    id: String,
    charge_station_id: String,
    tax_type_id: String,
    amount: Decimal,
    due_date: NaiveDate,
    status: String,
    paid_date: Option<NaiveDate>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    station_name: String,
    tax_type_name: String,
    category: String,
}

impl TaxRow {
    fn into_detail(self) -> TaxDetail {
        let category = TaxCategory::parse(&self.category)
            .unwrap_or_else(|| TaxCategory::from_name(&self.tax_type_name));

        TaxDetail {
            tax: Tax {
                id: self.id,
                charge_station_id: self.charge_station_id,
                tax_type_id: self.tax_type_id,
                amount: self.amount,
                due_date: self.due_date,
                status: StoredStatus::from(self.status),
                paid_date: self.paid_date,
                description: self.description,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            station_name: self.station_name,
            tax_type_name: self.tax_type_name,
            category,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TargetRow {
    tax_id: String,
    amount: Decimal,
    due_date: NaiveDate,
    tax_type_name: String,
    station_name: String,
    user_id: String,
    recipient_email: String,
    recipient_name: String,
}

impl From<TargetRow> for NotificationTarget {
    fn from(row: TargetRow) -> Self {
        NotificationTarget {
            tax_id: row.tax_id,
            amount: row.amount,
            due_date: row.due_date,
            tax_type_name: row.tax_type_name,
            station_name: row.station_name,
            user_id: row.user_id,
            recipient_email: row.recipient_email,
            recipient_name: row.recipient_name,
        }
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT
        t.id, t.charge_station_id, t.tax_type_id, t.amount, t.due_date,
        t.status, t.paid_date, t.description, t.created_at, t.updated_at,
        cs.name AS station_name, tt.name AS tax_type_name, tt.category AS category
    FROM taxes t
    JOIN charge_stations cs ON cs.id = t.charge_station_id
    JOIN tax_types tt ON tt.id = t.tax_type_id
"#;

const TARGET_SELECT: &str = r#"
    SELECT
        t.id AS tax_id, t.amount, t.due_date,
        tt.name AS tax_type_name, cs.name AS station_name,
        u.id AS user_id, u.email AS recipient_email, u.name AS recipient_name
    FROM taxes t
    JOIN charge_stations cs ON cs.id = t.charge_station_id
    JOIN tax_types tt ON tt.id = t.tax_type_id
    JOIN users u ON u.id = cs.user_id
"#;

#[async_trait]
impl TaxRepository for MySqlTaxRepository {
    async fn create(&self, tax: &Tax) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO taxes (
                id, charge_station_id, tax_type_id, amount, due_date,
                status, paid_date, description, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&tax.id)
        .bind(&tax.charge_station_id)
        .bind(&tax.tax_type_id)
        .bind(tax.amount)
        .bind(tax.due_date)
        .bind(tax.status.as_str())
        .bind(tax.paid_date)
        .bind(&tax.description)
        .bind(tax.created_at)
        .bind(tax.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_detail(&self, id: &str, user_id: &str) -> Result<Option<TaxDetail>> {
        let sql = format!("{} WHERE t.id = ? AND cs.user_id = ?", DETAIL_SELECT);
        let row = sqlx::query_as::<_, TaxRow>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TaxRow::into_detail))
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<TaxDetail>> {
        let sql = format!("{} WHERE cs.user_id = ? ORDER BY t.due_date ASC", DETAIL_SELECT);
        let rows = sqlx::query_as::<_, TaxRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TaxRow::into_detail).collect())
    }

    async fn search(&self, user_id: &str, query: &str) -> Result<Vec<TaxDetail>> {
        let pattern = format!("%{}%", query);
        let sql = format!(
            "{} WHERE cs.user_id = ? AND \
             (t.description LIKE ? OR cs.name LIKE ? OR tt.name LIKE ?) \
             ORDER BY t.due_date ASC",
            DETAIL_SELECT
        );
        let rows = sqlx::query_as::<_, TaxRow>(&sql)
            .bind(user_id)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TaxRow::into_detail).collect())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE t FROM taxes t
            JOIN charge_stations cs ON cs.id = t.charge_station_id
            WHERE t.id = ? AND cs.user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Tax '{}' not found", id)));
        }

        Ok(())
    }

    async fn update_status_cas(
        &self,
        id: &str,
        expected: &StoredStatus,
        target: TaxStatus,
        paid_date: Option<NaiveDate>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE taxes
            SET status = ?, paid_date = ?, updated_at = NOW()
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(target.as_str())
        .bind(paid_date)
        .bind(id)
        .bind(expected.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_target(&self, tax_id: &str) -> Result<Option<NotificationTarget>> {
        let sql = format!("{} WHERE t.id = ?", TARGET_SELECT);
        let row = sqlx::query_as::<_, TargetRow>(&sql)
            .bind(tax_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(NotificationTarget::from))
    }

    async fn list_overdue_targets(&self, today: NaiveDate) -> Result<Vec<NotificationTarget>> {
        let sql = format!(
            "{} WHERE t.status = ? AND t.due_date < ? ORDER BY t.due_date ASC",
            TARGET_SELECT
        );
        let rows = sqlx::query_as::<_, TargetRow>(&sql)
            .bind(TaxStatus::Pending.as_str())
            .bind(today)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(NotificationTarget::from).collect())
    }
}
