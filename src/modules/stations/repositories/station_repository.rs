use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::stations::models::{ChargeStation, StationStatus};

/// Repository for charge-station records. All operations are scoped to the
/// owning user; a station is never visible to another account.
#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn create(&self, station: &ChargeStation) -> Result<()>;
    async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<ChargeStation>>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<ChargeStation>>;
    async fn update(&self, station: &ChargeStation) -> Result<()>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<()>;
}

pub struct MySqlStationRepository {
    pool: MySqlPool,
}

impl MySqlStationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StationRow {
    id: String,
    name: String,
    location: String,
    status: String,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StationRow {
    fn into_station(self) -> Result<ChargeStation> {
        let status = StationStatus::parse(&self.status).ok_or_else(|| {
            AppError::internal(format!("Invalid station status in database: {}", self.status))
        })?;

        Ok(ChargeStation {
            id: self.id,
            name: self.name,
            location: self.location,
            status,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl StationRepository for MySqlStationRepository {
    async fn create(&self, station: &ChargeStation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO charge_stations (id, name, location, status, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&station.id)
        .bind(&station.name)
        .bind(&station.location)
        .bind(station.status.as_str())
        .bind(&station.user_id)
        .bind(station.created_at)
        .bind(station.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<ChargeStation>> {
        let row = sqlx::query_as::<_, StationRow>(
            r#"
            SELECT id, name, location, status, user_id, created_at, updated_at
            FROM charge_stations
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StationRow::into_station).transpose()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<ChargeStation>> {
        let rows = sqlx::query_as::<_, StationRow>(
            r#"
            SELECT id, name, location, status, user_id, created_at, updated_at
            FROM charge_stations
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StationRow::into_station).collect()
    }

    async fn update(&self, station: &ChargeStation) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE charge_stations
            SET name = ?, location = ?, status = ?, updated_at = NOW()
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&station.name)
        .bind(&station.location)
        .bind(station.status.as_str())
        .bind(&station.id)
        .bind(&station.user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Charge station '{}' not found",
                station.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM charge_stations WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Charge station '{}' not found", id)));
        }

        Ok(())
    }
}
