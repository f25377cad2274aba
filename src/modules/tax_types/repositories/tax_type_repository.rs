use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::tax_types::models::TaxType;
use crate::modules::workflow::TaxCategory;

#[async_trait]
pub trait TaxTypeRepository: Send + Sync {
    async fn create(&self, tax_type: &TaxType) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<TaxType>>;
    async fn list(&self) -> Result<Vec<TaxType>>;
    async fn update(&self, tax_type: &TaxType) -> Result<()>;
}

pub struct MySqlTaxTypeRepository {
    pool: MySqlPool,
}

impl MySqlTaxTypeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaxTypeRow {
    id: String,
    name: String,
    description: Option<String>,
    rate: Option<Decimal>,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaxTypeRow {
    fn into_tax_type(self) -> TaxType {
        // stored category may predate a rename; the name stays authoritative
        let category = TaxCategory::parse(&self.category).unwrap_or_else(|| {
            tracing::warn!(
                tax_type_id = %self.id,
                category = %self.category,
                "invalid stored tax category; reclassifying from name"
            );
            TaxCategory::from_name(&self.name)
        });

        TaxType {
            id: self.id,
            name: self.name,
            description: self.description,
            rate: self.rate,
            category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[async_trait]
impl TaxTypeRepository for MySqlTaxTypeRepository {
    async fn create(&self, tax_type: &TaxType) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tax_types (id, name, description, rate, category, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&tax_type.id)
        .bind(&tax_type.name)
        .bind(&tax_type.description)
        .bind(tax_type.rate)
        .bind(tax_type.category.as_str())
        .bind(tax_type.created_at)
        .bind(tax_type.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TaxType>> {
        let row = sqlx::query_as::<_, TaxTypeRow>(
            r#"
            SELECT id, name, description, rate, category, created_at, updated_at
            FROM tax_types
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaxTypeRow::into_tax_type))
    }

    async fn list(&self) -> Result<Vec<TaxType>> {
        let rows = sqlx::query_as::<_, TaxTypeRow>(
            r#"
            SELECT id, name, description, rate, category, created_at, updated_at
            FROM tax_types
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaxTypeRow::into_tax_type).collect())
    }

    async fn update(&self, tax_type: &TaxType) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE tax_types
            SET name = ?, description = ?, rate = ?, category = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(&tax_type.name)
        .bind(&tax_type.description)
        .bind(tax_type.rate)
        .bind(tax_type.category.as_str())
        .bind(&tax_type.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Tax type '{}' not found", tax_type.id)));
        }

        Ok(())
    }
}
