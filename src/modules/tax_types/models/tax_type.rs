use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::workflow::{self, TaxCategory};

/// A tax classification (acquisition tax, property tax, value-added tax, ...).
///
/// The workflow category is computed from the name at creation/edit time and
/// stored with the record, so the workflow never re-derives it by string
/// matching against a user-editable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxType {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Rate stored as a decimal fraction, e.g. 0.10 for 10%
    pub rate: Option<Decimal>,
    pub category: TaxCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaxType {
    pub fn new(name: String, description: Option<String>, rate: Option<Decimal>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Tax type name cannot be empty"));
        }
        if let Some(rate) = rate {
            Self::validate_rate(rate)?;
        }

        let category = TaxCategory::from_name(&name);
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            rate,
            category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply an edit; the category follows the new name.
    pub fn apply(&mut self, name: String, description: Option<String>, rate: Option<Decimal>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Tax type name cannot be empty"));
        }
        if let Some(rate) = rate {
            Self::validate_rate(rate)?;
        }

        self.category = TaxCategory::from_name(&name);
        self.name = name;
        self.description = description;
        self.rate = rate;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate a rate is a fraction in [0, 1] with at most 4 decimal places
    pub fn validate_rate(rate: Decimal) -> Result<()> {
        if rate < Decimal::ZERO {
            return Err(AppError::validation("Tax rate cannot be negative"));
        }

        if rate > Decimal::ONE {
            return Err(AppError::validation("Tax rate cannot exceed 1.0 (100%)"));
        }

        if rate.normalize().scale() > 4 {
            return Err(AppError::validation(
                "Tax rate cannot have more than 4 decimal places",
            ));
        }

        Ok(())
    }

    pub fn requires_accountant_review(&self) -> bool {
        workflow::requires_accountant_review(self.category)
    }
}

/// Payload for creating or updating a tax type
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTypeRequest {
    pub name: String,
    pub description: Option<String>,
    pub rate: Option<Decimal>,
}
