use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Operational status of a charge station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Active,
    Inactive,
    Maintenance,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Active => "active",
            StationStatus::Inactive => "inactive",
            StationStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<StationStatus> {
        match s {
            "active" => Some(StationStatus::Active),
            "inactive" => Some(StationStatus::Inactive),
            "maintenance" => Some(StationStatus::Maintenance),
            _ => None,
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An EV charge station owned by one operator account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeStation {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: StationStatus,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChargeStation {
    pub fn new(name: String, location: String, status: StationStatus, user_id: String) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Station name cannot be empty"));
        }
        if location.trim().is_empty() {
            return Err(AppError::validation("Station location cannot be empty"));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            location,
            status,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Payload for creating or updating a station
#[derive(Debug, Clone, Deserialize)]
pub struct StationRequest {
    pub name: String,
    pub location: String,
    pub status: StationStatus,
}
