use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::core::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Active,
    Sent,
    Dismissed,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Active => "active",
            ReminderStatus::Sent => "sent",
            ReminderStatus::Dismissed => "dismissed",
        }
    }

    pub fn parse(s: &str) -> Option<ReminderStatus> {
        match s {
            "active" => Some(ReminderStatus::Active),
            "sent" => Some(ReminderStatus::Sent),
            "dismissed" => Some(ReminderStatus::Dismissed),
            _ => None,
        }
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reminder, optionally tied to a tax record. Email sends insert `sent`
/// reminders as an audit trail of what was delivered and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub tax_id: Option<String>,
    pub title: String,
    pub message: String,
    pub reminder_date: DateTime<Utc>,
    pub status: ReminderStatus,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(
        user_id: String,
        tax_id: Option<String>,
        title: String,
        message: String,
        reminder_date: DateTime<Utc>,
        status: ReminderStatus,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(AppError::validation("Reminder title cannot be empty"));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            tax_id,
            title,
            message,
            reminder_date,
            status,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Payload for creating or updating a reminder
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderRequest {
    pub title: String,
    pub message: String,
    pub reminder_date: DateTime<Utc>,
    pub tax_id: Option<String>,
}
