use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::reminders::models::{Reminder, ReminderStatus};

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    async fn create(&self, reminder: &Reminder) -> Result<()>;
    async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<Reminder>>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Reminder>>;
    async fn update(&self, reminder: &Reminder) -> Result<()>;
    async fn set_status(&self, id: &str, user_id: &str, status: ReminderStatus) -> Result<()>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<()>;
}

pub struct MySqlReminderRepository {
    pool: MySqlPool,
}

impl MySqlReminderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReminderRow {
    id: String,
    tax_id: Option<String>,
    title: String,
    message: String,
    reminder_date: DateTime<Utc>,
    status: String,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReminderRow {
    fn into_reminder(self) -> Result<Reminder> {
        let status = ReminderStatus::parse(&self.status).ok_or_else(|| {
            AppError::internal(format!("Invalid reminder status in database: {}", self.status))
        })?;

        Ok(Reminder {
            id: self.id,
            tax_id: self.tax_id,
            title: self.title,
            message: self.message,
            reminder_date: self.reminder_date,
            status,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl ReminderRepository for MySqlReminderRepository {
    async fn create(&self, reminder: &Reminder) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders (
                id, tax_id, title, message, reminder_date, status, user_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&reminder.id)
        .bind(&reminder.tax_id)
        .bind(&reminder.title)
        .bind(&reminder.message)
        .bind(reminder.reminder_date)
        .bind(reminder.status.as_str())
        .bind(&reminder.user_id)
        .bind(reminder.created_at)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRow>(
            r#"
            SELECT id, tax_id, title, message, reminder_date, status, user_id,
                   created_at, updated_at
            FROM reminders
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ReminderRow::into_reminder).transpose()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRow>(
            r#"
            SELECT id, tax_id, title, message, reminder_date, status, user_id,
                   created_at, updated_at
            FROM reminders
            WHERE user_id = ?
            ORDER BY reminder_date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReminderRow::into_reminder).collect()
    }

    async fn update(&self, reminder: &Reminder) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE reminders
            SET title = ?, message = ?, reminder_date = ?, tax_id = ?, updated_at = NOW()
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&reminder.title)
        .bind(&reminder.message)
        .bind(reminder.reminder_date)
        .bind(&reminder.tax_id)
        .bind(&reminder.id)
        .bind(&reminder.user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Reminder '{}' not found", reminder.id)));
        }

        Ok(())
    }

    async fn set_status(&self, id: &str, user_id: &str, status: ReminderStatus) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE reminders
            SET status = ?, updated_at = NOW()
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Reminder '{}' not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Reminder '{}' not found", id)));
        }

        Ok(())
    }
}
