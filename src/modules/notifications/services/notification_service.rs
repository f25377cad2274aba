use std::sync::Arc;

use chrono::Utc;

use crate::core::{AppError, Kst, Result};
use crate::modules::notifications::models::{NotificationReport, NotificationTarget};
use crate::modules::notifications::services::mailer::EmailSender;
use crate::modules::notifications::services::templates::EmailTemplates;
use crate::modules::reminders::models::{Reminder, ReminderStatus};
use crate::modules::reminders::repositories::ReminderRepository;
use crate::modules::taxes::repositories::TaxRepository;

/// Sends reminder and overdue emails and records each delivery as a `sent`
/// reminder so the dashboard shows what went out.
#[derive(Clone)]
pub struct NotificationService {
    taxes: Arc<dyn TaxRepository>,
    reminders: Arc<dyn ReminderRepository>,
    mailer: Arc<dyn EmailSender>,
    templates: EmailTemplates,
}

impl NotificationService {
    pub fn new(
        taxes: Arc<dyn TaxRepository>,
        reminders: Arc<dyn ReminderRepository>,
        mailer: Arc<dyn EmailSender>,
        templates: EmailTemplates,
    ) -> Self {
        Self {
            taxes,
            reminders,
            mailer,
            templates,
        }
    }

    /// Send a payment reminder for one tax.
    pub async fn send_tax_reminder(&self, tax_id: &str) -> Result<()> {
        let target = self
            .taxes
            .find_target(tax_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tax '{}' not found", tax_id)))?;

        let template = self.templates.tax_reminder(&target);
        let delivered = self.mailer.send(&target.recipient_email, &template).await?;

        if !delivered {
            return Err(AppError::email("이메일 전송에 실패했습니다."));
        }

        self.record_sent(
            &target,
            format!("세금 납부 알림: {}", target.tax_type_name),
            format!(
                "{}의 {} 납부 알림이 이메일로 전송되었습니다.",
                target.station_name, target.tax_type_name
            ),
        )
        .await;

        Ok(())
    }

    /// Scan for overdue taxes and send each owner an overdue notice.
    /// Individual failures are counted, not fatal: the scan always runs to
    /// the end of the list.
    pub async fn send_overdue_notices(&self) -> Result<NotificationReport> {
        let today = Kst::today();
        let targets = self.taxes.list_overdue_targets(today).await?;
        let mut report = NotificationReport::default();

        for target in targets {
            let days_past_due = (today - target.due_date).num_days();
            let template = self.templates.overdue_notice(&target, days_past_due);

            match self.mailer.send(&target.recipient_email, &template).await {
                Ok(true) => {
                    report.sent += 1;
                    self.record_sent(
                        &target,
                        format!("연체 알림: {}", target.tax_type_name),
                        format!(
                            "{}의 {} 연체 알림이 이메일로 전송되었습니다. ({}일 연체)",
                            target.station_name, target.tax_type_name, days_past_due
                        ),
                    )
                    .await;
                }
                Ok(false) => {
                    report.failed += 1;
                }
                Err(err) => {
                    report.failed += 1;
                    tracing::error!(
                        tax_id = %target.tax_id,
                        error = %err,
                        "overdue notice delivery failed"
                    );
                }
            }
        }

        tracing::info!(sent = report.sent, failed = report.failed, "overdue notices processed");
        Ok(report)
    }

    /// Send reminders for a batch of taxes; per-id failures are counted.
    pub async fn send_bulk(&self, tax_ids: &[String]) -> Result<NotificationReport> {
        let mut report = NotificationReport::default();

        for tax_id in tax_ids {
            match self.send_tax_reminder(tax_id).await {
                Ok(()) => report.sent += 1,
                Err(err) => {
                    report.failed += 1;
                    tracing::error!(tax_id = %tax_id, error = %err, "bulk reminder failed");
                }
            }
        }

        Ok(report)
    }

    /// The audit trail is best-effort: a failed insert is logged, the
    /// already-delivered email is not rolled back.
    async fn record_sent(&self, target: &NotificationTarget, title: String, message: String) {
        let reminder = match Reminder::new(
            target.user_id.clone(),
            Some(target.tax_id.clone()),
            title,
            message,
            Utc::now(),
            ReminderStatus::Sent,
        ) {
            Ok(reminder) => reminder,
            Err(err) => {
                tracing::error!(tax_id = %target.tax_id, error = %err, "invalid reminder record");
                return;
            }
        };

        if let Err(err) = self.reminders.create(&reminder).await {
            tracing::error!(
                tax_id = %target.tax_id,
                error = %err,
                "failed to record sent reminder"
            );
        }
    }
}
