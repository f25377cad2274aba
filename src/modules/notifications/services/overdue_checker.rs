use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

use crate::modules::notifications::services::NotificationService;

/// Background job that periodically sends overdue notices.
///
/// Spawned as a tokio task in main. Each tick scans pending taxes whose
/// due date has passed and emails their owners; a failing tick is logged
/// and the next tick retries from a fresh scan.
pub struct OverdueChecker {
    notifications: NotificationService,
    period: Duration,
}

impl OverdueChecker {
    pub fn new(notifications: NotificationService, period: Duration) -> Self {
        Self {
            notifications,
            period,
        }
    }

    pub async fn start(self: Arc<Self>) {
        info!(period_secs = self.period.as_secs(), "starting overdue notice checker");

        let mut ticker = interval(self.period);

        loop {
            ticker.tick().await;

            match self.notifications.send_overdue_notices().await {
                Ok(report) => {
                    if report.sent > 0 || report.failed > 0 {
                        info!(sent = report.sent, failed = report.failed, "overdue tick complete");
                    }
                }
                Err(e) => {
                    error!(error = %e, "overdue notice scan failed");
                }
            }
        }
    }
}
