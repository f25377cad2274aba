// Notification flows over the in-memory doubles: the overdue scan picks
// exactly the right taxes, deliveries leave `sent` reminder records, and
// failures are counted without aborting the batch.

#[path = "../support/mod.rs"]
mod support;

use std::sync::atomic::Ordering;

use chrono::Duration;
use rust_decimal_macros::dec;

use chargetax::core::{AppError, Kst};
use chargetax::modules::reminders::models::ReminderStatus;
use chargetax::modules::workflow::TaxStatus;
use support::{harness, property_type, seeded_detail, OWNER_EMAIL, OWNER_ID};

#[tokio::test]
async fn overdue_scan_selects_only_pending_past_due_taxes() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    let today = Kst::today();

    // overdue by 12 days: selected
    h.taxes.seed(seeded_detail(
        "tax-overdue",
        &property,
        TaxStatus::Pending.into(),
        dec!(500000),
        today - Duration::days(12),
        None,
    ));
    // due today: not yet overdue
    h.taxes.seed(seeded_detail(
        "tax-due-today",
        &property,
        TaxStatus::Pending.into(),
        dec!(200000),
        today,
        None,
    ));
    // past due but already paid: not selected
    h.taxes.seed(seeded_detail(
        "tax-paid",
        &property,
        TaxStatus::Completed.into(),
        dec!(300000),
        today - Duration::days(30),
        Some(today - Duration::days(5)),
    ));

    let report = h.state.notifications.send_overdue_notices().await.unwrap();
    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 0);

    let sent = h.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (to, template) = &sent[0];
    assert_eq!(to, OWNER_EMAIL);
    assert!(template.subject.contains("연체 알림"));
    assert!(template.text.contains("납부 기한이 12일 지났습니다."));
}

#[tokio::test]
async fn delivered_notices_leave_sent_reminder_records() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    let today = Kst::today();

    h.taxes.seed(seeded_detail(
        "tax-overdue",
        &property,
        TaxStatus::Pending.into(),
        dec!(500000),
        today - Duration::days(3),
        None,
    ));

    h.state.notifications.send_overdue_notices().await.unwrap();

    let reminders = h.reminders.all();
    assert_eq!(reminders.len(), 1);
    let record = &reminders[0];
    assert_eq!(record.status, ReminderStatus::Sent);
    assert_eq!(record.user_id, OWNER_ID);
    assert_eq!(record.tax_id.as_deref(), Some("tax-overdue"));
    assert!(record.title.contains("연체 알림"));
    assert!(record.message.contains("3일 연체"));
}

#[tokio::test]
async fn rejected_deliveries_are_counted_not_fatal() {
    let property = property_type();
    let h = harness(vec![property.clone()]);
    let today = Kst::today();

    h.taxes.seed(seeded_detail(
        "tax-overdue",
        &property,
        TaxStatus::Pending.into(),
        dec!(500000),
        today - Duration::days(3),
        None,
    ));

    h.mailer.reject_all.store(true, Ordering::SeqCst);
    let report = h.state.notifications.send_overdue_notices().await.unwrap();

    assert_eq!(report.sent, 0);
    assert_eq!(report.failed, 1);
    // no audit record for an email that never went out
    assert!(h.reminders.all().is_empty());
}

#[tokio::test]
async fn single_reminder_renders_payment_template() {
    let property = property_type();
    let h = harness(vec![property.clone()]);

    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        TaxStatus::Pending.into(),
        dec!(1650000),
        Kst::today() + Duration::days(7),
        None,
    ));

    h.state.notifications.send_tax_reminder("tax-1").await.unwrap();

    let sent = h.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (_, template) = &sent[0];
    assert!(template.subject.starts_with("세금 납부 알림"));
    assert!(template.html.contains("₩1,650,000"));

    let reminders = h.reminders.all();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].status, ReminderStatus::Sent);
}

#[tokio::test]
async fn reminder_for_unknown_tax_is_not_found() {
    let h = harness(vec![property_type()]);
    let err = h
        .state
        .notifications
        .send_tax_reminder("missing")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(h.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn bulk_send_counts_per_tax_outcomes() {
    let property = property_type();
    let h = harness(vec![property.clone()]);

    h.taxes.seed(seeded_detail(
        "tax-1",
        &property,
        TaxStatus::Pending.into(),
        dec!(100000),
        Kst::today() + Duration::days(7),
        None,
    ));

    let report = h
        .state
        .notifications
        .send_bulk(&["tax-1".to_string(), "missing".to_string()])
        .await
        .unwrap();

    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 1);
}
