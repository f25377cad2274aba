use crate::core::{Krw, Kst};
use crate::modules::notifications::models::{EmailTemplate, NotificationTarget};

/// Renders the notification emails. Subjects and bodies are Korean, with
/// amounts in won and dates in the KST calendar.
#[derive(Clone)]
pub struct EmailTemplates {
    app_url: String,
}

impl EmailTemplates {
    pub fn new(app_url: String) -> Self {
        Self {
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    fn taxes_url(&self) -> String {
        format!("{}/dashboard/taxes", self.app_url)
    }

    /// Upcoming-payment reminder
    pub fn tax_reminder(&self, target: &NotificationTarget) -> EmailTemplate {
        let subject = format!(
            "세금 납부 알림: {} - {}",
            target.tax_type_name, target.station_name
        );
        let amount = Krw::format(target.amount);
        let due_date = Kst::format_date(target.due_date);

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #667eea; padding: 30px; border-radius: 10px; text-align: center; margin-bottom: 30px;">
    <h1 style="color: white; margin: 0; font-size: 28px;">세금 납부 알림</h1>
    <p style="color: rgba(255,255,255,0.9); margin: 10px 0 0 0;">세무 관리 시스템</p>
  </div>
  <div style="background: #f8f9fa; padding: 25px; border-radius: 8px; margin-bottom: 25px;">
    <h2 style="color: #333; margin-top: 0;">납부 정보</h2>
    <table style="width: 100%; border-collapse: collapse;">
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">세금 유형:</td><td style="padding: 8px 0; color: #333;">{tax_type}</td></tr>
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">충전소:</td><td style="padding: 8px 0; color: #333;">{station}</td></tr>
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">납부 금액:</td><td style="padding: 8px 0; color: #333; font-size: 18px; font-weight: bold;">{amount}</td></tr>
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">납부 기한:</td><td style="padding: 8px 0; color: #e74c3c; font-weight: bold;">{due_date}</td></tr>
    </table>
  </div>
  <div style="text-align: center; margin: 30px 0;">
    <a href="{url}" style="background: #667eea; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; font-weight: bold; display: inline-block;">세금 관리 페이지로 이동</a>
  </div>
  <div style="border-top: 1px solid #eee; padding-top: 20px; text-align: center; color: #666; font-size: 14px;">
    <p>이 이메일은 세무 관리 시스템에서 자동으로 발송되었습니다.</p>
    <p>문의사항이 있으시면 관리자에게 연락해주세요.</p>
  </div>
</div>"#,
            tax_type = target.tax_type_name,
            station = target.station_name,
            amount = amount,
            due_date = due_date,
            url = self.taxes_url(),
        );

        let text = format!(
            "세금 납부 알림\n\n납부 정보:\n- 세금 유형: {}\n- 충전소: {}\n- 납부 금액: {}\n- 납부 기한: {}\n\n세금 관리 페이지: {}\n\n이 이메일은 세무 관리 시스템에서 자동으로 발송되었습니다.\n",
            target.tax_type_name,
            target.station_name,
            amount,
            due_date,
            self.taxes_url(),
        );

        EmailTemplate { subject, html, text }
    }

    /// Overdue notice with days past due
    pub fn overdue_notice(&self, target: &NotificationTarget, days_past_due: i64) -> EmailTemplate {
        let subject = format!(
            "🚨 연체 알림: {} - {}",
            target.tax_type_name, target.station_name
        );
        let amount = Krw::format(target.amount);
        let due_date = Kst::format_date(target.due_date);

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #e74c3c; padding: 30px; border-radius: 10px; text-align: center; margin-bottom: 30px;">
    <h1 style="color: white; margin: 0; font-size: 28px;">⚠️ 연체 알림</h1>
    <p style="color: rgba(255,255,255,0.9); margin: 10px 0 0 0;">즉시 납부가 필요합니다</p>
  </div>
  <div style="background: #fff5f5; border: 2px solid #fed7d7; padding: 25px; border-radius: 8px; margin-bottom: 25px;">
    <h2 style="color: #e53e3e; margin-top: 0;">연체 정보</h2>
    <p style="color: #e53e3e; font-weight: bold; font-size: 16px;">납부 기한이 {days}일 지났습니다.</p>
    <table style="width: 100%; border-collapse: collapse;">
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">세금 유형:</td><td style="padding: 8px 0; color: #333;">{tax_type}</td></tr>
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">충전소:</td><td style="padding: 8px 0; color: #333;">{station}</td></tr>
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">납부 금액:</td><td style="padding: 8px 0; color: #333; font-size: 18px; font-weight: bold;">{amount}</td></tr>
      <tr><td style="padding: 8px 0; color: #666; font-weight: bold;">원래 납부 기한:</td><td style="padding: 8px 0; color: #e74c3c; font-weight: bold;">{due_date}</td></tr>
    </table>
  </div>
  <div style="text-align: center; margin: 30px 0;">
    <a href="{url}" style="background: #e74c3c; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; font-weight: bold; display: inline-block;">즉시 납부하기</a>
  </div>
  <div style="border-top: 1px solid #eee; padding-top: 20px; text-align: center; color: #666; font-size: 14px;">
    <p>연체료가 부과될 수 있으니 즉시 납부해주세요.</p>
    <p>문의사항이 있으시면 관리자에게 연락해주세요.</p>
  </div>
</div>"#,
            days = days_past_due,
            tax_type = target.tax_type_name,
            station = target.station_name,
            amount = amount,
            due_date = due_date,
            url = self.taxes_url(),
        );

        let text = format!(
            "🚨 연체 알림\n\n납부 기한이 {}일 지났습니다.\n\n연체 정보:\n- 세금 유형: {}\n- 충전소: {}\n- 납부 금액: {}\n- 원래 납부 기한: {}\n\n즉시 납부하기: {}\n\n연체료가 부과될 수 있으니 즉시 납부해주세요.\n",
            days_past_due,
            target.tax_type_name,
            target.station_name,
            amount,
            due_date,
            self.taxes_url(),
        );

        EmailTemplate { subject, html, text }
    }
}
