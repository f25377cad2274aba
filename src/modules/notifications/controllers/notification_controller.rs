//! Notification endpoints: single, bulk and overdue email sends. All are
//! admin-only; each delivered email leaves a `sent` reminder record.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::core::Result;
use crate::middleware::auth::require_editor;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    tax_ids: Vec<String>,
}

/// POST /notifications/taxes/{id}/remind
pub async fn send_tax_reminder(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    require_editor(&req)?;
    state.notifications.send_tax_reminder(&id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "이메일 알림이 성공적으로 전송되었습니다."
    })))
}

/// POST /notifications/overdue/run
pub async fn run_overdue_notices(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    require_editor(&req)?;
    let report = state.notifications.send_overdue_notices().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("연체 알림 전송 완료: 성공 {}건, 실패 {}건", report.sent, report.failed),
        "report": report,
    })))
}

/// POST /notifications/bulk
pub async fn send_bulk(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<BulkRequest>,
) -> Result<HttpResponse> {
    require_editor(&req)?;
    let report = state.notifications.send_bulk(&payload.tax_ids).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("일괄 알림 전송 완료: 성공 {}건, 실패 {}건", report.sent, report.failed),
        "report": report,
    })))
}

/// Configure notification routes
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .route("/taxes/{id}/remind", web::post().to(send_tax_reminder))
            .route("/overdue/run", web::post().to(run_overdue_notices))
            .route("/bulk", web::post().to(send_bulk)),
    );
}
