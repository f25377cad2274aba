//! Reminder endpoints. Reminders belong to the session user; `sent`
//! records created by the notification layer show up here too.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::Result;
use crate::middleware::auth::require_user;
use crate::modules::reminders::models::{Reminder, ReminderRequest, ReminderStatus};
use crate::state::AppState;

/// GET /reminders
pub async fn list_reminders(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let reminders = state.reminders.list_for_user(&auth.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "reminders": reminders })))
}

/// POST /reminders
pub async fn create_reminder(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<ReminderRequest>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let body = payload.into_inner();

    let reminder = Reminder::new(
        auth.id.clone(),
        body.tax_id,
        body.title,
        body.message,
        body.reminder_date,
        ReminderStatus::Active,
    )?;
    state.reminders.create(&reminder).await?;

    Ok(HttpResponse::Created().json(reminder))
}

/// PUT /reminders/{id}
pub async fn update_reminder(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<ReminderRequest>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let body = payload.into_inner();

    let Some(mut reminder) = state.reminders.find_by_id(&id, &auth.id).await? else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": { "code": "REMINDER_NOT_FOUND", "message": "Reminder not found" }
        })));
    };

    reminder.title = body.title;
    reminder.message = body.message;
    reminder.reminder_date = body.reminder_date;
    reminder.tax_id = body.tax_id;
    state.reminders.update(&reminder).await?;

    Ok(HttpResponse::Ok().json(reminder))
}

/// POST /reminders/{id}/dismiss
pub async fn dismiss_reminder(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    state
        .reminders
        .set_status(&id, &auth.id, ReminderStatus::Dismissed)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "dismissed" })))
}

/// DELETE /reminders/{id}
pub async fn delete_reminder(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    state.reminders.delete(&id, &auth.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure reminder routes
pub fn configure_reminder_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reminders")
            .route("", web::get().to(list_reminders))
            .route("", web::post().to(create_reminder))
            .route("/{id}", web::put().to(update_reminder))
            .route("/{id}", web::delete().to(delete_reminder))
            .route("/{id}/dismiss", web::post().to(dismiss_reminder)),
    );
}
