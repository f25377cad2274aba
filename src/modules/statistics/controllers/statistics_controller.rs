use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Datelike;
use serde::Deserialize;

use crate::core::{Kst, Result};
use crate::middleware::auth::require_user;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    year: Option<i32>,
}

/// GET /statistics/summary?year=
pub async fn get_summary(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<SummaryQuery>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let year = query.year.unwrap_or_else(|| Kst::today().year());
    let summary = state.statistics.summarize(&auth.id, year).await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// Configure statistics routes
pub fn configure_statistics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/statistics").route("/summary", web::get().to(get_summary)));
}
