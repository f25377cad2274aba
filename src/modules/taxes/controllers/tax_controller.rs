//! Tax record endpoints, including the workflow actions. Reads are scoped
//! to the session user's stations; mutations are admin-only.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::core::Result;
use crate::middleware::auth::{require_editor, require_user};
use crate::modules::taxes::models::{CreateTaxRequest, TransitionRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// GET /taxes
pub async fn list_taxes(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let taxes = state.taxes.list_taxes(&auth.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "taxes": taxes })))
}

/// GET /taxes/search?q=
pub async fn search_taxes(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let taxes = state.taxes.search_taxes(&auth.id, &query.q).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "taxes": taxes })))
}

/// GET /taxes/{id}
pub async fn get_tax(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let tax = state.taxes.get_tax(&id, &auth.id).await?;

    Ok(HttpResponse::Ok().json(tax))
}

/// POST /taxes
pub async fn create_tax(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<CreateTaxRequest>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    let tax = state.taxes.create_tax(payload.into_inner(), &auth.id).await?;

    Ok(HttpResponse::Created().json(tax))
}

/// DELETE /taxes/{id}
pub async fn delete_tax(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    state.taxes.delete_tax(&id, &auth.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /taxes/{id}/workflow
///
/// The presentation layer renders action buttons from this: no `next`
/// means no "advance" affordance, and only `allowed` targets are offered.
pub async fn get_workflow(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let view = state.taxes.workflow_view(&id, &auth.id).await?;

    Ok(HttpResponse::Ok().json(view))
}

/// POST /taxes/{id}/advance
pub async fn advance_tax(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    let tax = state.taxes.advance(&id, &auth.id).await?;

    Ok(HttpResponse::Ok().json(tax))
}

/// POST /taxes/{id}/transition
pub async fn transition_tax(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<TransitionRequest>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    let tax = state.taxes.transition(&id, &auth.id, payload.target).await?;

    Ok(HttpResponse::Ok().json(tax))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("", web::get().to(list_taxes))
            .route("", web::post().to(create_tax))
            .route("/search", web::get().to(search_taxes))
            .route("/{id}", web::get().to(get_tax))
            .route("/{id}", web::delete().to(delete_tax))
            .route("/{id}/workflow", web::get().to(get_workflow))
            .route("/{id}/advance", web::post().to(advance_tax))
            .route("/{id}/transition", web::post().to(transition_tax)),
    );
}
