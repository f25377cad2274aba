//! Tax-type administration endpoints. Creation and edits are admin-only;
//! the workflow category is recomputed from the name on every write.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::Result;
use crate::middleware::auth::{require_editor, require_user};
use crate::modules::tax_types::models::{TaxType, TaxTypeRequest};
use crate::state::AppState;

/// GET /tax-types
pub async fn list_tax_types(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    require_user(&req)?;
    let tax_types = state.tax_types.list().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "tax_types": tax_types })))
}

/// POST /tax-types
pub async fn create_tax_type(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<TaxTypeRequest>,
) -> Result<HttpResponse> {
    require_editor(&req)?;
    let body = payload.into_inner();

    let tax_type = TaxType::new(body.name, body.description, body.rate)?;
    state.tax_types.create(&tax_type).await?;

    tracing::info!(
        tax_type_id = %tax_type.id,
        category = %tax_type.category,
        "tax type created"
    );
    Ok(HttpResponse::Created().json(tax_type))
}

/// PUT /tax-types/{id}
pub async fn update_tax_type(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<TaxTypeRequest>,
) -> Result<HttpResponse> {
    require_editor(&req)?;
    let body = payload.into_inner();

    let Some(mut tax_type) = state.tax_types.find_by_id(&id).await? else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": { "code": "TAX_TYPE_NOT_FOUND", "message": "Tax type not found" }
        })));
    };

    tax_type.apply(body.name, body.description, body.rate)?;
    state.tax_types.update(&tax_type).await?;

    Ok(HttpResponse::Ok().json(tax_type))
}

/// Configure tax-type routes
pub fn configure_tax_type_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tax-types")
            .route("", web::get().to(list_tax_types))
            .route("", web::post().to(create_tax_type))
            .route("/{id}", web::put().to(update_tax_type)),
    );
}
