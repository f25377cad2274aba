//! Charge-station endpoints. Stations are always scoped to the session user.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::Result;
use crate::middleware::auth::{require_editor, require_user};
use crate::modules::stations::models::{ChargeStation, StationRequest};
use crate::state::AppState;

/// GET /stations
pub async fn list_stations(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let auth = require_user(&req)?;
    let stations = state.stations.list_for_user(&auth.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "stations": stations })))
}

/// GET /stations/{id}
pub async fn get_station(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_user(&req)?;

    match state.stations.find_by_id(&id, &auth.id).await? {
        Some(station) => Ok(HttpResponse::Ok().json(station)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": { "code": "STATION_NOT_FOUND", "message": "Charge station not found" }
        }))),
    }
}

/// POST /stations
pub async fn create_station(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<StationRequest>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    let body = payload.into_inner();

    let station = ChargeStation::new(body.name, body.location, body.status, auth.id.clone())?;
    state.stations.create(&station).await?;

    tracing::info!(station_id = %station.id, user_id = %auth.id, "charge station created");
    Ok(HttpResponse::Created().json(station))
}

/// PUT /stations/{id}
pub async fn update_station(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<StationRequest>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    let body = payload.into_inner();

    let Some(mut station) = state.stations.find_by_id(&id, &auth.id).await? else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": { "code": "STATION_NOT_FOUND", "message": "Charge station not found" }
        })));
    };

    station.name = body.name;
    station.location = body.location;
    station.status = body.status;
    state.stations.update(&station).await?;

    Ok(HttpResponse::Ok().json(station))
}

/// DELETE /stations/{id}
pub async fn delete_station(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let auth = require_editor(&req)?;
    state.stations.delete(&id, &auth.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure station routes
pub fn configure_station_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stations")
            .route("", web::get().to(list_stations))
            .route("", web::post().to(create_station))
            .route("/{id}", web::get().to(get_station))
            .route("/{id}", web::put().to(update_station))
            .route("/{id}", web::delete().to(delete_station)),
    );
}
