//! Rutas HTTP del servicio de extracción
//!
//! Dos rutas: el marcador del endpoint raíz y la extracción de
//! especificaciones. `build_router` monta el router completo sobre un
//! `AppState`, de forma que los tests pueden montarlo sobre un backend mock.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::controllers::ExtractionController;
use crate::dto::{ExtractionResponse, VehicleRequest};
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Montar el router de la aplicación sobre el estado dado
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/extract-specifications/", post(extract_vehicle_specifications))
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint raíz: no depende del proveedor del modelo
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "End point raíz" }))
}

/// Extraer las especificaciones del vehículo descrito en el cuerpo
async fn extract_vehicle_specifications(
    State(state): State<AppState>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<ExtractionResponse>, AppError> {
    let controller = ExtractionController::new(state.backend.clone());
    let response = controller.extract(request).await?;
    Ok(Json(response))
}
