//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio y su conversión a
//! respuestas HTTP. Todos los fallos en tiempo de extracción (transporte,
//! estado de error del proveedor, respuesta no decodificable) colapsan en un
//! 500 con cuerpo `{"detail": "<mensaje>"}`; el llamador no puede distinguir
//! un fallo transitorio de uno permanente. Es una limitación documentada del
//! contrato, no un descuido.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// La respuesta del modelo no se pudo decodificar como JSON conforme
    #[error("Error al decodificar la respuesta del modelo en JSON: {0}")]
    SchemaDecode(String),

    /// La llamada saliente al proveedor del modelo falló
    #[error("Error del proveedor externo: {0}")]
    ExternalApi(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::ExternalApi(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::SchemaDecode(msg) => {
                tracing::error!("❌ Error de decodificación: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ExternalApi(msg) => {
                tracing::error!("❌ Error del proveedor externo: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(msg) => {
                tracing::error!("❌ Error interno: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
