//! Controller de extracción de especificaciones
//!
//! Pieza de unión entre el handler HTTP y el backend de extracción. Sin
//! estado propio: una petición entra, una ficha (o un error) sale.

use std::sync::Arc;

use crate::dto::{ExtractionResponse, VehicleRequest};
use crate::services::StructuredExtractionBackend;
use crate::utils::errors::AppError;

pub struct ExtractionController {
    backend: Arc<dyn StructuredExtractionBackend>,
}

impl ExtractionController {
    pub fn new(backend: Arc<dyn StructuredExtractionBackend>) -> Self {
        Self { backend }
    }

    /// Extraer la ficha técnica de la descripción recibida
    ///
    /// No se valida la descripción más allá de su forma: el contrato delega
    /// en el proveedor todo lo que el texto pueda o no contener.
    pub async fn extract(&self, request: VehicleRequest) -> Result<ExtractionResponse, AppError> {
        tracing::info!(
            backend = self.backend.name(),
            "🚗 Extrayendo especificaciones: {}",
            request.description
        );

        let vehicle_data = self
            .backend
            .extract_specifications(&request.description)
            .await?;

        Ok(ExtractionResponse { vehicle_data })
    }
}
