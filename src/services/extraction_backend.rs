//! Contrato del backend de extracción estructurada
//!
//! Los dos proveedores (OpenAI en modo libre, Anthropic en modo restringido
//! por schema) son variantes intercambiables de la misma capacidad: dado una
//! descripción libre de un vehículo, devolver una ficha conforme al schema.
//! El trait permite seleccionar el backend por configuración y sustituirlo
//! por un mock en los tests.

use async_trait::async_trait;

use crate::models::VehicleSpecification;
use crate::utils::errors::AppError;

/// Capacidad externa de extracción: prompt + schema -> ficha técnica
///
/// Sin garantías más allá del mejor esfuerzo: el modelo puede alucinar
/// valores. La conformidad de forma y de vocabularios cerrados se comprueba
/// al deserializar en `VehicleSpecification`; rangos numéricos y unidades no
/// se verifican localmente.
#[async_trait]
pub trait StructuredExtractionBackend: Send + Sync {
    /// Extraer las especificaciones del vehículo descrito
    async fn extract_specifications(
        &self,
        description: &str,
    ) -> Result<VehicleSpecification, AppError>;

    /// Identificador del backend para logging
    fn name(&self) -> &'static str;
}
