use serde::{Deserialize, Serialize};

use crate::models::VehicleSpecification;

// Request para extraer especificaciones de un vehículo
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehicleRequest {
    /// Descripción del vehículo para extraer las especificaciones
    pub description: String,
}

// Response con la ficha técnica extraída
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub vehicle_data: VehicleSpecification,
}
