//! Modelos del sistema
//!
//! Este módulo contiene el modelo de la ficha técnica del vehículo y el
//! schema JSON estático que se pasa al proveedor del modelo de lenguaje.

pub mod schema;
pub mod vehicle;

pub use schema::VEHICLE_JSON_SCHEMA;
pub use vehicle::{BodyType, FuelType, MaxPower, Technology, VehicleSpecification};
