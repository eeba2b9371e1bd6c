//! Servicio de extracción de especificaciones de vehículos
//!
//! Recibe una descripción libre de un vehículo por HTTP, la reenvía a un
//! proveedor de modelos de lenguaje (OpenAI o Anthropic) y devuelve la ficha
//! técnica estructurada como JSON. El trabajo "duro" (la extracción de
//! lenguaje natural) está delegado por completo en el proveedor; aquí vive el
//! contrato: construcción del prompt, el schema estático, el shaping de la
//! petición y el mapeo de errores a estados HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::build_router;
pub use state::AppState;
