//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Sustituye a los singletons a nivel de módulo:
//! la configuración y el backend de extracción se construyen una vez al
//! arrancar y se comparten en modo solo lectura entre todas las peticiones.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::StructuredExtractionBackend;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub backend: Arc<dyn StructuredExtractionBackend>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, backend: Arc<dyn StructuredExtractionBackend>) -> Self {
        Self { config, backend }
    }
}
