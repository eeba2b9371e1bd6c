//! Services module
//!
//! Este módulo contiene los backends de extracción (OpenAI en modo libre,
//! Anthropic en modo restringido por schema), la construcción de prompts y la
//! fábrica que selecciona el backend según la configuración.

pub mod anthropic_service;
pub mod extraction_backend;
pub mod openai_service;
pub mod prompt;

pub use anthropic_service::AnthropicExtractionService;
pub use extraction_backend::StructuredExtractionBackend;
pub use openai_service::OpenAiExtractionService;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{EnvironmentConfig, ExtractionBackendKind};

/// Construir el backend de extracción seleccionado por configuración
///
/// El cliente HTTP se crea una sola vez por proceso y se reutiliza en todas
/// las peticiones. La credencial ausente del backend seleccionado es un error
/// de arranque.
pub fn create_extraction_backend(
    config: &EnvironmentConfig,
) -> anyhow::Result<Arc<dyn StructuredExtractionBackend>> {
    let mut builder = reqwest::Client::builder();
    if let Some(seconds) = config.request_timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    let client = builder.build()?;

    match config.extraction_backend {
        ExtractionBackendKind::OpenAi => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("API_KEY debe estar definida para el backend openai"))?;
            Ok(Arc::new(OpenAiExtractionService::new(
                api_key,
                config.openai_model.clone(),
                client,
            )))
        }
        ExtractionBackendKind::Anthropic => {
            let api_key = config.anthropic_api_key.clone().ok_or_else(|| {
                anyhow::anyhow!("ANTHROPIC_API_KEY debe estar definida para el backend anthropic")
            })?;
            Ok(Arc::new(AnthropicExtractionService::new(
                api_key,
                config.anthropic_model.clone(),
                client,
            )))
        }
    }
}
