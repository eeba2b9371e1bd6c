//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: selección del backend de
//! extracción, credenciales del proveedor y parámetros del servidor. Se carga
//! una sola vez al arrancar el proceso; la ausencia de la credencial del
//! backend seleccionado es un error de configuración de arranque, nunca un
//! error por petición.

use std::env;
use std::str::FromStr;

/// Backend de extracción disponible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionBackendKind {
    /// Modo libre: chat completions de OpenAI, el texto se parsea localmente
    OpenAi,
    /// Modo restringido por schema: messages de Anthropic con salida estructurada
    Anthropic,
}

impl FromStr for ExtractionBackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(anyhow::anyhow!(
                "EXTRACTION_BACKEND desconocido: '{}' (valores válidos: openai, anthropic)",
                other
            )),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    /// Backend seleccionado para la extracción
    pub extraction_backend: ExtractionBackendKind,
    /// Credencial del backend OpenAI (variable API_KEY)
    pub api_key: Option<String>,
    /// Credencial del backend Anthropic (variable ANTHROPIC_API_KEY)
    pub anthropic_api_key: Option<String>,
    pub openai_model: String,
    pub anthropic_model: String,
    /// Timeout de la llamada saliente, en segundos. Sin valor no se configura
    /// ningún timeout (comportamiento por defecto del cliente).
    pub request_timeout_seconds: Option<u64>,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> anyhow::Result<Self> {
        let extraction_backend = env::var("EXTRACTION_BACKEND")
            .unwrap_or_else(|_| "anthropic".to_string())
            .parse::<ExtractionBackendKind>()?;

        let request_timeout_seconds = match env::var("REQUEST_TIMEOUT_SECONDS") {
            Ok(value) => Some(value.parse::<u64>().map_err(|_| {
                anyhow::anyhow!("REQUEST_TIMEOUT_SECONDS debe ser un número de segundos")
            })?),
            Err(_) => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT debe ser un número de puerto válido"))?,
            extraction_backend,
            api_key: env::var("API_KEY").ok(),
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| "claude-3-sonnet-20240229".to_string()),
            request_timeout_seconds,
        })
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
