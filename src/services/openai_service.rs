//! Backend de extracción en modo libre (OpenAI chat completions)
//!
//! El schema viaja solo como texto dentro del prompt; el proveedor devuelve
//! texto plano que este servicio debe parsear como JSON. Un fallo de parseo
//! es un `SchemaDecode`, distinto del fallo de transporte, nunca se traga en
//! silencio.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::extraction_backend::StructuredExtractionBackend;
use crate::services::prompt::build_free_form_prompt;
use crate::models::VehicleSpecification;
use crate::utils::errors::AppError;

const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiExtractionService {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiExtractionService {
    pub fn new(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            model,
            client,
        }
    }
}

#[async_trait]
impl StructuredExtractionBackend for OpenAiExtractionService {
    async fn extract_specifications(
        &self,
        description: &str,
    ) -> Result<VehicleSpecification, AppError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a helpful assistant.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_free_form_prompt(description),
                },
            ],
            max_tokens: 1000,
            temperature: 0.3,
        };

        let response = self
            .client
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OpenAI devolvió {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::ExternalApi(format!("Respuesta de OpenAI no reconocida: {}", e))
        })?;

        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
            AppError::ExternalApi("OpenAI no devolvió ninguna respuesta".to_string())
        })?;

        tracing::debug!("📄 Respuesta del modelo: {}", content);

        parse_specification_text(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Parsear el texto devuelto por el modelo como una ficha técnica
///
/// El prompt pide SOLO el JSON, pero los modelos suelen envolverlo en vallas
/// de código Markdown; se toleran antes de parsear.
fn parse_specification_text(content: &str) -> Result<VehicleSpecification, AppError> {
    let payload = strip_code_fences(content);

    serde_json::from_str(payload).map_err(|e| AppError::SchemaDecode(e.to_string()))
}

fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // La primera línea puede llevar la etiqueta del lenguaje ("json")
    let inner = match inner.split_once('\n') {
        Some((_, rest)) => rest,
        None => inner,
    };

    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_json_sin_vallas() {
        let spec = parse_specification_text(
            r#"{"brand": "Toyota", "model": "Corolla", "year": 2023, "version": null,
                "body_type": null, "doors": null, "status": null, "length": null,
                "seats": null, "price": null, "technology": "HEV", "transmission": null,
                "fuel_consumption": null, "fuel_type": null, "electric_range": null,
                "battery_capacity": null, "electric_consumption": null, "charging_time": null,
                "duplicate_date": null, "max_power": null, "acceleration": null,
                "displacement": null, "environmental_label": null, "co2_emissions": null,
                "tank_capacity": null, "max_speed": null, "maintenance_costs": null,
                "euro_ncap_rating": null, "sources": null}"#,
        )
        .unwrap();

        assert_eq!(spec.brand.as_deref(), Some("Toyota"));
        assert_eq!(spec.year, Some(2023));
    }

    #[test]
    fn tolera_vallas_de_codigo_markdown() {
        let fenced = "```json\n{\"brand\": \"Seat\", \"model\": \"León\", \"version\": null, \"year\": null, \"body_type\": null, \"doors\": null, \"status\": null, \"length\": null, \"seats\": null, \"price\": null, \"technology\": null, \"transmission\": null, \"fuel_consumption\": null, \"fuel_type\": null, \"electric_range\": null, \"battery_capacity\": null, \"electric_consumption\": null, \"charging_time\": null, \"duplicate_date\": null, \"max_power\": null, \"acceleration\": null, \"displacement\": null, \"environmental_label\": null, \"co2_emissions\": null, \"tank_capacity\": null, \"max_speed\": null, \"maintenance_costs\": null, \"euro_ncap_rating\": null, \"sources\": null}\n```";

        let spec = parse_specification_text(fenced).unwrap();
        assert_eq!(spec.brand.as_deref(), Some("Seat"));
    }

    #[test]
    fn el_texto_no_json_es_un_error_de_decodificacion() {
        let result = parse_specification_text("Lo siento, no puedo ayudarte con eso.");

        assert!(matches!(result, Err(AppError::SchemaDecode(_))));
    }
}
