//! Backend de extracción en modo restringido por schema (Anthropic messages)
//!
//! El schema del vehículo se entrega como una tool forzada
//! (`tool_choice: {"type": "tool"}`), de modo que el proveedor restringe la
//! salida al schema y devuelve el valor ya estructurado en el bloque
//! `tool_use`. Este servicio solo deserializa ese valor a la ficha tipada.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::extraction_backend::StructuredExtractionBackend;
use crate::services::prompt::build_schema_prompt;
use crate::models::{VehicleSpecification, VEHICLE_JSON_SCHEMA};
use crate::utils::errors::AppError;

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Nombre de la tool que transporta el schema
const EXTRACTION_TOOL_NAME: &str = "vehicle_specifications";

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
    tools: Vec<Tool>,
    tool_choice: ToolChoice,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    description: &'static str,
    input_schema: Value,
}

#[derive(Debug, Serialize)]
struct ToolChoice {
    #[serde(rename = "type")]
    choice_type: &'static str,
    name: &'static str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    input: Option<Value>,
}

pub struct AnthropicExtractionService {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl AnthropicExtractionService {
    pub fn new(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            model,
            client,
        }
    }
}

#[async_trait]
impl StructuredExtractionBackend for AnthropicExtractionService {
    async fn extract_specifications(
        &self,
        description: &str,
    ) -> Result<VehicleSpecification, AppError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: 1024,
            temperature: 0.2,
            messages: vec![Message {
                role: "user",
                content: build_schema_prompt(description),
            }],
            tools: vec![Tool {
                name: EXTRACTION_TOOL_NAME,
                description: "Technical specifications of a vehicle.",
                input_schema: VEHICLE_JSON_SCHEMA.clone(),
            }],
            tool_choice: ToolChoice {
                choice_type: "tool",
                name: EXTRACTION_TOOL_NAME,
            },
        };

        let response = self
            .client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Anthropic devolvió {}: {}",
                status, error_text
            )));
        }

        let messages: MessagesResponse = response.json().await.map_err(|e| {
            AppError::ExternalApi(format!("Respuesta de Anthropic no reconocida: {}", e))
        })?;

        parse_tool_use(messages)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

/// Extraer la ficha del bloque `tool_use` de la respuesta
fn parse_tool_use(response: MessagesResponse) -> Result<VehicleSpecification, AppError> {
    let input = response
        .content
        .into_iter()
        .find(|block| block.block_type == "tool_use")
        .and_then(|block| block.input)
        .ok_or_else(|| {
            AppError::SchemaDecode(
                "la respuesta de Anthropic no contiene ningún bloque tool_use".to_string(),
            )
        })?;

    serde_json::from_value(input).map_err(|e| AppError::SchemaDecode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extrae_la_ficha_del_bloque_tool_use() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "content": [
                { "type": "text", "input": null },
                {
                    "type": "tool_use",
                    "input": {
                        "brand": "Toyota",
                        "model": "Corolla",
                        "year": 2023,
                        "technology": "HEV"
                    }
                }
            ]
        }))
        .unwrap();

        let spec = parse_tool_use(response).unwrap();
        assert_eq!(spec.brand.as_deref(), Some("Toyota"));
        assert_eq!(spec.price, None);
    }

    #[test]
    fn una_respuesta_sin_tool_use_es_error_de_decodificacion() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "content": [ { "type": "text" } ]
        }))
        .unwrap();

        assert!(matches!(
            parse_tool_use(response),
            Err(AppError::SchemaDecode(_))
        ));
    }

    #[test]
    fn la_peticion_fuerza_la_tool_del_schema() {
        let request = MessagesRequest {
            model: "claude-3-sonnet-20240229".to_string(),
            max_tokens: 1024,
            temperature: 0.2,
            messages: vec![Message {
                role: "user",
                content: "test".to_string(),
            }],
            tools: vec![Tool {
                name: EXTRACTION_TOOL_NAME,
                description: "Technical specifications of a vehicle.",
                input_schema: VEHICLE_JSON_SCHEMA.clone(),
            }],
            tool_choice: ToolChoice {
                choice_type: "tool",
                name: EXTRACTION_TOOL_NAME,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tool_choice"]["type"], json!("tool"));
        assert_eq!(value["tool_choice"]["name"], json!("vehicle_specifications"));
        assert_eq!(
            value["tools"][0]["input_schema"]["title"],
            json!("vehicle_specifications")
        );
    }
}
