//! Ollama gateway — the client for the locally hosted model.
//!
//! A thin pass-through over the local model's HTTP API:
//! `POST /api/generate`, `POST /api/chat`, and `GET /api/tags`.
//! One attempt per call, no retries, no streaming consumption, no
//! circuit breaking. Request and response JSON are forwarded as-is;
//! absent response fields become empty strings rather than errors.
//!
//! Exactly one gateway instance is shared across every agent in a swarm.

use async_trait::async_trait;
use hynicl_core::error::GatewayError;
use hynicl_core::gateway::Gateway;
use hynicl_core::message::ChatMessage;
use serde::Deserialize;
use tracing::debug;

/// Client for an Ollama-style local model endpoint.
///
/// Stateless across calls except for connection reuse inside the
/// underlying `reqwest::Client`.
pub struct OllamaGateway {
    base_url: String,
    model: String,
    temperature: f32,
    keep_alive: String,
    client: reqwest::Client,
}

impl OllamaGateway {
    /// Create a gateway bound to one endpoint and one model.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        keep_alive: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
            keep_alive: keep_alive.into(),
            client,
        }
    }

    /// Convenience constructor for the default local endpoint.
    pub fn localhost(model: impl Into<String>) -> Self {
        Self::new("http://localhost:11434", model, 0.7, "10m")
    }

    async fn post_json(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, GatewayError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status_code: status,
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Gateway for OllamaGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "keep_alive": self.keep_alive,
            "options": { "temperature": self.temperature },
        });

        debug!(model = %self.model, "Sending generate request");

        let response = self.post_json(&url, body).await?;
        let envelope: GenerateResponse =
            response.json().await.map_err(|e| GatewayError::Api {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        // Pass-through: an absent completion field is an empty string.
        Ok(envelope.response.unwrap_or_default())
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, GatewayError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "keep_alive": self.keep_alive,
            "options": { "temperature": self.temperature },
        });

        debug!(model = %self.model, turns = messages.len(), "Sending chat request");

        let response = self.post_json(&url, body).await?;
        let envelope: ChatResponse = response.json().await.map_err(|e| GatewayError::Api {
            status_code: 200,
            message: format!("Failed to parse response: {e}"),
        })?;

        Ok(envelope
            .message
            .and_then(|m| m.content)
            .unwrap_or_default())
    }

    async fn list_models(&self) -> Result<Vec<String>, GatewayError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status_code: status,
                message,
            });
        }

        let envelope: TagsResponse = response.json().await.map_err(|e| GatewayError::Api {
            status_code: 200,
            message: format!("Failed to parse response: {e}"),
        })?;

        Ok(envelope.models.into_iter().map(|m| m.name).collect())
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// --- Local model API envelopes (internal) ---

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Debug, Deserialize)]
struct TagModel {
    name: String,
}
