//! Ollama HTTP client for chat completion.
//!
//! Uses the Ollama API at /api/chat with streaming disabled. Every call
//! sends exactly two messages: the system instruction and the user turn.

use std::time::Duration;

use async_trait::async_trait;
use kgb_core::config::ModelSettings;
use kgb_core::{KgbError, KgbResult, ModelInvoker};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ollama chat client.
#[derive(Clone)]
pub struct OllamaChat {
    base_url: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

impl OllamaChat {
    /// Create a new client from model settings.
    pub fn new(settings: &ModelSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            client,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request<'a>(&'a self, system: &'a str, human: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: human,
                },
            ],
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
            },
        }
    }

    /// Check if the Ollama service is reachable and the model is pulled.
    pub async fn health_check(&self) -> bool {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let text = resp.text().await.unwrap_or_default();
                text.contains(&self.model)
            }
            _ => false,
        }
    }
}

#[async_trait]
impl ModelInvoker for OllamaChat {
    async fn complete(&self, system: &str, human: &str) -> KgbResult<String> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&self.request(system, human))
            .send()
            .await
            .map_err(|e| KgbError::model(format!("Failed to connect to Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if body.contains("model") && body.contains("not found") {
                return Err(KgbError::model(format!(
                    "Model '{}' not found. Pull it with: ollama pull {}",
                    self.model, self.model
                )));
            }
            return Err(KgbError::model(format!("Ollama API error ({}): {}", status, body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| KgbError::model(format!("Failed to read Ollama response: {}", e)))?;
        let content = parse_reply(&body)?;

        debug!(model = %self.model, chars = content.len(), "Chat completion");
        Ok(content)
    }

    async fn is_available(&self) -> bool {
        self.health_check().await
    }
}

/// Pull the reply text out of a non-streaming chat response body.
fn parse_reply(body: &str) -> KgbResult<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| KgbError::model(format!("Failed to parse Ollama response: {}", e)))?;

    if parsed.message.content.trim().is_empty() {
        return Err(KgbError::model("Ollama returned an empty reply"));
    }
    Ok(parsed.message.content)
}
