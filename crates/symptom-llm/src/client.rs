//! OpenAI-compatible chat-completion client for the Grok API.

use std::time::Instant;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use symptom_config::AppConfig;
use symptom_core::AnalysisError;
use tracing::{error, info};

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;

/// Output token cap sent with every request.
pub const MAX_TOKENS: u32 = 1000;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

/// Token usage and timing metrics from a provider call.
#[derive(Debug, Clone, Default)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// Content of the first choice plus call metrics.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}

fn transport_err(e: impl ToString) -> AnalysisError {
    AnalysisError::ProviderTransport(e.to_string())
}

/// Client for the Grok chat-completion API.
pub struct GrokClient {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl GrokClient {
    /// Creates a client for the configured endpoint and model.
    pub fn new(config: &AppConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key: api_key.into(),
        }
    }

    /// Returns the model identifier this client sends.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a system + user exchange and returns the first choice's content.
    ///
    /// No retries; the transport default timeout applies.
    pub async fn complete(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, AnalysisError> {
        let start = Instant::now();

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_input },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_err)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Grok API error {}: {}", status, body);
            return Err(AnalysisError::ProviderTransport(format!(
                "Grok API error: {}",
                status.as_u16()
            )));
        }

        let resp: ChatCompletionResponse = response.json().await.map_err(transport_err)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let (input_tokens, output_tokens) = resp
            .usage
            .map(|u| (u.prompt_tokens.unwrap_or(0), u.completion_tokens.unwrap_or(0)))
            .unwrap_or((0, 0));

        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AnalysisError::ProviderContent("No response from Grok API".into()))?;

        info!(
            "Grok: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, input_tokens, output_tokens
        );

        Ok(LlmResponse {
            content,
            metrics: LlmMetrics { input_tokens, output_tokens, elapsed_ms },
        })
    }
}
