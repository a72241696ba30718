//! OpenAI Provider
//!
//! Implementation of the LlmProvider trait for OpenAI's chat-completions API
//! (and any endpoint compatible with it, via `base_url`).

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{missing_api_key_error, parse_http_error, LlmProvider};
use super::types::{
    LlmError, LlmRequestOptions, LlmResponse, LlmResult, Message, MessageRole, ProviderConfig,
    StopReason, UsageStats,
};
use crate::http_client::build_http_client;

/// Default OpenAI API endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI provider
pub struct OpenAIProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider with the given configuration
    pub fn new(config: ProviderConfig) -> LlmResult<Self> {
        let client = build_http_client(config.proxy.as_deref())?;
        Ok(Self { config, client })
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(
        &self,
        messages: &[Message],
        system: Option<&str>,
        request_options: &LlmRequestOptions,
    ) -> serde_json::Value {
        let max_tokens = request_options
            .max_tokens_override
            .unwrap_or(self.config.max_tokens);
        let temperature = request_options
            .temperature_override
            .unwrap_or(self.config.temperature);

        let mut openai_messages: Vec<serde_json::Value> = Vec::with_capacity(messages.len() + 1);

        if let Some(sys) = system {
            openai_messages.push(serde_json::json!({
                "role": MessageRole::System.as_str(),
                "content": sys
            }));
        }

        for msg in messages {
            openai_messages.push(serde_json::json!({
                "role": msg.role.as_str(),
                "content": msg.content
            }));
        }

        serde_json::json!({
            "model": self.config.model,
            "messages": openai_messages,
            "max_tokens": max_tokens,
            "temperature": temperature,
            "stream": false,
        })
    }

    /// Parse a response from OpenAI API.
    ///
    /// Only the first choice is used. A response with no choices is malformed.
    fn parse_response(&self, response: OpenAIResponse) -> LlmResult<LlmResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::ParseError {
                message: "Response contained no choices".to_string(),
            })?;

        let stop_reason = choice
            .finish_reason
            .as_deref()
            .map(StopReason::from)
            .unwrap_or(StopReason::EndTurn);

        let usage = response
            .usage
            .map(|u| UsageStats {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(LlmResponse {
            content: choice.message.and_then(|m| m.content),
            stop_reason,
            usage,
            model: response.model,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
        request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("openai"))?;

        let body = self.build_request_body(&messages, system.as_deref(), &request_options);

        tracing::debug!(
            model = %self.config.model,
            max_tokens = body["max_tokens"].as_u64().unwrap_or_default(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "openai"));
        }

        let openai_response: OpenAIResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        self.parse_response(openai_response)
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<ResponseUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
