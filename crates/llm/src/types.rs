//! LLM Types
//!
//! Core types for LLM provider interactions.

use serde::{Deserialize, Serialize};

/// Configuration for an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model name to use
    pub model: String,
    /// Maximum tokens to generate when a request carries no override
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Proxy URL, e.g. `http://127.0.0.1:8080` or `socks5://host:1080`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            proxy: None,
        }
    }
}

/// Per-request options for provider behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LlmRequestOptions {
    /// Cap on response tokens for this request. Does not limit the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens_override: Option<u32>,
    /// Optional temperature override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_override: Option<f32>,
}

impl LlmRequestOptions {
    /// Options carrying only a response token budget.
    pub fn with_token_budget(max_tokens: u32) -> Self {
        Self {
            max_tokens_override: Some(max_tokens),
            ..Default::default()
        }
    }
}

/// Role of a message sent to the backend. Only single-turn requests are
/// made, so there is no assistant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

/// A single text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl UsageStats {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the response
    EndTurn,
    /// Response hit the token budget and was truncated
    MaxTokens,
    /// Output withheld by the provider's content filter
    ContentFilter,
    /// Anything else the provider reported
    Other(String),
}

impl From<&str> for StopReason {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "end_turn" | "stop" => StopReason::EndTurn,
            "max_tokens" | "length" => StopReason::MaxTokens,
            "content_filter" => StopReason::ContentFilter,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A complete, non-streamed response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Text of the first completion choice, if it had any
    pub content: Option<String>,
    pub stop_reason: StopReason,
    pub usage: UsageStats,
    /// Model that actually served the request
    pub model: String,
}

impl LlmResponse {
    /// Whether the text was cut off by the token budget.
    pub fn is_truncated(&self) -> bool {
        self.stop_reason == StopReason::MaxTokens
    }
}

/// Errors that can occur during LLM operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LlmError {
    /// Authentication failed (invalid or missing API key)
    AuthenticationFailed { message: String },
    /// Rate limit exceeded
    RateLimited {
        message: String,
        retry_after: Option<u32>,
    },
    /// Model not found or not available
    ModelNotFound { model: String },
    /// Invalid request (bad parameters)
    InvalidRequest { message: String },
    /// Server error from the provider
    ServerError {
        message: String,
        status: Option<u16>,
    },
    /// Network/connection error, including timeouts
    NetworkError { message: String },
    /// Response parsing error, including responses without choices
    ParseError { message: String },
    /// Other error
    Other { message: String },
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            LlmError::RateLimited { message, .. } => {
                write!(f, "Rate limited: {}", message)
            }
            LlmError::ModelNotFound { model } => {
                write!(f, "Model not found: {}", model)
            }
            LlmError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
            LlmError::ServerError { message, status } => {
                if let Some(s) = status {
                    write!(f, "Server error ({}): {}", s, message)
                } else {
                    write!(f, "Server error: {}", message)
                }
            }
            LlmError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            LlmError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            LlmError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for LlmError {}

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;
