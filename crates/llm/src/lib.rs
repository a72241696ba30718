//! Requirements Analyzer LLM
//!
//! Provides the backend seam for section generation:
//! - `LlmProvider` trait: one request in, one complete response out
//! - OpenAI chat-completions implementation
//! - HTTP client factory with optional proxy
//!
//! No streaming and no conversation state; every call is independent.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;
