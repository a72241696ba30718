//! Settings Models
//!
//! Analyzer configuration and partial updates layered on top of it.

use std::env;
use std::path::PathBuf;

use requirements_analyzer_llm::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Smallest accepted per-section token budget
pub const MIN_MAX_TOKENS: u32 = 256;

/// Largest accepted per-section token budget
pub const MAX_MAX_TOKENS: u32 = 3000;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Analyzer configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Chat model used for every section
    pub model: String,
    /// Response token budget per section
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Directory holding `<section>.txt` templates. `None` uses the built-in set.
    pub prompts_dir: Option<PathBuf>,
    /// Directory where exported documents are written
    pub output_dir: PathBuf,
    /// Chat-completions endpoint override
    pub base_url: Option<String>,
    /// Proxy URL for backend requests
    pub proxy: Option<String>,
    /// TOML secrets file consulted before the environment for the API key
    pub secrets_path: PathBuf,
    /// Log level: trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1200,
            temperature: 0.7,
            prompts_dir: None,
            output_dir: PathBuf::from("."),
            base_url: None,
            proxy: None,
            secrets_path: PathBuf::from(".streamlit").join("secrets.toml"),
            log_level: "info".to_string(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SettingsUpdate {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub prompts_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub proxy: Option<String>,
    pub secrets_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl SettingsUpdate {
    /// Collect overrides from `ANALYZER_*` environment variables.
    ///
    /// Unparseable numbers are reported rather than ignored.
    pub fn from_env() -> Result<Self, String> {
        let mut update = SettingsUpdate {
            model: env::var("ANALYZER_MODEL").ok(),
            prompts_dir: env::var("ANALYZER_PROMPTS_DIR").ok().map(PathBuf::from),
            output_dir: env::var("ANALYZER_OUTPUT_DIR").ok().map(PathBuf::from),
            base_url: env::var("ANALYZER_BASE_URL").ok(),
            proxy: env::var("ANALYZER_PROXY").ok(),
            secrets_path: env::var("ANALYZER_SECRETS_PATH").ok().map(PathBuf::from),
            log_level: env::var("ANALYZER_LOG_LEVEL").ok(),
            ..Default::default()
        };

        if let Ok(raw) = env::var("ANALYZER_MAX_TOKENS") {
            let value = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("ANALYZER_MAX_TOKENS is not a number: {}", raw))?;
            update.max_tokens = Some(value);
        }
        if let Ok(raw) = env::var("ANALYZER_TEMPERATURE") {
            let value = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| format!("ANALYZER_TEMPERATURE is not a number: {}", raw))?;
            update.temperature = Some(value);
        }

        Ok(update)
    }
}

impl AnalyzerConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(max_tokens) = update.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(dir) = update.prompts_dir {
            self.prompts_dir = Some(dir);
        }
        if let Some(dir) = update.output_dir {
            self.output_dir = dir;
        }
        if let Some(url) = update.base_url {
            self.base_url = Some(url);
        }
        if let Some(proxy) = update.proxy {
            self.proxy = Some(proxy);
        }
        if let Some(path) = update.secrets_path {
            self.secrets_path = path;
        }
        if let Some(level) = update.log_level {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model cannot be empty".to_string());
        }

        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&self.max_tokens) {
            return Err(format!(
                "max_tokens must be between {} and {}, got {}",
                MIN_MAX_TOKENS, MAX_MAX_TOKENS, self.max_tokens
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Valid levels: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("base_url must be an http(s) URL, got '{}'", url));
            }
        }

        Ok(())
    }

    /// Provider configuration for one run, carrying the credential read for it.
    pub fn provider_config(&self, api_key: String) -> ProviderConfig {
        ProviderConfig {
            api_key: Some(api_key),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            proxy: self.proxy.clone(),
        }
    }
}
