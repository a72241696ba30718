//! Credential Sources
//!
//! Where the backend API key comes from. The pipeline only asks for
//! "a non-blank key or nothing"; the layering of secret stores lives here.
//! Sources are read on every call, never cached.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::AnalyzerConfig;

/// Name of the API key in the environment and in secrets files
pub const API_KEY_NAME: &str = "OPENAI_API_KEY";

/// Something that can supply the backend credential.
pub trait CredentialSource: Send + Sync {
    /// The credential, or `None` when this source has no usable value.
    fn get_credential(&self) -> Option<String>;

    /// Short description used in log and error messages.
    fn describe(&self) -> String;
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads the credential from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(API_KEY_NAME)
    }
}

impl CredentialSource for EnvCredential {
    fn get_credential(&self) -> Option<String> {
        env::var(&self.var).ok().and_then(non_blank)
    }

    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }
}

/// Reads the credential from a top-level key of a TOML secrets file.
///
/// A missing, unreadable or malformed file counts as "no credential".
#[derive(Debug, Clone)]
pub struct SecretsFileCredential {
    path: PathBuf,
    key: String,
}

impl SecretsFileCredential {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: API_KEY_NAME.to_string(),
        }
    }

    /// Use a different key inside the file.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    fn read(path: &Path, key: &str) -> Option<String> {
        let content = fs::read_to_string(path).ok()?;
        let table = match content.parse::<toml::Table>() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed secrets file");
                return None;
            }
        };
        table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .and_then(non_blank)
    }
}

impl CredentialSource for SecretsFileCredential {
    fn get_credential(&self) -> Option<String> {
        Self::read(&self.path, &self.key)
    }

    fn describe(&self) -> String {
        format!("{} in {}", self.key, self.path.display())
    }
}

/// A fixed credential, mainly for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredential {
    fn get_credential(&self) -> Option<String> {
        self.0.clone().and_then(non_blank)
    }

    fn describe(&self) -> String {
        "static credential".to_string()
    }
}

/// Tries each source in order; the first non-blank value wins.
#[derive(Default)]
pub struct ChainedCredential {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainedCredential {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Secrets file from the config first, then `OPENAI_API_KEY`.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new()
            .with_source(SecretsFileCredential::new(&config.secrets_path))
            .with_source(EnvCredential::default())
    }
}

impl CredentialSource for ChainedCredential {
    fn get_credential(&self) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let value = source.get_credential();
            if value.is_some() {
                tracing::debug!(source = %source.describe(), "credential resolved");
            }
            value
        })
    }

    fn describe(&self) -> String {
        self.sources
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(", then ")
    }
}
