//! JSON Configuration Management
//!
//! Resolves the effective `AnalyzerConfig`: defaults, then an optional JSON
//! config file, then `ANALYZER_*` environment overrides, then validation.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::{AnalyzerConfig, SettingsUpdate};
use crate::utils::error::{AnalyzerError, AnalyzerResult};
use crate::utils::paths::{config_path, ensure_dir};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "ANALYZER_CONFIG";

/// Configuration loader
#[derive(Debug, Default)]
pub struct ConfigService;

impl ConfigService {
    /// Load the effective configuration from the process environment.
    ///
    /// `ANALYZER_CONFIG` wins over `~/.requirements-analyzer/config.json`; the
    /// latter is only read when it exists.
    pub fn load() -> AnalyzerResult<AnalyzerConfig> {
        let file = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => config_path().ok().filter(|p| p.exists()),
        };
        let overrides = SettingsUpdate::from_env().map_err(AnalyzerError::config)?;
        Self::load_layered(file.as_deref(), overrides)
    }

    /// Layer an optional config file and explicit overrides over the defaults.
    pub fn load_layered(
        file: Option<&Path>,
        overrides: SettingsUpdate,
    ) -> AnalyzerResult<AnalyzerConfig> {
        let mut config = match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load_from_file(path)?
            }
            None => AnalyzerConfig::default(),
        };
        config.apply_update(overrides);
        config.validate().map_err(AnalyzerError::validation)?;
        Ok(config)
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AnalyzerResult<AnalyzerConfig> {
        let content = fs::read_to_string(path)?;
        let config: AnalyzerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    pub fn save_to_file(path: &Path, config: &AnalyzerConfig) -> AnalyzerResult<()> {
        config.validate().map_err(AnalyzerError::validation)?;
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }
}
