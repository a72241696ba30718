//! Cross-Platform Path Utilities
//!
//! Functions for resolving the analyzer's per-user directory (~/.requirements-analyzer/).

use std::path::{Path, PathBuf};

use crate::utils::error::{AnalyzerError, AnalyzerResult};

/// Get the user's home directory
pub fn home_dir() -> AnalyzerResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AnalyzerError::config("Could not determine home directory"))
}

/// Get the analyzer directory (~/.requirements-analyzer/)
pub fn analyzer_dir() -> AnalyzerResult<PathBuf> {
    Ok(home_dir()?.join(".requirements-analyzer"))
}

/// Get the default config file path (~/.requirements-analyzer/config.json)
pub fn config_path() -> AnalyzerResult<PathBuf> {
    Ok(analyzer_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AnalyzerResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
