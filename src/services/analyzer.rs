//! Requirements Analyzer
//!
//! Wires configuration, prompt templates and the credential source into a
//! generation run, and exports its result.

use std::path::PathBuf;

use requirements_analyzer_core::GenerationResult;
use requirements_analyzer_llm::{LlmProvider, OpenAIProvider};

use crate::models::export::ExportedDocument;
use crate::models::requirement::RequirementText;
use crate::models::settings::AnalyzerConfig;
use crate::services::export::export_document;
use crate::services::generator::generate_all;
use crate::services::prompts::{DirectoryPromptStore, PromptSource, PromptStore};
use crate::storage::secrets::{ChainedCredential, CredentialSource};
use crate::utils::error::{AnalyzerError, AnalyzerResult};
use crate::utils::paths::ensure_dir;

/// Entry point for one requirement-analysis session.
///
/// Holds no state between runs; the credential is read on every `analyze`.
pub struct RequirementsAnalyzer {
    config: AnalyzerConfig,
    prompts: Box<dyn PromptSource>,
    credential: Box<dyn CredentialSource>,
}

impl RequirementsAnalyzer {
    /// Build from configuration: templates from `prompts_dir` (or the
    /// built-in set) and the secrets-file-then-environment credential chain.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        let prompts: Box<dyn PromptSource> = match &config.prompts_dir {
            Some(dir) => Box::new(DirectoryPromptStore::new(dir)),
            None => Box::new(PromptStore::builtin()),
        };
        let credential = Box::new(ChainedCredential::from_config(&config));
        Self {
            config,
            prompts,
            credential,
        }
    }

    pub fn with_prompts(mut self, prompts: impl PromptSource + 'static) -> Self {
        self.prompts = Box::new(prompts);
        self
    }

    pub fn with_credential(mut self, credential: impl CredentialSource + 'static) -> Self {
        self.credential = Box::new(credential);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the pipeline against the configured OpenAI-compatible backend.
    pub async fn analyze(&self, text: &str) -> AnalyzerResult<GenerationResult> {
        let requirement = RequirementText::new(text)?;
        let provider = self.provider()?;
        self.analyze_with(&requirement, &provider).await
    }

    /// Run the pipeline against an explicit provider.
    pub async fn analyze_with(
        &self,
        requirement: &RequirementText,
        provider: &dyn LlmProvider,
    ) -> AnalyzerResult<GenerationResult> {
        generate_all(
            requirement,
            self.prompts.as_ref(),
            provider,
            self.config.max_tokens,
        )
        .await
    }

    fn provider(&self) -> AnalyzerResult<OpenAIProvider> {
        let api_key = self.credential.get_credential().ok_or_else(|| {
            AnalyzerError::MissingCredential(format!(
                "No API key found in {}",
                self.credential.describe()
            ))
        })?;
        OpenAIProvider::new(self.config.provider_config(api_key))
            .map_err(|e| AnalyzerError::config(format!("Failed to create backend client: {}", e)))
    }

    /// Render a result as a Word document.
    pub fn export(&self, result: &GenerationResult) -> AnalyzerResult<ExportedDocument> {
        export_document(result)
    }

    /// Write an exported document into the configured output directory.
    pub fn save_export(&self, exported: &ExportedDocument) -> AnalyzerResult<PathBuf> {
        ensure_dir(&self.config.output_dir)?;
        let path = self.config.output_dir.join(&exported.file_name);
        std::fs::write(&path, &exported.bytes)?;
        tracing::info!(path = %path.display(), "saved exported document");
        Ok(path)
    }
}
