//! Section Generation
//!
//! One backend call per section, driven in fixed order with fail-fast
//! semantics: the first failing section aborts the run and no partial
//! result is returned.

use requirements_analyzer_core::{GenerationResult, SectionName};
use requirements_analyzer_llm::{LlmError, LlmProvider, LlmRequestOptions, LlmResult, Message};
use tracing::Instrument;

use crate::models::requirement::RequirementText;
use crate::services::prompts::{PromptSource, PromptTemplate};
use crate::telemetry::{run_span, section_span};
use crate::utils::error::{AnalyzerError, AnalyzerResult};

/// System turn sent with every section request
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that outputs structured BA artifacts.";

/// Issues single-shot section requests against a provider.
pub struct SectionGenerator<'a> {
    provider: &'a dyn LlmProvider,
}

impl<'a> SectionGenerator<'a> {
    pub fn new(provider: &'a dyn LlmProvider) -> Self {
        Self { provider }
    }

    /// Render the template and send it as the only user turn.
    ///
    /// `token_budget` caps the response, not the prompt. A truncated
    /// response is returned as-is.
    pub async fn generate_section(
        &self,
        template: &PromptTemplate,
        requirement: &RequirementText,
        token_budget: u32,
    ) -> LlmResult<String> {
        let prompt = template.render(requirement.as_str());
        let response = self
            .provider
            .send_message(
                vec![Message::user(prompt)],
                Some(SYSTEM_INSTRUCTION.to_string()),
                LlmRequestOptions::with_token_budget(token_budget),
            )
            .await?;

        if response.is_truncated() {
            tracing::warn!(
                section = %template.section(),
                token_budget,
                "section response hit the token budget"
            );
        }
        tracing::debug!(
            section = %template.section(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "section generated"
        );

        response.content.ok_or_else(|| LlmError::ParseError {
            message: "first choice has no text content".to_string(),
        })
    }
}

/// Generate every section in fixed order.
///
/// Each template is loaded right before its section is generated, so a
/// missing template stops the run before any later backend call.
pub async fn generate_all(
    requirement: &RequirementText,
    prompts: &dyn PromptSource,
    provider: &dyn LlmProvider,
    token_budget: u32,
) -> AnalyzerResult<GenerationResult> {
    let run = async {
        let generator = SectionGenerator::new(provider);
        let mut generated: Vec<(SectionName, String)> =
            Vec::with_capacity(SectionName::GENERATED.len());

        tracing::info!(provider = provider.name(), "starting requirement analysis");

        for section in SectionName::GENERATED {
            let template = prompts.load(section).inspect_err(|e| {
                tracing::warn!(section = %section, error = %e, "prompt template unavailable");
            })?;

            let text = generator
                .generate_section(&template, requirement, token_budget)
                .instrument(section_span(section.key()))
                .await
                .map_err(|source| {
                    tracing::warn!(section = %section, error = %source, "section generation failed");
                    AnalyzerError::Generation { section, source }
                })?;

            generated.push((section, text));
        }

        let result = GenerationResult::from_generated(generated)?;
        tracing::info!(sections = result.len(), "requirement analysis complete");
        Ok::<_, AnalyzerError>(result)
    };
    run.instrument(run_span(provider.model(), token_budget)).await
}
