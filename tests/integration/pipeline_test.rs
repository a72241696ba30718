//! Generation Pipeline Integration Tests
//!
//! Verifies the fixed section order, the empty `flows` placeholder and the
//! fail-fast behaviour for missing templates and backend failures.

use requirements_analyzer::models::RequirementText;
use requirements_analyzer::services::{DirectoryPromptStore, PromptStore};
use requirements_analyzer::storage::StaticCredential;
use requirements_analyzer::{
    generate_all, AnalyzerConfig, AnalyzerError, RequirementsAnalyzer, SectionName,
};

use super::support::ScriptedProvider;

fn requirement() -> RequirementText {
    RequirementText::new("Shoppers can save a basket and pay later.").unwrap()
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_complete_run_has_fixed_keys_in_order() {
    let provider = ScriptedProvider::always_ok(&["summary", "stories", "criteria", "cases"]);
    let result = generate_all(&requirement(), &PromptStore::builtin(), &provider, 1200)
        .await
        .unwrap();

    assert_eq!(
        result.keys(),
        vec![
            SectionName::Summary,
            SectionName::UserStories,
            SectionName::AcceptanceCriteria,
            SectionName::TestCases,
            SectionName::Flows,
        ]
    );
    assert_eq!(result.get(SectionName::Summary), "summary");
    assert_eq!(result.get(SectionName::UserStories), "stories");
    assert_eq!(result.get(SectionName::AcceptanceCriteria), "criteria");
    assert_eq!(result.get(SectionName::TestCases), "cases");
    assert_eq!(result.get(SectionName::Flows), "");
    assert_eq!(provider.calls(), 4);
}

#[tokio::test]
async fn test_every_prompt_carries_the_requirement() {
    let provider = ScriptedProvider::always_ok(&["a", "b", "c", "d"]);
    generate_all(&requirement(), &PromptStore::builtin(), &provider, 1200)
        .await
        .unwrap();

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 4);
    for prompt in prompts {
        assert!(prompt.contains("Shoppers can save a basket and pay later."));
        assert!(!prompt.contains("{requirement}"));
    }
}

#[tokio::test]
async fn test_result_serializes_as_ordered_map() {
    let provider = ScriptedProvider::always_ok(&["a", "b", "c", "d"]);
    let result = generate_all(&requirement(), &PromptStore::builtin(), &provider, 1200)
        .await
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"summary":"a","user_stories":"b","acceptance_criteria":"c","test_cases":"d","flows":""}"#
    );
}

#[tokio::test]
async fn test_repeated_runs_reissue_every_request() {
    let provider = ScriptedProvider::always_ok(&["a", "b", "c", "d", "a", "b", "c", "d"]);
    let first = generate_all(&requirement(), &PromptStore::builtin(), &provider, 1200)
        .await
        .unwrap();
    let second = generate_all(&requirement(), &PromptStore::builtin(), &provider, 1200)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.calls(), 8);
}

// ============================================================================
// Fail-Fast
// ============================================================================

#[tokio::test]
async fn test_backend_failure_on_section_k_makes_exactly_k_calls() {
    for k in 1..=4 {
        let provider = ScriptedProvider::failing_at(k);
        let err = generate_all(&requirement(), &PromptStore::builtin(), &provider, 1200)
            .await
            .unwrap_err();

        assert_eq!(provider.calls(), k, "failure at section {k}");
        assert_eq!(err.failed_section(), Some(SectionName::GENERATED[k - 1]));
        assert!(matches!(err, AnalyzerError::Generation { .. }));
        assert!(err.to_string().contains("upstream exploded"));
    }
}

#[tokio::test]
async fn test_missing_template_stops_before_later_calls() {
    let prompts = PromptStore::builtin().without(SectionName::AcceptanceCriteria);
    let provider = ScriptedProvider::always_ok(&["a", "b", "c", "d"]);
    let err = generate_all(&requirement(), &prompts, &provider, 1200)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnalyzerError::TemplateMissing {
            section: SectionName::AcceptanceCriteria,
            ..
        }
    ));
    // summary and user_stories were already spent
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_missing_first_template_makes_no_calls() {
    let temp_dir = tempfile::tempdir().unwrap();
    let provider = ScriptedProvider::always_ok(&["a"]);
    let err = generate_all(
        &requirement(),
        &DirectoryPromptStore::new(temp_dir.path()),
        &provider,
        1200,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("summary.txt"));
    assert!(err.is_configuration_error());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_template_without_placeholder_is_rejected() {
    let prompts = PromptStore::builtin().with_template(SectionName::Summary, "No marker here");
    let provider = ScriptedProvider::always_ok(&["a"]);
    let err = generate_all(&requirement(), &prompts, &provider, 1200)
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::TemplateInvalid { .. }));
    assert_eq!(provider.calls(), 0);
}

// ============================================================================
// Analyzer Wiring
// ============================================================================

#[tokio::test]
async fn test_analyzer_uses_configured_prompts_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    for section in SectionName::GENERATED {
        std::fs::write(
            temp_dir.path().join(section.template_file_name()),
            format!("[{}] {{requirement}}", section.key()),
        )
        .unwrap();
    }
    let config = AnalyzerConfig {
        prompts_dir: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };
    let analyzer =
        RequirementsAnalyzer::from_config(config).with_credential(StaticCredential::absent());
    let provider = ScriptedProvider::always_ok(&["a", "b", "c", "d"]);

    analyzer
        .analyze_with(&requirement(), &provider)
        .await
        .unwrap();

    let prompts = provider.prompts();
    assert!(prompts[0].starts_with("[summary] Shoppers"));
    assert!(prompts[3].starts_with("[test_cases] Shoppers"));
}

#[tokio::test]
async fn test_empty_requirement_never_reaches_backend() {
    let analyzer = RequirementsAnalyzer::from_config(AnalyzerConfig::default())
        .with_credential(StaticCredential::new("sk-test"));
    let err = analyzer.analyze("  \t\n").await.unwrap_err();
    assert!(matches!(err, AnalyzerError::EmptyRequirement));
}
