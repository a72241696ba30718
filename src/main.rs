//! Requirements Analyzer - command-line entry point
//!
//! Reads the requirement from the file named by `ANALYZER_INPUT` (DOCX, PDF
//! or text) or from stdin, prints every generated section and writes the
//! exported Word document into the configured output directory.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use requirements_analyzer::services::extract_file;
use requirements_analyzer::telemetry::init_tracing;
use requirements_analyzer::{ConfigService, RequirementsAnalyzer};

const INPUT_ENV: &str = "ANALYZER_INPUT";

fn read_requirement() -> Result<String> {
    match std::env::var_os(INPUT_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            extract_file(&path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read requirement from stdin")?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let config = ConfigService::load().context("Failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let requirement = read_requirement()?;
    let analyzer = RequirementsAnalyzer::from_config(config);

    let result = analyzer.analyze(&requirement).await?;
    for (section, text) in result.iter().filter(|(section, _)| section.is_generated()) {
        println!("## {}\n\n{}\n", section.title(), text.trim_end());
    }

    let exported = analyzer.export(&result)?;
    let path = analyzer.save_export(&exported)?;
    println!("Saved {}", path.display());

    Ok(())
}
