//! Tracing setup and span helpers.
//!
//! Spans:
//! - `analyzer.run` - one requirement-analysis run
//! - `analyzer.section` - one section's backend call

use tracing::{info_span, Span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies. Safe to call more
/// than once, later calls are ignored.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Span covering a whole run.
pub fn run_span(model: &str, token_budget: u32) -> Span {
    info_span!("analyzer.run", model = %model, token_budget)
}

/// Span covering one section's generation.
pub fn section_span(section: &str) -> Span {
    info_span!("analyzer.section", section = %section)
}
