//! Utilities
//!
//! Common utilities used throughout the analyzer.

pub mod error;
pub mod paths;

pub use error::*;
pub use paths::*;
