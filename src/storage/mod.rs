//! Storage Layer
//!
//! Configuration file loading and credential sources.

pub mod config;
pub mod secrets;

pub use config::*;
pub use secrets::*;
