//! Data Models
//!
//! Configuration, input and output data structures.

pub mod export;
pub mod requirement;
pub mod settings;

pub use export::*;
pub use requirement::*;
pub use settings::*;
