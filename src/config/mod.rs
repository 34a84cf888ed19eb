//! Configuration parsing and validation
//!
//! This module handles discovery and parsing of calculator.yml settings
//! files, environment overrides, and merging everything into [`Settings`].

pub mod parse;
pub mod schema;
pub mod settings;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use settings::*;
pub use types::*;
