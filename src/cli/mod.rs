//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, help generation, and shell
//! completion.

pub mod app;
pub mod completion;

// Re-export main types
pub use app::*;
pub use completion::*;
