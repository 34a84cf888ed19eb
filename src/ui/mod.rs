//! Terminal diagnostics

pub mod context;

pub use context::*;
