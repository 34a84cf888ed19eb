//! Arithmetic core
//!
//! This module holds the arithmetic primitives, the operation set, and the
//! dispatch layer that connects them to the command line.

pub mod dispatch;
pub mod format;
pub mod operation;
pub mod primitives;

// Re-export main types
pub use dispatch::*;
pub use format::*;
pub use operation::*;
