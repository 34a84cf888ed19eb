//! Output context for diagnostics
//!
//! Stdout carries only the result line. Everything else goes through the
//! context, which writes prefixed lines to stderr depending on verbosity.

use colored::Colorize;

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    #[default]
    Normal = 1,
    Verbose = 2,
}

/// Diagnostic settings for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbosity level
    pub verbosity: Verbosity,

    /// Whether diagnostics may be colored
    pub color: bool,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            verbosity: Verbosity::Normal,
            color: true,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Enable or disable colored diagnostics
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Apply the color choice to the process-wide `colored` state
    ///
    /// `NO_COLOR` and `CLICOLOR` are still honored when color is enabled.
    pub fn apply_color_choice(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Print error message
    ///
    /// Errors are printed at every verbosity.
    pub fn print_error(&self, message: &str) {
        eprintln!("{}", error_line(message));
    }

    /// Print warning message
    pub fn print_warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[WARN]".yellow(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }
}

/// Fatal error line, `Error: <message>`
fn error_line(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
