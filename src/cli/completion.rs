//! Shell completion scripts

use crate::cli::app::build_command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the completion script for `shell`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = build_command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
