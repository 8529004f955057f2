//! CLI command handlers
//!
//! This module contains the line shell and the one-shot calculator, bridging
//! clap argument parsing and stdin/stdout with the finance session.

pub mod calc;
pub mod shell;

pub use calc::{handle_calc_command, CalcArgs};
pub use shell::{parse_command, run_shell, CommandError, ShellCommand};
