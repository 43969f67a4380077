//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the guildkeep binary.

mod check;
mod commands;
mod inspect;

pub use check::run_check;
pub use commands::{Cli, Commands};
pub use inspect::run_inspect;
