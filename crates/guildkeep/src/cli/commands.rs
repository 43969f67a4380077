//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Guildkeep - guild-scoped moderation, leveling, and economy state
#[derive(Parser, Debug)]
#[command(name = "guildkeep")]
#[command(about = "Guild-scoped moderation, leveling, and economy state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file laid over the discovered ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify settings, the platform credential, and every table
    Check,

    /// Print one guild's configuration, warnings, and leaderboards
    Inspect {
        /// Guild to inspect
        #[arg(long)]
        guild: u64,

        /// Entries per leaderboard
        #[arg(long, default_value = "10")]
        top: usize,
    },
}
