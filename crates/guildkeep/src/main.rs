//! Guildkeep CLI binary.
//!
//! This binary provides operator access to Guildkeep's state:
//! - Check settings, credential, and table health before starting a bot
//! - Inspect one guild's configuration and standings

use clap::Parser;
use guildkeep::{GuildkeepSettings, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_check, run_inspect};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = GuildkeepSettings::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        settings = settings.with_data_dir(data_dir);
    }

    init_tracing(&settings)?;

    // Execute the requested command
    match cli.command {
        Commands::Check => {
            run_check(&settings).await?;
        }

        Commands::Inspect { guild, top } => {
            run_inspect(&settings, guild, top).await?;
        }
    }

    Ok(())
}
