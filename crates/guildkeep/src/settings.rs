//! Process settings.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`guildkeep.toml` shipped with the crate)
//! 2. User config in the home directory (`~/.config/guildkeep/guildkeep.toml`)
//! 3. User config in the current directory (`./guildkeep.toml`)
//! 4. An explicit file given on the command line
//! 5. `GUILDKEEP_*` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use guildkeep_error::{ConfigError, GuildkeepError, GuildkeepResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_SETTINGS: &str = include_str!("../../../guildkeep.toml");

/// Settings for one Guildkeep process.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GuildkeepSettings {
    /// Directory holding the table files
    data_dir: PathBuf,
    /// Environment variable holding the platform credential
    token_env: String,
    /// Default tracing filter
    log_level: String,
    /// Emit JSON log lines
    json_logs: bool,
}

impl Default for GuildkeepSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            token_env: "DISCORD_TOKEN".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

fn config_error(context: &str, e: config::ConfigError) -> GuildkeepError {
    ConfigError::new(format!("{}: {}", context, e)).into()
}

impl GuildkeepSettings {
    /// Load settings from every source, with `explicit` (if any) above the
    /// discovered files.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing or any source fails to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> GuildkeepResult<Self> {
        debug!("Loading settings: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user = config_dir.join("guildkeep/guildkeep.toml");
            builder = builder.add_source(File::from(user).required(false));
        }
        builder = builder.add_source(File::with_name("guildkeep").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::build(builder.add_source(Environment::with_prefix("GUILDKEEP").try_parsing(true)))
    }

    /// Load settings from a single file laid over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> GuildkeepResult<Self> {
        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> GuildkeepResult<Self> {
        builder
            .build()
            .map_err(|e| config_error("Failed to build settings", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse settings", e))
    }

    /// Read the platform credential from the configured variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    pub fn token(&self) -> GuildkeepResult<String> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::new(format!("{} is not set", self.token_env)).into()),
        }
    }
}
