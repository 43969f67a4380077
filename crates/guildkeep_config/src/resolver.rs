//! Typed access to the `config` table.

use crate::{ConfigUpdate, GuildConfig, StoredGuildConfig};
use guildkeep_core::GuildId;
use guildkeep_error::{GuildkeepError, GuildkeepResult};
use guildkeep_storage::{SharedTable, TableName, TableStore};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Reads and writes per-guild configuration.
#[derive(Debug)]
pub struct ConfigResolver {
    table: SharedTable<StoredGuildConfig>,
}

impl ConfigResolver {
    /// Load the `config` table from `store`.
    pub async fn open(store: Arc<dyn TableStore>) -> GuildkeepResult<Self> {
        Ok(Self::new(SharedTable::open(store, TableName::Config).await?))
    }

    /// Wrap an already opened table.
    pub fn new(table: SharedTable<StoredGuildConfig>) -> Self {
        Self { table }
    }

    /// Configuration for `guild`, with defaults for unset fields.
    ///
    /// Never creates an entry for the guild.
    #[instrument(skip(self))]
    pub async fn resolve(&self, guild: GuildId) -> GuildConfig {
        self.table
            .read(|table| table.guild(guild).map(GuildConfig::from).unwrap_or_default())
            .await
    }

    /// Apply one field change and return the resulting configuration.
    #[instrument(skip(self), fields(field = update.field()))]
    pub async fn update(&self, guild: GuildId, update: ConfigUpdate) -> GuildkeepResult<GuildConfig> {
        update.validate()?;
        debug!("Config update validated");

        let config = self
            .table
            .mutate(|table| {
                let stored = table.guild_mut(guild);
                update.apply(stored);
                Ok::<_, GuildkeepError>(GuildConfig::from(&*stored))
            })
            .await?;

        info!(%guild, "Guild configuration updated");
        Ok(config)
    }

    /// Forget every stored field for `guild`.
    ///
    /// Returns whether the guild had any stored configuration.
    #[instrument(skip(self))]
    pub async fn reset(&self, guild: GuildId) -> GuildkeepResult<bool> {
        let existed = self
            .table
            .mutate(|table| Ok::<_, GuildkeepError>(table.remove_guild(guild).is_some()))
            .await?;
        info!(%guild, existed, "Guild configuration reset");
        Ok(existed)
    }
}
