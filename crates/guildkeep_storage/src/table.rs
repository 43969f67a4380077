//! Typed guild-keyed tables.

use crate::{TableName, TableStore};
use guildkeep_core::GuildId;
use guildkeep_error::{GuildkeepResult, StorageError, StorageErrorKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A table: guild id to that guild's data.
///
/// [`Table::guild_mut`] is the one place where a guild that has not been
/// seen yet gets its (empty) entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<V> {
    guilds: BTreeMap<GuildId, V>,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self {
            guilds: BTreeMap::new(),
        }
    }
}

impl<V> Table<V> {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Data for `guild`, if the guild has an entry.
    pub fn guild(&self, guild: GuildId) -> Option<&V> {
        self.guilds.get(&guild)
    }

    /// Data for `guild`, inserting an empty entry on first touch.
    pub fn guild_mut(&mut self, guild: GuildId) -> &mut V
    where
        V: Default,
    {
        self.guilds.entry(guild).or_default()
    }

    /// Data for `guild` for in-place edits, without creating an entry.
    pub fn existing_guild_mut(&mut self, guild: GuildId) -> Option<&mut V> {
        self.guilds.get_mut(&guild)
    }

    /// Drop a guild's entry entirely.
    pub fn remove_guild(&mut self, guild: GuildId) -> Option<V> {
        self.guilds.remove(&guild)
    }

    /// Iterate guilds in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&GuildId, &V)> {
        self.guilds.iter()
    }

    /// Number of guilds with an entry.
    pub fn len(&self) -> usize {
        self.guilds.len()
    }

    /// Whether no guild has an entry.
    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty()
    }
}

impl<V> FromIterator<(GuildId, V)> for Table<V> {
    fn from_iter<I: IntoIterator<Item = (GuildId, V)>>(iter: I) -> Self {
        Self {
            guilds: iter.into_iter().collect(),
        }
    }
}

impl<V: DeserializeOwned> Table<V> {
    /// Load `name` from `store`.
    ///
    /// A table that was never written, or whose document does not parse,
    /// loads empty. The unparsable document is overwritten by the next save.
    pub async fn load(store: &dyn TableStore, name: TableName) -> GuildkeepResult<Self> {
        let Some(bytes) = store.read(name).await? else {
            debug!(table = %name, "Table not found, starting empty");
            return Ok(Self::new());
        };

        match serde_json::from_slice(&bytes) {
            Ok(table) => Ok(table),
            Err(e) => {
                warn!(
                    table = %name,
                    backend = store.backend(),
                    error = %e,
                    "Table is corrupt, treating as empty"
                );
                Ok(Self::new())
            }
        }
    }
}

impl<V: Serialize> Table<V> {
    /// Overwrite `name` in `store` with this table.
    pub async fn save(&self, store: &dyn TableStore, name: TableName) -> GuildkeepResult<()> {
        let bytes = serde_json::to_vec_pretty(self).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!("{}: {}", name, e)))
        })?;
        store.write(name, &bytes).await
    }
}
