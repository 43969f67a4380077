//! A loaded table with serialized read-modify-persist access.

use crate::{Table, TableName, TableStore};
use guildkeep_error::{GuildkeepError, GuildkeepResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// One table held in memory behind an async lock.
///
/// [`SharedTable::mutate`] holds the lock across the mutation and the save
/// that follows it, so two operations on the same table never interleave
/// between reading a record and persisting the result.
pub struct SharedTable<V> {
    name: TableName,
    store: Arc<dyn TableStore>,
    table: Mutex<Table<V>>,
}

impl<V> std::fmt::Debug for SharedTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedTable")
            .field("name", &self.name)
            .field("backend", &self.store.backend())
            .finish()
    }
}

impl<V> SharedTable<V>
where
    V: Serialize + DeserializeOwned + Default + Send,
{
    /// Load `name` from `store` and take ownership of it.
    #[instrument(skip(store), fields(backend = store.backend()))]
    pub async fn open(store: Arc<dyn TableStore>, name: TableName) -> GuildkeepResult<Self> {
        let table = Table::load(store.as_ref(), name).await?;
        debug!(guilds = table.len(), "Opened table");
        Ok(Self {
            name,
            store,
            table: Mutex::new(table),
        })
    }

    /// Which table this is.
    pub fn name(&self) -> TableName {
        self.name
    }

    /// Run `f` against the current contents without persisting.
    pub async fn read<T>(&self, f: impl FnOnce(&Table<V>) -> T) -> T {
        let table = self.table.lock().await;
        f(&table)
    }

    /// Run `f` against the table and persist the whole table if it succeeds.
    ///
    /// `f` must validate before it mutates: an `Err` from `f` skips the save.
    /// If the save itself fails, the error is returned but the in-memory
    /// change stays applied.
    pub async fn mutate<T, E>(&self, f: impl FnOnce(&mut Table<V>) -> Result<T, E>) -> GuildkeepResult<T>
    where
        E: Into<GuildkeepError>,
    {
        let mut table = self.table.lock().await;
        let output = f(&mut table).map_err(Into::into)?;

        if let Err(e) = table.save(self.store.as_ref(), self.name).await {
            warn!(
                table = %self.name,
                error = %e,
                "Save failed; in-memory table is ahead of storage"
            );
            return Err(e);
        }
        Ok(output)
    }

    /// Persist the current contents without changing them.
    pub async fn flush(&self) -> GuildkeepResult<()> {
        let table = self.table.lock().await;
        table.save(self.store.as_ref(), self.name).await
    }

    /// Clone of the current contents.
    pub async fn snapshot(&self) -> Table<V>
    where
        V: Clone,
    {
        self.table.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTableStore;
    use guildkeep_core::{GuildId, MemberId, MemberMap};
    use guildkeep_error::ValidationError;

    async fn money(store: &Arc<MemoryTableStore>) -> SharedTable<MemberMap<u64>> {
        SharedTable::open(store.clone(), TableName::Money).await.unwrap()
    }

    #[tokio::test]
    async fn test_mutation_is_persisted() {
        let store = Arc::new(MemoryTableStore::new());
        let table = money(&store).await;

        table
            .mutate(|t| {
                t.guild_mut(GuildId(1)).insert(MemberId(2), 10);
                Ok::<_, GuildkeepError>(())
            })
            .await
            .unwrap();

        let reopened = money(&store).await;
        let balance = reopened
            .read(|t| t.guild(GuildId(1)).and_then(|m| m.get(&MemberId(2)).copied()))
            .await;
        assert_eq!(balance, Some(10));
    }

    #[tokio::test]
    async fn test_failed_closure_skips_save() {
        let store = Arc::new(MemoryTableStore::new());
        let table = money(&store).await;

        let result = table
            .mutate(|_| Err::<(), _>(ValidationError::new("amount", "must be positive")))
            .await;

        assert!(result.is_err());
        assert!(store.document(TableName::Money).await.is_none());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_memory() {
        let store = Arc::new(MemoryTableStore::new());
        let table = money(&store).await;
        store.set_fail_writes(true);

        let result = table
            .mutate(|t| {
                t.guild_mut(GuildId(1)).insert(MemberId(2), 10);
                Ok::<_, GuildkeepError>(())
            })
            .await;

        assert!(result.unwrap_err().is_io_failure());
        let in_memory = table
            .read(|t| t.guild(GuildId(1)).and_then(|m| m.get(&MemberId(2)).copied()))
            .await;
        assert_eq!(in_memory, Some(10));
    }
}
