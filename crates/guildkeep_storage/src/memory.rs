//! In-memory table storage for tests and ephemeral runs.

use crate::{TableName, TableStore};
use async_trait::async_trait;
use guildkeep_error::{GuildkeepResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory table store.
///
/// Documents are kept as bytes, exactly as the filesystem store would
/// write them. Writes can be made to fail to exercise the path where the
/// in-memory state runs ahead of the stored state.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableStore {
    documents: Arc<RwLock<HashMap<TableName, Vec<u8>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryTableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw document currently stored for `table`.
    pub async fn document(&self, table: TableName) -> Option<Vec<u8>> {
        self.documents.read().await.get(&table).cloned()
    }

    /// Place a raw document, bypassing encoding (for corrupt-table tests).
    pub async fn put_document(&self, table: TableName, contents: impl Into<Vec<u8>>) {
        self.documents.write().await.insert(table, contents.into());
    }
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn read(&self, table: TableName) -> GuildkeepResult<Option<Vec<u8>>> {
        Ok(self.documents.read().await.get(&table).cloned())
    }

    async fn write(&self, table: TableName, contents: &[u8]) -> GuildkeepResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: writes disabled",
                table
            )))
            .into());
        }
        self.documents
            .write()
            .await
            .insert(table, contents.to_vec());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
