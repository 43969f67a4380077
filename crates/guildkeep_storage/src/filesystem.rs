//! Filesystem-backed table storage.
//!
//! Each table is one JSON document in the data directory.

use crate::{TableName, TableStore};
use guildkeep_error::{GuildkeepResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// # Example Structure
///
/// ```text
/// data/
/// ├── warnings.json   { "<guild>": { "<member>": { "count": 2, "reasons": [...] } } }
/// ├── levels.json     { "<guild>": { "<member>": { "xp": 40, "level": 3 } } }
/// ├── money.json      { "<guild>": { "<member>": 1250 } }
/// └── config.json     { "<guild>": { "prefix": "?", "xp_cooldown_secs": 30 } }
/// ```
///
/// Writes replace the whole document: the new contents go to a temporary
/// sibling that is then renamed over the table file.
#[derive(Debug, Clone)]
pub struct FileSystemTableStore {
    base_path: PathBuf,
}

impl FileSystemTableStore {
    /// Create a filesystem store rooted at `base_path`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> GuildkeepResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened table directory");
        Ok(Self { base_path })
    }

    /// Directory holding the table files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file backing `table`.
    pub fn table_path(&self, table: TableName) -> PathBuf {
        self.base_path.join(table.file_name())
    }
}

#[async_trait::async_trait]
impl TableStore for FileSystemTableStore {
    #[tracing::instrument(skip(self), fields(table = %table))]
    async fn read(&self, table: TableName) -> GuildkeepResult<Option<Vec<u8>>> {
        let path = self.table_path(table);

        match tokio::fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(path = %path.display(), size = data.len(), "Read table file");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, contents), fields(table = %table, size = contents.len()))]
    async fn write(&self, table: TableName, contents: &[u8]) -> GuildkeepResult<()> {
        let path = self.table_path(table);
        let temp_path = path.with_extension("json.tmp");

        tokio::fs::write(&temp_path, contents).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), "Wrote table file");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "filesystem"
    }
}
