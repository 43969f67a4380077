//! Backend trait for table persistence.

use crate::TableName;
use guildkeep_error::GuildkeepResult;

/// Trait for pluggable table storage backends.
///
/// Backends deal in whole serialized documents; encoding and the
/// missing/corrupt policy live in [`crate::Table`].
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Read the stored document for `table`.
    ///
    /// # Returns
    ///
    /// `None` if the table has never been written.
    async fn read(&self, table: TableName) -> GuildkeepResult<Option<Vec<u8>>>;

    /// Replace the stored document for `table` with `contents`.
    async fn write(&self, table: TableName, contents: &[u8]) -> GuildkeepResult<()>;

    /// Backend name for logging (e.g., "filesystem", "memory").
    fn backend(&self) -> &'static str;
}
