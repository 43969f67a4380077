//! Guild-keyed table storage for Guildkeep.
//!
//! State lives in four independent tables (`warnings`, `levels`, `money`,
//! `config`). Each table is a mapping from guild id to that guild's data and
//! is persisted as one human-readable JSON document.
//!
//! # Layers
//!
//! - [`TableStore`]: byte-level backend (filesystem or memory)
//! - [`Table`]: the typed mapping plus the guild record accessor
//! - [`SharedTable`]: one loaded table behind a lock; every mutation is
//!   saved before the lock is released
//!
//! # Example
//!
//! ```rust
//! use guildkeep_core::{GuildId, MemberId, MemberMap};
//! use guildkeep_storage::{MemoryTableStore, SharedTable, TableName};
//! use std::sync::Arc;
//!
//! # async fn example() -> guildkeep_error::GuildkeepResult<()> {
//! let store = Arc::new(MemoryTableStore::new());
//! let money: SharedTable<MemberMap<u64>> = SharedTable::open(store, TableName::Money).await?;
//!
//! money
//!     .mutate(|table| {
//!         *table.guild_mut(GuildId(1)).entry(MemberId(2)).or_default() += 500;
//!         Ok::<_, guildkeep_error::GuildkeepError>(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;
mod name;
mod shared;
mod store;
mod table;

pub use filesystem::FileSystemTableStore;
pub use memory::MemoryTableStore;
pub use name::TableName;
pub use shared::SharedTable;
pub use store::TableStore;
pub use table::Table;
