//! Leveling for Guildkeep.
//!
//! Members earn XP passively from messages (rate limited per member by the
//! guild's configured cooldown) or from admin grants. XP rolls over into
//! levels: leaving level `n` costs `n * 100` XP.
//!
//! # Example
//!
//! ```rust
//! use guildkeep_core::{GuildId, LevelRecord, MemberId};
//! use guildkeep_leveling::LevelingEngine;
//! use guildkeep_storage::MemoryTableStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> guildkeep_error::GuildkeepResult<()> {
//! let engine = LevelingEngine::open(Arc::new(MemoryTableStore::new())).await?;
//!
//! let up = engine.add_xp(GuildId(1), MemberId(2), 250).await?;
//! assert_eq!(up.levels_gained, 2);
//! assert_eq!(up.record, LevelRecord { xp: 50, level: 3 });
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod progress;

pub use engine::{LevelUp, LevelingEngine, MAX_XP_GRANT, PASSIVE_XP};
pub use progress::{PROGRESS_BAR_LENGTH, progress_bar};
