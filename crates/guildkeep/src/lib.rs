//! Guildkeep: guild-scoped moderation, leveling, and economy state.
//!
//! Guildkeep keeps the persistent state a community chat bot needs and the
//! rules that govern it. The chat gateway parses a command, hands it to
//! [`Guildkeep::dispatch`] along with a snapshot of the acting member, and
//! renders the returned [`Outcome`]. Guildkeep never talks to the platform.
//!
//! # Quick Start
//!
//! ```rust
//! use guildkeep::{
//!     ActorSnapshot, Command, CommandContext, GuildId, Guildkeep, MemberId, MemoryTableStore,
//!     Outcome,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> guildkeep::GuildkeepResult<()> {
//! let (state, _due) = Guildkeep::with_store(Arc::new(MemoryTableStore::new())).await?;
//!
//! let owner = ActorSnapshot::new(MemberId(1)).with_owner(true);
//! let ctx = CommandContext::new(GuildId(42), owner);
//!
//! let outcome = state
//!     .dispatch(&ctx, Command::AddMoney { member: MemberId(2), amount: 100 })
//!     .await?;
//! assert_eq!(outcome, Outcome::Balance { member: MemberId(2), coins: 100 });
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `guildkeep_error` - Error types
//! - `guildkeep_core` - Identifiers, actor snapshots, record types
//! - `guildkeep_storage` - Guild-keyed JSON tables
//! - `guildkeep_config` - Per-guild configuration
//! - `guildkeep_security` - Tier and hierarchy checks
//! - `guildkeep_moderation` - Warnings, escalation, deferred tasks
//! - `guildkeep_leveling` - XP and levels
//! - `guildkeep_economy` - Coin balances and rewards
//!
//! This crate assembles them and re-exports the commonly used types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod dispatch;
mod observability;
mod settings;
mod state;

pub use command::{Command, CommandContext, CommandTier, Outcome};
pub use dispatch::{MAX_LISTING, RECENT_WARNINGS};
pub use observability::init_tracing;
pub use settings::GuildkeepSettings;
pub use state::Guildkeep;

pub use guildkeep_config::{ConfigUpdate, GuildConfig};
pub use guildkeep_core::{ActorSnapshot, ChannelId, GuildId, LevelRecord, MemberId, RoleId};
pub use guildkeep_economy::{Reward, RewardKind, TransferReceipt};
pub use guildkeep_error::{ErrorCategory, GuildkeepError, GuildkeepResult};
pub use guildkeep_leveling::LevelUp;
pub use guildkeep_moderation::{DeferredTask, EscalationAction, TaskKey, WarnOutcome};
pub use guildkeep_storage::{FileSystemTableStore, MemoryTableStore, TableName, TableStore};
