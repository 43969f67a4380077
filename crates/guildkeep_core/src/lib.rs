//! Core data types for Guildkeep.
//!
//! Identifiers, the acting-member snapshot handed in by the gateway, the
//! per-member record types stored in each table, and the in-memory
//! cooldown ledger shared by passive XP and scheduled rewards.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod cooldown;
mod ids;
mod records;

pub use actor::ActorSnapshot;
pub use cooldown::{CooldownLedger, PRUNE_INTERVAL};
pub use ids::{ChannelId, GuildId, MemberId, RoleId};
pub use records::{LevelRecord, MemberMap, WarningRecord, XP_PER_LEVEL};
