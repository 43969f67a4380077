//! Per-guild configuration for Guildkeep.
//!
//! Staff set fields one at a time ([`ConfigUpdate`]); everything else reads
//! a fully populated [`GuildConfig`] from [`ConfigResolver::resolve`], with
//! defaults filled in for fields that were never set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod guild;
mod resolver;
mod update;

pub use guild::{
    DEFAULT_PREFIX, DEFAULT_XP_COOLDOWN_SECS, GuildConfig, MAX_PREFIX_CHARS,
    MAX_XP_COOLDOWN_SECS, MIN_XP_COOLDOWN_SECS, StoredGuildConfig,
};
pub use resolver::ConfigResolver;
pub use update::ConfigUpdate;
