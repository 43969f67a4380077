//! Stored and resolved guild configuration.

use guildkeep_core::{ChannelId, RoleId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prefix used when a guild has not set one.
pub const DEFAULT_PREFIX: &str = "!";
/// Longest accepted prefix, in characters.
pub const MAX_PREFIX_CHARS: usize = 5;
/// XP cooldown used when a guild has not set one.
pub const DEFAULT_XP_COOLDOWN_SECS: u64 = 60;
/// Shortest accepted XP cooldown.
pub const MIN_XP_COOLDOWN_SECS: u64 = 10;
/// Longest accepted XP cooldown.
pub const MAX_XP_COOLDOWN_SECS: u64 = 300;

/// Configuration as persisted in the `config` table.
///
/// Only fields a guild has explicitly set are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGuildConfig {
    /// Command prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Role granting admin-tier commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_role: Option<RoleId>,
    /// Role granting moderator-tier commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_role: Option<RoleId>,
    /// Role given to members when they join
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autorole: Option<RoleId>,
    /// Channel for join announcements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_channel: Option<ChannelId>,
    /// Channel for leave announcements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goodbye_channel: Option<ChannelId>,
    /// Seconds between passive XP awards for one member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp_cooldown_secs: Option<u64>,
}

impl StoredGuildConfig {
    /// Whether no field has been set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Fully resolved configuration for one guild.
///
/// # Examples
///
/// ```
/// use guildkeep_config::GuildConfig;
/// use std::time::Duration;
///
/// let config = GuildConfig::default();
/// assert_eq!(config.prefix(), "!");
/// assert_eq!(*config.xp_cooldown(), Duration::from_secs(60));
/// assert!(config.admin_role().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GuildConfig {
    /// Command prefix
    prefix: String,
    /// Admin role, if configured
    admin_role: Option<RoleId>,
    /// Moderator role, if configured
    mod_role: Option<RoleId>,
    /// Join role, if configured
    autorole: Option<RoleId>,
    /// Welcome channel, if configured
    welcome_channel: Option<ChannelId>,
    /// Goodbye channel, if configured
    goodbye_channel: Option<ChannelId>,
    /// Passive XP cooldown
    xp_cooldown: Duration,
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self::from(&StoredGuildConfig::default())
    }
}

impl From<&StoredGuildConfig> for GuildConfig {
    fn from(stored: &StoredGuildConfig) -> Self {
        // Hand-edited values outside the accepted ranges fall back to defaults
        let prefix = stored
            .prefix
            .as_deref()
            .filter(|p| crate::update::prefix_is_valid(p))
            .unwrap_or(DEFAULT_PREFIX)
            .to_string();
        let cooldown = stored
            .xp_cooldown_secs
            .filter(|s| (MIN_XP_COOLDOWN_SECS..=MAX_XP_COOLDOWN_SECS).contains(s))
            .unwrap_or(DEFAULT_XP_COOLDOWN_SECS);

        Self {
            prefix,
            admin_role: stored.admin_role,
            mod_role: stored.mod_role,
            autorole: stored.autorole,
            welcome_channel: stored.welcome_channel,
            goodbye_channel: stored.goodbye_channel,
            xp_cooldown: Duration::from_secs(cooldown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_values_win() {
        let stored = StoredGuildConfig {
            prefix: Some("?".to_string()),
            admin_role: Some(RoleId(5)),
            xp_cooldown_secs: Some(30),
            ..Default::default()
        };
        let config = GuildConfig::from(&stored);
        assert_eq!(config.prefix(), "?");
        assert_eq!(*config.admin_role(), Some(RoleId(5)));
        assert_eq!(*config.xp_cooldown(), Duration::from_secs(30));
        assert!(config.mod_role().is_none());
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let stored = StoredGuildConfig {
            prefix: Some("toolong".to_string()),
            xp_cooldown_secs: Some(5),
            ..Default::default()
        };
        let config = GuildConfig::from(&stored);
        assert_eq!(config.prefix(), DEFAULT_PREFIX);
        assert_eq!(
            *config.xp_cooldown(),
            Duration::from_secs(DEFAULT_XP_COOLDOWN_SECS)
        );
    }
}
