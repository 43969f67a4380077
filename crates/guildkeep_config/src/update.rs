//! Single-field configuration writes.

use crate::{MAX_PREFIX_CHARS, MAX_XP_COOLDOWN_SECS, MIN_XP_COOLDOWN_SECS, StoredGuildConfig};
use guildkeep_core::{ChannelId, RoleId};
use guildkeep_error::ValidationError;

/// One independent change to a guild's configuration.
///
/// `None` on an optional id clears that field back to "not configured".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigUpdate {
    /// Set the command prefix (1-5 characters, no whitespace)
    Prefix(String),
    /// Set or clear the admin role
    AdminRole(Option<RoleId>),
    /// Set or clear the moderator role
    ModRole(Option<RoleId>),
    /// Set or clear the join role
    Autorole(Option<RoleId>),
    /// Set or clear the welcome channel
    WelcomeChannel(Option<ChannelId>),
    /// Set or clear the goodbye channel
    GoodbyeChannel(Option<ChannelId>),
    /// Set the passive XP cooldown in seconds (10-300)
    XpCooldown(u64),
}

pub(crate) fn prefix_is_valid(prefix: &str) -> bool {
    let chars = prefix.chars().count();
    (1..=MAX_PREFIX_CHARS).contains(&chars) && !prefix.chars().any(char::is_whitespace)
}

impl ConfigUpdate {
    /// Check the new value without applying it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ConfigUpdate::Prefix(prefix) if !prefix_is_valid(prefix) => Err(ValidationError::new(
                "prefix",
                format!(
                    "must be 1-{} characters without whitespace, got {:?}",
                    MAX_PREFIX_CHARS, prefix
                ),
            )),
            ConfigUpdate::XpCooldown(secs)
                if !(MIN_XP_COOLDOWN_SECS..=MAX_XP_COOLDOWN_SECS).contains(secs) =>
            {
                Err(ValidationError::new(
                    "xp_cooldown",
                    format!(
                        "must be between {} and {} seconds, got {}",
                        MIN_XP_COOLDOWN_SECS, MAX_XP_COOLDOWN_SECS, secs
                    ),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Name of the field this update touches.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigUpdate::Prefix(_) => "prefix",
            ConfigUpdate::AdminRole(_) => "admin_role",
            ConfigUpdate::ModRole(_) => "mod_role",
            ConfigUpdate::Autorole(_) => "autorole",
            ConfigUpdate::WelcomeChannel(_) => "welcome_channel",
            ConfigUpdate::GoodbyeChannel(_) => "goodbye_channel",
            ConfigUpdate::XpCooldown(_) => "xp_cooldown",
        }
    }

    pub(crate) fn apply(self, stored: &mut StoredGuildConfig) {
        match self {
            ConfigUpdate::Prefix(prefix) => stored.prefix = Some(prefix),
            ConfigUpdate::AdminRole(role) => stored.admin_role = role,
            ConfigUpdate::ModRole(role) => stored.mod_role = role,
            ConfigUpdate::Autorole(role) => stored.autorole = role,
            ConfigUpdate::WelcomeChannel(channel) => stored.welcome_channel = channel,
            ConfigUpdate::GoodbyeChannel(channel) => stored.goodbye_channel = channel,
            ConfigUpdate::XpCooldown(secs) => stored.xp_cooldown_secs = Some(secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bounds() {
        assert!(ConfigUpdate::Prefix("!".to_string()).validate().is_ok());
        assert!(ConfigUpdate::Prefix("gk!!>".to_string()).validate().is_ok());
        assert!(ConfigUpdate::Prefix(String::new()).validate().is_err());
        assert!(ConfigUpdate::Prefix("sixchr".to_string()).validate().is_err());
        assert!(ConfigUpdate::Prefix("a b".to_string()).validate().is_err());
    }

    #[test]
    fn test_prefix_counts_characters_not_bytes() {
        assert!(ConfigUpdate::Prefix("ñññññ".to_string()).validate().is_ok());
    }

    #[test]
    fn test_cooldown_bounds() {
        assert!(ConfigUpdate::XpCooldown(10).validate().is_ok());
        assert!(ConfigUpdate::XpCooldown(300).validate().is_ok());
        assert!(ConfigUpdate::XpCooldown(9).validate().is_err());
        assert!(ConfigUpdate::XpCooldown(301).validate().is_err());
    }

    #[test]
    fn test_clearing_an_id() {
        let mut stored = StoredGuildConfig {
            mod_role: Some(RoleId(3)),
            ..Default::default()
        };
        ConfigUpdate::ModRole(None).apply(&mut stored);
        assert!(stored.is_empty());
    }
}
