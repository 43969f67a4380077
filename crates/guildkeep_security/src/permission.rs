//! Tier checks against a guild's configured roles.

use guildkeep_config::GuildConfig;
use guildkeep_core::{ActorSnapshot, RoleId};
use guildkeep_error::{AccessError, AccessErrorKind, AccessTier};
use tracing::{debug, instrument};

/// Resolves whether an actor may use a privileged tier in one guild.
///
/// # Examples
///
/// ```
/// use guildkeep_config::GuildConfig;
/// use guildkeep_core::{ActorSnapshot, MemberId};
/// use guildkeep_security::Authorizer;
///
/// let config = GuildConfig::default();
/// let owner = ActorSnapshot::new(MemberId(1)).with_owner(true);
///
/// // The owner passes even before any role is configured
/// assert!(Authorizer::new(&config).is_admin(&owner));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Authorizer<'a> {
    config: &'a GuildConfig,
}

impl<'a> Authorizer<'a> {
    /// Create an authorizer for a guild's resolved configuration.
    pub fn new(config: &'a GuildConfig) -> Self {
        Self { config }
    }

    /// Require admin tier: owner, or holder of the configured admin role.
    #[instrument(skip(self, actor), fields(member = %actor.member()))]
    pub fn require_admin(&self, actor: &ActorSnapshot) -> Result<(), AccessError> {
        if actor.is_owner() {
            debug!("Owner bypasses admin check");
            return Ok(());
        }
        Self::require_role(actor, *self.config.admin_role(), AccessTier::Admin)
    }

    /// Require moderator tier: owner, admin-role holder, or holder of the
    /// configured moderator role.
    #[instrument(skip(self, actor), fields(member = %actor.member()))]
    pub fn require_moderator(&self, actor: &ActorSnapshot) -> Result<(), AccessError> {
        if actor.is_owner() {
            debug!("Owner bypasses moderator check");
            return Ok(());
        }
        if self
            .config
            .admin_role()
            .is_some_and(|role| actor.has_role(role))
        {
            debug!("Admin role satisfies moderator check");
            return Ok(());
        }
        Self::require_role(actor, *self.config.mod_role(), AccessTier::Moderator)
    }

    /// Require whichever tier `tier` names.
    pub fn require(&self, tier: AccessTier, actor: &ActorSnapshot) -> Result<(), AccessError> {
        match tier {
            AccessTier::Admin => self.require_admin(actor),
            AccessTier::Moderator => self.require_moderator(actor),
        }
    }

    /// Whether the actor passes the admin check.
    pub fn is_admin(&self, actor: &ActorSnapshot) -> bool {
        self.require_admin(actor).is_ok()
    }

    /// Whether the actor passes the moderator check.
    pub fn is_moderator(&self, actor: &ActorSnapshot) -> bool {
        self.require_moderator(actor).is_ok()
    }

    fn require_role(
        actor: &ActorSnapshot,
        role: Option<RoleId>,
        tier: AccessTier,
    ) -> Result<(), AccessError> {
        let Some(role) = role else {
            debug!(%tier, "Tier role not configured");
            return Err(AccessError::new(AccessErrorKind::RoleNotConfigured(tier)));
        };
        if actor.has_role(role) {
            debug!(%tier, "Actor holds tier role");
            Ok(())
        } else {
            debug!(%tier, "Actor lacks tier role");
            Err(AccessError::new(AccessErrorKind::PermissionDenied(tier)))
        }
    }
}
