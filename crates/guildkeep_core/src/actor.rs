//! Snapshot of a member's standing at the moment a command arrives.

use crate::{MemberId, RoleId};
use std::collections::BTreeSet;

/// Role membership and ownership of one member, as reported by the gateway.
///
/// `rank` is the position of the member's highest role; larger outranks
/// smaller.
///
/// # Examples
///
/// ```
/// use guildkeep_core::{ActorSnapshot, MemberId, RoleId};
///
/// let moderator = ActorSnapshot::new(MemberId(7))
///     .with_role(RoleId(100))
///     .with_rank(5);
///
/// assert!(moderator.has_role(RoleId(100)));
/// assert!(!moderator.is_owner());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorSnapshot {
    member: MemberId,
    owner: bool,
    bot: bool,
    roles: BTreeSet<RoleId>,
    rank: u32,
}

impl ActorSnapshot {
    /// A plain member with no roles.
    pub fn new(member: MemberId) -> Self {
        Self {
            member,
            owner: false,
            bot: false,
            roles: BTreeSet::new(),
            rank: 0,
        }
    }

    /// Mark the member as the guild's owner.
    pub fn with_owner(mut self, owner: bool) -> Self {
        self.owner = owner;
        self
    }

    /// Mark the member as an automated account.
    pub fn with_bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// Add a held role.
    pub fn with_role(mut self, role: RoleId) -> Self {
        self.roles.insert(role);
        self
    }

    /// Replace the held roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Set the authority rank.
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    /// The member this snapshot describes.
    pub fn member(&self) -> MemberId {
        self.member
    }

    /// Whether the member owns the guild.
    pub fn is_owner(&self) -> bool {
        self.owner
    }

    /// Whether the member is an automated account.
    pub fn is_bot(&self) -> bool {
        self.bot
    }

    /// Whether the member holds `role`.
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }

    /// Authority rank of the member's highest role.
    pub fn rank(&self) -> u32 {
        self.rank
    }
}
