//! Authorization for privileged Guildkeep operations.
//!
//! Two checks guard every privileged command:
//!
//! 1. **Tier check** ([`Authorizer`]) - may the actor use moderator- or
//!    admin-tier commands in this guild, given ownership and the guild's
//!    configured roles?
//! 2. **Hierarchy check** ([`check_hierarchy`]) - does the actor outrank
//!    the member they are about to discipline?

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod hierarchy;
mod permission;

pub use guildkeep_error::{AccessError, AccessErrorKind, AccessTier};
pub use hierarchy::check_hierarchy;
pub use permission::Authorizer;
