//! Authority-rank ordering between staff and their targets.

use guildkeep_core::ActorSnapshot;
use guildkeep_error::{AccessError, AccessErrorKind};
use tracing::{debug, instrument};

/// Check that `actor` may discipline `target`.
///
/// The guild owner may discipline anyone. Everyone else needs a rank
/// strictly greater than the target's.
///
/// # Examples
///
/// ```
/// use guildkeep_core::{ActorSnapshot, MemberId};
/// use guildkeep_security::check_hierarchy;
///
/// let senior = ActorSnapshot::new(MemberId(1)).with_rank(5);
/// let peer = ActorSnapshot::new(MemberId(2)).with_rank(5);
///
/// assert!(check_hierarchy(&senior, &peer).is_err());
/// ```
#[instrument(skip_all, fields(actor = %actor.member(), target = %target.member()))]
pub fn check_hierarchy(actor: &ActorSnapshot, target: &ActorSnapshot) -> Result<(), AccessError> {
    if actor.is_owner() {
        debug!("Owner bypasses hierarchy");
        return Ok(());
    }
    if actor.rank() > target.rank() {
        debug!("Actor outranks target");
        return Ok(());
    }
    debug!(
        actor_rank = actor.rank(),
        target_rank = target.rank(),
        "Hierarchy violation"
    );
    Err(AccessError::new(AccessErrorKind::HierarchyViolation {
        actor_rank: actor.rank(),
        target_rank: target.rank(),
    }))
}
