//! Moderation state for Guildkeep.
//!
//! - [`WarningEngine`]: per-member warning records and escalation
//! - [`EscalationLadder`]: ordered `(threshold, action)` table evaluated on
//!   every new warning
//! - [`TaskQueue`]: timed un-mutes and reminders with cancellation
//!
//! The engine only decides; muting, kicking, and banning are carried out
//! by the gateway layer from the returned [`EscalationAction`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod escalation;
mod schedule;
mod warnings;

pub use escalation::{EscalationAction, EscalationLadder, EscalationStep};
pub use schedule::{DeferredTask, MAX_DEFERRAL, TaskKey, TaskQueue};
pub use warnings::{NO_REASON, WarnOutcome, WarningEngine};
