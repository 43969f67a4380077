//! Error types for Guildkeep.
//!
//! This crate provides the error types used throughout the Guildkeep workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Domain errors lift into [`GuildkeepError`] with `?`, and
//! [`GuildkeepError::category`] flattens any of them into the
//! caller-facing [`ErrorCategory`].
//!
//! # Examples
//!
//! ```
//! use guildkeep_error::{ErrorCategory, GuildkeepResult, ModerationError, ModerationErrorKind};
//!
//! fn remove() -> GuildkeepResult<u32> {
//!     Err(ModerationError::new(ModerationErrorKind::NothingToRemove))?
//! }
//!
//! let err = remove().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::NothingToRemove);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access;
mod config;
mod economy;
mod error;
mod moderation;
mod schedule;
mod storage;
mod validation;

pub use access::{AccessError, AccessErrorKind, AccessTier};
pub use config::ConfigError;
pub use economy::{EconomyError, EconomyErrorKind};
pub use error::{ErrorCategory, GuildkeepError, GuildkeepErrorKind, GuildkeepResult};
pub use moderation::{ModerationError, ModerationErrorKind};
pub use schedule::{ScheduleError, ScheduleErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
