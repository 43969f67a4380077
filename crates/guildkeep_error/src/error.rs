//! Top-level error wrapper types.

use crate::{
    AccessError, AccessErrorKind, ConfigError, EconomyError, EconomyErrorKind, ModerationError,
    ModerationErrorKind, ScheduleError, StorageError, ValidationError,
};

/// Every failure the Guildkeep engines can report.
///
/// # Examples
///
/// ```
/// use guildkeep_error::{GuildkeepError, ValidationError};
///
/// let err: GuildkeepError = ValidationError::new("amount", "must be positive").into();
/// assert!(format!("{}", err).contains("amount"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GuildkeepErrorKind {
    /// Table read/write failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Rejected argument
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Authorization failure
    #[from(AccessError)]
    Access(AccessError),
    /// Warning engine failure
    #[from(ModerationError)]
    Moderation(ModerationError),
    /// Ledger failure
    #[from(EconomyError)]
    Economy(EconomyError),
    /// Deferred task failure
    #[from(ScheduleError)]
    Schedule(ScheduleError),
    /// Process settings failure
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Flat classification of an error for the layer that renders replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// Actor does not outrank the target
    HierarchyViolation,
    /// Actor lacks a configured role
    PermissionDenied,
    /// Required role was never configured
    RoleNotConfigured,
    /// Bad numeric range or malformed input
    InvalidArgument,
    /// No warning to remove
    NothingToRemove,
    /// No warning record to clear
    NothingToClear,
    /// Transfer cannot be covered
    InsufficientFunds,
    /// Transfer recipient rejected
    InvalidTarget,
    /// Store read or write failed
    IoFailure,
    /// Process settings could not be loaded
    Configuration,
}

/// Guildkeep error with kind discrimination.
///
/// # Examples
///
/// ```
/// use guildkeep_error::{GuildkeepResult, StorageError, StorageErrorKind};
///
/// fn save() -> GuildkeepResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("disk full".into())))?
/// }
///
/// assert!(save().unwrap_err().is_io_failure());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Guildkeep Error: {}", _0)]
pub struct GuildkeepError(Box<GuildkeepErrorKind>);

impl GuildkeepError {
    /// Create a new error from a kind.
    pub fn new(kind: GuildkeepErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GuildkeepErrorKind {
        &self.0
    }

    /// Classify this error for reply rendering.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            GuildkeepErrorKind::Storage(_) => ErrorCategory::IoFailure,
            GuildkeepErrorKind::Validation(_) | GuildkeepErrorKind::Schedule(_) => {
                ErrorCategory::InvalidArgument
            }
            GuildkeepErrorKind::Access(e) => match e.kind() {
                AccessErrorKind::HierarchyViolation { .. } => ErrorCategory::HierarchyViolation,
                AccessErrorKind::PermissionDenied(_) => ErrorCategory::PermissionDenied,
                AccessErrorKind::RoleNotConfigured(_) => ErrorCategory::RoleNotConfigured,
            },
            GuildkeepErrorKind::Moderation(e) => match e.kind() {
                ModerationErrorKind::NothingToRemove => ErrorCategory::NothingToRemove,
                ModerationErrorKind::NothingToClear => ErrorCategory::NothingToClear,
            },
            GuildkeepErrorKind::Economy(e) => match e.kind() {
                EconomyErrorKind::InsufficientFunds { .. } => ErrorCategory::InsufficientFunds,
                EconomyErrorKind::InvalidTarget(_) => ErrorCategory::InvalidTarget,
            },
            GuildkeepErrorKind::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether this error came from a failed store read or write.
    pub fn is_io_failure(&self) -> bool {
        self.category() == ErrorCategory::IoFailure
    }
}

// Generic From implementation for any type that converts to GuildkeepErrorKind
impl<T> From<T> for GuildkeepError
where
    T: Into<GuildkeepErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Guildkeep operations.
pub type GuildkeepResult<T> = std::result::Result<T, GuildkeepError>;
