//! Authorization error types.

/// Privilege tier an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AccessTier {
    /// Moderator role, admin role, or guild owner
    #[display("moderator")]
    Moderator,
    /// Admin role or guild owner
    #[display("admin")]
    Admin,
}

/// Specific authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AccessErrorKind {
    /// Actor does not outrank the member they tried to discipline
    #[display("Actor rank {} does not outrank target rank {}", actor_rank, target_rank)]
    HierarchyViolation {
        /// Authority rank of the acting member
        actor_rank: u32,
        /// Authority rank of the target member
        target_rank: u32,
    },

    /// The role for this tier is configured but the actor does not hold it
    #[display("Permission denied: {} role required", _0)]
    PermissionDenied(AccessTier),

    /// The role for this tier has never been configured for the guild
    #[display("No {} role configured for this guild", _0)]
    RoleNotConfigured(AccessTier),
}

/// Authorization error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Access Error: {} at line {} in {}", kind, line, file)]
pub struct AccessError {
    /// The specific error kind
    pub kind: AccessErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl AccessError {
    /// Create a new access error with location tracking.
    #[track_caller]
    pub fn new(kind: AccessErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }
}
