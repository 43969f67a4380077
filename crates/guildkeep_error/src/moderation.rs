//! Warning engine errors.

/// Specific warning engine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModerationErrorKind {
    /// Member has no warnings to remove
    #[display("Member has no warnings to remove")]
    NothingToRemove,
    /// Member has no warning record to clear
    #[display("Member has no warnings to clear")]
    NothingToClear,
}

/// Moderation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Moderation Error: {} at line {} in {}", kind, line, file)]
pub struct ModerationError {
    /// The specific error kind
    pub kind: ModerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ModerationError {
    /// Create a new moderation error with location tracking.
    #[track_caller]
    pub fn new(kind: ModerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ModerationErrorKind {
        self.kind
    }
}
