//! Deferred task errors.

use std::time::Duration;

/// Specific scheduling failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScheduleErrorKind {
    /// Requested delay exceeds the allowed maximum
    #[display("Duration {:?} exceeds the maximum of {:?}", requested, max)]
    DurationTooLong {
        /// Requested delay
        requested: Duration,
        /// Largest delay accepted
        max: Duration,
    },
}

/// Scheduling error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schedule Error: {} at line {} in {}", kind, line, file)]
pub struct ScheduleError {
    /// The specific error kind
    pub kind: ScheduleErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ScheduleError {
    /// Create a new schedule error with location tracking.
    #[track_caller]
    pub fn new(kind: ScheduleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
