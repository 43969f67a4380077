//! Argument validation errors.

/// An argument failed validation before any state was touched.
///
/// # Examples
///
/// ```
/// use guildkeep_error::ValidationError;
///
/// let err = ValidationError::new("level", "must be at least 1");
/// assert_eq!(err.field(), "level");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid argument '{}': {} at line {} in {}", field, reason, line, file)]
pub struct ValidationError {
    field: String,
    reason: String,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a validation error for `field` with caller location tracking.
    #[track_caller]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Name of the rejected argument.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the argument was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
