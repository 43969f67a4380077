//! Economy ledger errors.

/// Specific ledger failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EconomyErrorKind {
    /// Transfer amount is not positive or exceeds the sender's balance
    #[display("Insufficient funds: requested {}, available {}", requested, available)]
    InsufficientFunds {
        /// Amount the sender tried to move
        requested: i64,
        /// Sender's balance at the time of the attempt
        available: u64,
    },
    /// Recipient cannot receive coins from this sender
    #[display("Invalid transfer target: {}", _0)]
    InvalidTarget(String),
}

/// Economy error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Economy Error: {} at line {} in {}", kind, line, file)]
pub struct EconomyError {
    /// The specific error kind
    pub kind: EconomyErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl EconomyError {
    /// Create a new economy error with location tracking.
    #[track_caller]
    pub fn new(kind: EconomyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EconomyErrorKind {
        &self.kind
    }
}
