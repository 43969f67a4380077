//! Warning-count thresholds and the actions they trigger.

use guildkeep_error::ValidationError;

/// Disciplinary consequence the caller must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum EscalationAction {
    /// Nothing beyond recording the warning
    NoAction,
    /// Apply the muted role
    Mute,
    /// Remove the member from the guild
    Kick,
    /// Ban the member from the guild
    Ban,
}

/// One row of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationStep {
    /// Warning count at which the step fires
    pub threshold: u32,
    /// Action to take
    pub action: EscalationAction,
    /// Also fire for every count above the threshold
    pub repeats: bool,
}

impl EscalationStep {
    /// A step that fires only at exactly `threshold`.
    pub const fn at(threshold: u32, action: EscalationAction) -> Self {
        Self {
            threshold,
            action,
            repeats: false,
        }
    }

    /// A step that fires at `threshold` and every count after it.
    pub const fn at_least(threshold: u32, action: EscalationAction) -> Self {
        Self {
            threshold,
            action,
            repeats: true,
        }
    }

    fn matches(&self, count: u32) -> bool {
        count == self.threshold || (self.repeats && count > self.threshold)
    }
}

/// Thresholds in ascending order; the highest matching step wins.
///
/// The ladder has no memory: removing warnings and re-warning triggers the
/// same steps again.
///
/// # Examples
///
/// ```
/// use guildkeep_moderation::{EscalationAction, EscalationLadder};
///
/// let ladder = EscalationLadder::default();
/// assert_eq!(ladder.action_for(2), EscalationAction::NoAction);
/// assert_eq!(ladder.action_for(3), EscalationAction::Mute);
/// assert_eq!(ladder.action_for(5), EscalationAction::Kick);
/// assert_eq!(ladder.action_for(9), EscalationAction::Ban);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationLadder {
    steps: Vec<EscalationStep>,
}

const DEFAULT_STEPS: [EscalationStep; 3] = [
    EscalationStep::at(3, EscalationAction::Mute),
    EscalationStep::at(5, EscalationAction::Kick),
    EscalationStep::at_least(7, EscalationAction::Ban),
];

impl Default for EscalationLadder {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS.to_vec(),
        }
    }
}

impl EscalationLadder {
    /// Build a ladder from steps with strictly ascending, non-zero thresholds.
    pub fn new(steps: Vec<EscalationStep>) -> Result<Self, ValidationError> {
        if steps.iter().any(|s| s.threshold == 0) {
            return Err(ValidationError::new("threshold", "must be at least 1"));
        }
        if steps.windows(2).any(|w| w[0].threshold >= w[1].threshold) {
            return Err(ValidationError::new(
                "threshold",
                "steps must be in strictly ascending order",
            ));
        }
        Ok(Self { steps })
    }

    /// Action for a member who now has `count` warnings.
    pub fn action_for(&self, count: u32) -> EscalationAction {
        self.steps
            .iter()
            .rev()
            .find(|step| step.matches(count))
            .map(|step| step.action)
            .unwrap_or(EscalationAction::NoAction)
    }

    /// Steps in ascending order.
    pub fn steps(&self) -> &[EscalationStep] {
        &self.steps
    }
}
