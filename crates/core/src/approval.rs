//! Completion-decision constants.
//!
//! A `GoalCompletionApproval` row is written once per manager decision and
//! never updated; these are the values it may carry.

/// The manager approved the completion submission.
pub const DECISION_APPROVED: &str = "APPROVED";

/// The manager rejected the completion submission.
pub const DECISION_REJECTED: &str = "REJECTED";

/// Rationale recorded on an approval decision.
pub const RATIONALE_APPROVED: &str = "Evidence verified and goal completion approved";

/// Rationale recorded on a rejection decision.
pub const RATIONALE_REJECTED: &str = "Goal completion rejected";
