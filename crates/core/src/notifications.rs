//! Notification type, priority, and status constants.
//!
//! These must match the values stored in the `notifications` table.

/// Known notification types.
pub mod types {
    pub const GOAL_SUBMITTED: &str = "GOAL_SUBMITTED";
    pub const GOAL_APPROVED: &str = "GOAL_APPROVED";
    pub const GOAL_CHANGE_REQUESTED: &str = "GOAL_CHANGE_REQUESTED";
    pub const GOAL_RESUBMITTED: &str = "GOAL_RESUBMITTED";
    pub const GOAL_COMPLETION_SUBMITTED: &str = "GOAL_COMPLETION_SUBMITTED";
    pub const GOAL_COMPLETION_APPROVED: &str = "GOAL_COMPLETION_APPROVED";
    pub const GOAL_COMPLETION_REJECTED: &str = "GOAL_COMPLETION_REJECTED";
    pub const ADDITIONAL_EVIDENCE_REQUIRED: &str = "ADDITIONAL_EVIDENCE_REQUIRED";
    pub const REVIEW_REMINDER: &str = "REVIEW_REMINDER";
}

/// Notification priorities.
pub mod priorities {
    pub const NORMAL: &str = "NORMAL";
    pub const HIGH: &str = "HIGH";
}

/// Notification read statuses.
pub mod statuses {
    pub const UNREAD: &str = "UNREAD";
    pub const READ: &str = "READ";
}

/// Feedback type written when a manager requests changes on a goal.
pub const FEEDBACK_CHANGE_REQUEST: &str = "CHANGE_REQUEST";
