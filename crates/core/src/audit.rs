//! Audit logging constants.
//!
//! Every workflow operation records exactly one audit entry with one of
//! these action types. Audit rows are append-only.

/// Known action types for audit log entries.
pub mod actions {
    pub const GOAL_CREATED: &str = "GOAL_CREATED";
    pub const GOAL_APPROVED: &str = "GOAL_APPROVED";
    pub const GOAL_CHANGE_REQUESTED: &str = "GOAL_CHANGE_REQUESTED";
    pub const GOAL_UPDATED: &str = "GOAL_UPDATED";
    pub const GOAL_COMPLETION_SUBMITTED: &str = "GOAL_COMPLETION_SUBMITTED";
    pub const GOAL_COMPLETION_APPROVED: &str = "GOAL_COMPLETION_APPROVED";
    pub const GOAL_COMPLETION_REJECTED: &str = "GOAL_COMPLETION_REJECTED";
    pub const ADDITIONAL_EVIDENCE_REQUESTED: &str = "ADDITIONAL_EVIDENCE_REQUESTED";
    pub const EVIDENCE_VERIFIED: &str = "EVIDENCE_VERIFIED";
    pub const GOAL_DELETED: &str = "GOAL_DELETED";
    pub const PROGRESS_ADDED: &str = "PROGRESS_ADDED";
    pub const USER_LOGIN: &str = "USER_LOGIN";
}

/// Known outcome values for audit log entries.
pub mod outcomes {
    pub const SUCCESS: &str = "SUCCESS";
    pub const FAILURE: &str = "FAILURE";
}

/// Entity type tag used for goal-related audit rows and notifications.
pub const ENTITY_GOAL: &str = "Goal";
