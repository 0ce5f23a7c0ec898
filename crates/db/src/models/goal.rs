//! Goal aggregate, completion-decision record, and the related DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use perftrack_core::types::{Date, DbId, Timestamp};

/// A row from the `goals` table.
///
/// The lifecycle-sensitive fields are nullable and stay NULL until the
/// goal reaches the phase that owns them: evidence fields are set by
/// completion submission, verification fields by the manager's evidence
/// review, completion-approval fields by the final decision. The workflow
/// engine is the only writer of any of them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: DbId,

    // Definition (employee-authored)
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub priority: String,
    pub assigned_to_user_id: DbId,
    pub assigned_manager_id: DbId,
    pub start_date: Date,
    pub end_date: Date,

    /// Top-level lifecycle status; see `perftrack_core::goal::GoalStatus`.
    pub status: String,

    // Initial approval sub-state (manager)
    pub approved_by: Option<DbId>,
    pub approved_date: Option<Timestamp>,
    pub request_changes: bool,
    pub last_reviewed_by: Option<DbId>,
    pub last_reviewed_date: Option<Timestamp>,
    pub resubmitted_date: Option<Timestamp>,

    // Work & progress (employee, append-only)
    pub progress_notes: Option<String>,

    // Completion submission (employee)
    pub evidence_link: Option<String>,
    pub evidence_link_description: Option<String>,
    pub evidence_access_instructions: Option<String>,
    pub completion_notes: Option<String>,
    pub completion_submitted_date: Option<Timestamp>,

    // Evidence verification sub-state (manager)
    pub evidence_verification_status: Option<String>,
    pub evidence_verification_notes: Option<String>,
    pub evidence_verified_by: Option<DbId>,
    pub evidence_verified_date: Option<Timestamp>,

    // Completion approval sub-state (manager)
    pub completion_approval_status: Option<String>,
    pub completion_approved_by: Option<DbId>,
    pub completion_approved_date: Option<Timestamp>,
    pub final_completion_date: Option<Timestamp>,
    pub manager_completion_comments: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `goal_completion_approvals` table.
///
/// One row per manager decision on a completion submission; never updated
/// or deleted after insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GoalCompletionApproval {
    pub id: DbId,
    pub goal_id: DbId,
    /// `APPROVED` or `REJECTED`.
    pub decision: String,
    pub approved_by: DbId,
    pub approval_date: Timestamp,
    pub manager_comments: Option<String>,
    pub evidence_verified: bool,
    pub decision_rationale: String,
    pub created_at: Timestamp,
}

/// Insert payload for a new goal. Built by the workflow engine after
/// validation; always enters the store with status `PENDING`.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub priority: String,
    pub assigned_to_user_id: DbId,
    pub assigned_manager_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub status: String,
}

/// Insert payload for a completion decision record.
#[derive(Debug, Clone)]
pub struct NewCompletionApproval {
    pub goal_id: DbId,
    pub decision: String,
    pub approved_by: DbId,
    pub manager_comments: Option<String>,
    pub evidence_verified: bool,
    pub decision_rationale: String,
}

/// Request body for creating a goal, also reused for the
/// update-after-change-request operation (which ignores `manager_id`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub priority: String,
    pub manager_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
}

/// Request body for submitting completion evidence.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitCompletionRequest {
    pub evidence_link: String,
    pub evidence_link_description: Option<String>,
    pub evidence_access_instructions: Option<String>,
    pub completion_notes: Option<String>,
}
