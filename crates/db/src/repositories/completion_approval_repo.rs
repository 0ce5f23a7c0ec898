//! Repository for the `goal_completion_approvals` table.
//!
//! Append-only: decision rows are inserted once and never touched again.

use sqlx::PgPool;

use perftrack_core::types::DbId;

use crate::models::goal::{GoalCompletionApproval, NewCompletionApproval};

/// Column list for goal_completion_approvals queries.
const APPROVAL_COLUMNS: &str = "id, goal_id, decision, approved_by, approval_date, \
    manager_comments, evidence_verified, decision_rationale, created_at";

/// Provides insert/list operations for completion decisions.
pub struct CompletionApprovalRepo;

impl CompletionApprovalRepo {
    /// Insert a decision row against any executor (used inside the
    /// goal-update transaction).
    pub async fn create_on<'e, E>(
        executor: E,
        input: &NewCompletionApproval,
    ) -> Result<GoalCompletionApproval, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO goal_completion_approvals
                (goal_id, decision, approved_by, approval_date, manager_comments,
                 evidence_verified, decision_rationale)
             VALUES ($1, $2, $3, NOW(), $4, $5, $6)
             RETURNING {APPROVAL_COLUMNS}"
        );
        sqlx::query_as::<_, GoalCompletionApproval>(&query)
            .bind(input.goal_id)
            .bind(&input.decision)
            .bind(input.approved_by)
            .bind(&input.manager_comments)
            .bind(input.evidence_verified)
            .bind(&input.decision_rationale)
            .fetch_one(executor)
            .await
    }

    /// List all decisions for a goal, newest first.
    pub async fn list_for_goal(
        pool: &PgPool,
        goal_id: DbId,
    ) -> Result<Vec<GoalCompletionApproval>, sqlx::Error> {
        let query = format!(
            "SELECT {APPROVAL_COLUMNS} FROM goal_completion_approvals
             WHERE goal_id = $1
             ORDER BY approval_date DESC"
        );
        sqlx::query_as::<_, GoalCompletionApproval>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }
}
