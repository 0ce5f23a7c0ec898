//! Repository for the `feedback` table.

use sqlx::PgPool;

use perftrack_core::types::DbId;

use crate::models::feedback::{Feedback, NewFeedback};

/// Column list for feedback queries.
const FEEDBACK_COLUMNS: &str = "id, goal_id, given_by, comments, feedback_type, created_at";

/// Provides insert/list operations for feedback rows.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a feedback row against any executor (used inside the
    /// goal-update transaction).
    pub async fn create_on<'e, E>(
        executor: E,
        input: &NewFeedback,
    ) -> Result<Feedback, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO feedback (goal_id, given_by, comments, feedback_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {FEEDBACK_COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.goal_id)
            .bind(input.given_by)
            .bind(&input.comments)
            .bind(&input.feedback_type)
            .fetch_one(executor)
            .await
    }

    /// List all feedback for a goal, newest first.
    pub async fn list_for_goal(
        pool: &PgPool,
        goal_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedback
             WHERE goal_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }
}
