//! Repository for the `goals` table.
//!
//! Besides plain CRUD, this repo provides the two transactional composite
//! writes the workflow engine requires: a goal update plus a completion
//! decision insert, and a goal update plus a feedback insert. Each pair
//! commits or rolls back as one unit so no partial record can survive a
//! failure.

use sqlx::PgPool;

use perftrack_core::types::{DbId, Timestamp};

use crate::models::feedback::NewFeedback;
use crate::models::goal::{Goal, NewCompletionApproval, NewGoal};
use crate::repositories::{CompletionApprovalRepo, FeedbackRepo};

/// Column list for goals queries.
const GOAL_COLUMNS: &str = "id, title, description, category, priority, \
    assigned_to_user_id, assigned_manager_id, start_date, end_date, status, \
    approved_by, approved_date, request_changes, last_reviewed_by, \
    last_reviewed_date, resubmitted_date, progress_notes, evidence_link, \
    evidence_link_description, evidence_access_instructions, completion_notes, \
    completion_submitted_date, evidence_verification_status, \
    evidence_verification_notes, evidence_verified_by, evidence_verified_date, \
    completion_approval_status, completion_approved_by, \
    completion_approved_date, final_completion_date, \
    manager_completion_comments, created_at, updated_at";

/// Provides CRUD operations for goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a new goal, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewGoal) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals
                (title, description, category, priority, assigned_to_user_id,
                 assigned_manager_id, start_date, end_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {GOAL_COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(input.assigned_to_user_id)
            .bind(input.assigned_manager_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Persist every mutable field of the goal, returning the updated row.
    ///
    /// The assignee and manager references are deliberately not updatable.
    pub async fn update(pool: &PgPool, goal: &Goal) -> Result<Goal, sqlx::Error> {
        Self::update_on(pool, goal).await
    }

    /// Update the goal and insert a completion decision in one transaction.
    pub async fn update_with_decision(
        pool: &PgPool,
        goal: &Goal,
        decision: &NewCompletionApproval,
    ) -> Result<Goal, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let updated = Self::update_on(&mut *tx, goal).await?;
        CompletionApprovalRepo::create_on(&mut *tx, decision).await?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Update the goal and insert a feedback row in one transaction.
    pub async fn update_with_feedback(
        pool: &PgPool,
        goal: &Goal,
        feedback: &NewFeedback,
    ) -> Result<Goal, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let updated = Self::update_on(&mut *tx, goal).await?;
        FeedbackRepo::create_on(&mut *tx, feedback).await?;
        tx.commit().await?;
        Ok(updated)
    }

    /// List all goals assigned to a user, newest first.
    pub async fn list_by_assignee(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {GOAL_COLUMNS} FROM goals
             WHERE assigned_to_user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all goals managed by a user, newest first.
    pub async fn list_by_manager(
        pool: &PgPool,
        manager_id: DbId,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {GOAL_COLUMNS} FROM goals
             WHERE assigned_manager_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's goals filtered by status, newest first.
    pub async fn list_by_assignee_and_status(
        pool: &PgPool,
        user_id: DbId,
        status: &str,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {GOAL_COLUMNS} FROM goals
             WHERE assigned_to_user_id = $1 AND status = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List goals stuck in the given status since before `cutoff`
    /// (by creation time). Used by the reminder job.
    pub async fn list_stale_by_status(
        pool: &PgPool,
        status: &str,
        cutoff: Timestamp,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {GOAL_COLUMNS} FROM goals
             WHERE status = $1 AND created_at < $2
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(status)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// List goals whose completion submission has been awaiting review
    /// since before `cutoff`. Used by the reminder job.
    pub async fn list_stale_completion_submissions(
        pool: &PgPool,
        status: &str,
        cutoff: Timestamp,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {GOAL_COLUMNS} FROM goals
             WHERE status = $1 AND completion_submitted_date < $2
             ORDER BY completion_submitted_date ASC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(status)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Full-row update against any executor, so the same statement runs
    /// both standalone and inside the composite transactions.
    async fn update_on<'e, E>(executor: E, goal: &Goal) -> Result<Goal, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE goals SET
                title = $2,
                description = $3,
                category = $4,
                priority = $5,
                start_date = $6,
                end_date = $7,
                status = $8,
                approved_by = $9,
                approved_date = $10,
                request_changes = $11,
                last_reviewed_by = $12,
                last_reviewed_date = $13,
                resubmitted_date = $14,
                progress_notes = $15,
                evidence_link = $16,
                evidence_link_description = $17,
                evidence_access_instructions = $18,
                completion_notes = $19,
                completion_submitted_date = $20,
                evidence_verification_status = $21,
                evidence_verification_notes = $22,
                evidence_verified_by = $23,
                evidence_verified_date = $24,
                completion_approval_status = $25,
                completion_approved_by = $26,
                completion_approved_date = $27,
                final_completion_date = $28,
                manager_completion_comments = $29,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {GOAL_COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(goal.id)
            .bind(&goal.title)
            .bind(&goal.description)
            .bind(&goal.category)
            .bind(&goal.priority)
            .bind(goal.start_date)
            .bind(goal.end_date)
            .bind(&goal.status)
            .bind(goal.approved_by)
            .bind(goal.approved_date)
            .bind(goal.request_changes)
            .bind(goal.last_reviewed_by)
            .bind(goal.last_reviewed_date)
            .bind(goal.resubmitted_date)
            .bind(&goal.progress_notes)
            .bind(&goal.evidence_link)
            .bind(&goal.evidence_link_description)
            .bind(&goal.evidence_access_instructions)
            .bind(&goal.completion_notes)
            .bind(goal.completion_submitted_date)
            .bind(&goal.evidence_verification_status)
            .bind(&goal.evidence_verification_notes)
            .bind(goal.evidence_verified_by)
            .bind(goal.evidence_verified_date)
            .bind(&goal.completion_approval_status)
            .bind(goal.completion_approved_by)
            .bind(goal.completion_approved_date)
            .bind(goal.final_completion_date)
            .bind(&goal.manager_completion_comments)
            .fetch_one(executor)
            .await
    }
}
