//! Repository for the `notifications` table.

use sqlx::PgPool;

use perftrack_core::notifications::statuses;
use perftrack_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for notifications queries.
const NOTIFICATION_COLUMNS: &str = "id, user_id, kind, message, entity_type, entity_id, \
    status, priority, action_required, read_date, created_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a new notification (always created UNREAD).
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications
                (user_id, kind, message, entity_type, entity_id, status,
                 priority, action_required)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(&input.kind)
            .bind(&input.message)
            .bind(&input.entity_type)
            .bind(input.entity_id)
            .bind(statuses::UNREAD)
            .bind(&input.priority)
            .bind(input.action_required)
            .fetch_one(pool)
            .await
    }

    /// List a user's notifications, newest first, optionally unread only.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only { "AND status = $4" } else { "" };
        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE user_id = $1 {filter}
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let mut q = sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset);
        if unread_only {
            q = q.bind(statuses::UNREAD);
        }
        q.fetch_all(pool).await
    }

    /// Count a user's unread notifications.
    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id)
        .bind(statuses::UNREAD)
        .fetch_one(pool)
        .await
    }

    /// Mark a single notification as read. Returns `false` when the row
    /// does not exist or belongs to another user.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET status = $3, read_date = NOW()
             WHERE id = $1 AND user_id = $2",
        )
        .bind(notification_id)
        .bind(user_id)
        .bind(statuses::READ)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all of a user's unread notifications as read, returning the
    /// number of rows affected.
    pub async fn mark_all_read(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET status = $2, read_date = NOW()
             WHERE user_id = $1 AND status = $3",
        )
        .bind(user_id)
        .bind(statuses::READ)
        .bind(statuses::UNREAD)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
