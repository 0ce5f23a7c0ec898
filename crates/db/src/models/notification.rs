//! Notification model.

use serde::Serialize;
use sqlx::FromRow;

use perftrack_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// Notification type, e.g. `GOAL_SUBMITTED`.
    pub kind: String,
    pub message: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    /// `UNREAD` or `READ`.
    pub status: String,
    /// `NORMAL`, `HIGH`, or a goal priority name.
    pub priority: String,
    pub action_required: bool,
    pub read_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Insert payload for a notification.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub kind: String,
    pub message: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub priority: String,
    pub action_required: bool,
}
