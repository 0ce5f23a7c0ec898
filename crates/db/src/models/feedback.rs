//! Feedback model.

use serde::Serialize;
use sqlx::FromRow;

use perftrack_core::types::{DbId, Timestamp};

/// A row from the `feedback` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub goal_id: DbId,
    pub given_by: DbId,
    pub comments: String,
    /// Feedback type tag, e.g. `CHANGE_REQUEST`.
    pub feedback_type: String,
    pub created_at: Timestamp,
}

/// Insert payload for a feedback row.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub goal_id: DbId,
    pub given_by: DbId,
    pub comments: String,
    pub feedback_type: String,
}
