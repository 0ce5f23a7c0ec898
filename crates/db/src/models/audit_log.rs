//! Audit log model.

use serde::Serialize;
use sqlx::FromRow;

use perftrack_core::types::{DbId, Timestamp};

/// A row from the `audit_logs` table. Insert-only: audit history is never
/// updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub user_id: DbId,
    /// Action type, e.g. `GOAL_CREATED`.
    pub action: String,
    pub details: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    /// `SUCCESS` or `FAILURE`.
    pub outcome: String,
    pub created_at: Timestamp,
}

/// Insert payload for an audit entry.
#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub user_id: DbId,
    pub action: String,
    pub details: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub outcome: String,
}
