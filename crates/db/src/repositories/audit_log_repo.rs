//! Repository for the `audit_logs` table. Insert-only.

use sqlx::PgPool;

use perftrack_core::types::DbId;

use crate::models::audit_log::{AuditLog, NewAuditLog};

/// Column list for audit_logs queries.
const AUDIT_COLUMNS: &str =
    "id, user_id, action, details, entity_type, entity_id, outcome, created_at";

/// Provides insert/list operations for the audit trail.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an audit entry, returning the created row.
    pub async fn record(pool: &PgPool, input: &NewAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs
                (user_id, action, details, entity_type, entity_id, outcome)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {AUDIT_COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(input.user_id)
            .bind(&input.action)
            .bind(&input.details)
            .bind(&input.entity_type)
            .bind(input.entity_id)
            .bind(&input.outcome)
            .fetch_one(pool)
            .await
    }

    /// List recent audit entries, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {AUDIT_COLUMNS} FROM audit_logs
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List the audit trail for a single entity, oldest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {AUDIT_COLUMNS} FROM audit_logs
             WHERE entity_type = $1 AND entity_id = $2
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(entity_type)
            .bind(entity_id)
            .fetch_all(pool)
            .await
    }
}
