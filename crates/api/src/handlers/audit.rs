//! Handlers for the `/audit-logs` resource. Admin only.

use axum::extract::{Path, Query, State};
use axum::Json;
use perftrack_core::types::DbId;
use perftrack_db::repositories::AuditLogRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /audit-logs`.
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    /// Maximum number of results. Defaults to 100, capped at 500.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

const MAX_LIMIT: i64 = 500;
const DEFAULT_LIMIT: i64 = 100;

/// GET /api/v1/audit-logs
///
/// List recent audit entries, newest first.
pub async fn list_recent(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let entries = AuditLogRepo::list_recent(&state.pool, limit, offset).await?;
    Ok(Json(serde_json::json!({ "data": entries })))
}

/// GET /api/v1/audit-logs/{entity_type}/{entity_id}
///
/// Full audit trail for a single entity, oldest first.
pub async fn list_for_entity(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    let entries = AuditLogRepo::list_for_entity(&state.pool, &entity_type, entity_id).await?;
    Ok(Json(serde_json::json!({ "data": entries })))
}
