//! Handlers for the `/goals` resource.
//!
//! Handlers stay thin: they unpack the request and delegate to the
//! workflow engine, which owns validation, authorization against the
//! goal's assignee/manager, transitions, and side effects. The RBAC
//! extractors only gate which routes a role may hit at all.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use perftrack_core::types::DbId;
use perftrack_db::models::goal::{
    CreateGoalRequest, Goal, GoalCompletionApproval, SubmitCompletionRequest,
};
use perftrack_db::repositories::{CompletionApprovalRepo, FeedbackRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /goals`.
#[derive(Debug, Deserialize)]
pub struct GoalListQuery {
    /// Optional lifecycle status filter (e.g. `IN_PROGRESS`).
    pub status: Option<String>,
}

/// Request body for `POST /goals/{id}/request-changes`.
#[derive(Debug, Deserialize)]
pub struct RequestChangesBody {
    pub comments: String,
}

/// Request body for `POST /goals/{id}/approve-completion`.
#[derive(Debug, Deserialize)]
pub struct ApproveCompletionBody {
    pub comments: Option<String>,
}

/// Request body for decisions that carry a mandatory reason
/// (reject-completion, request-additional-evidence).
#[derive(Debug, Deserialize)]
pub struct ReasonBody {
    pub reason: String,
}

/// Request body for `POST /goals/{id}/verify-evidence`.
#[derive(Debug, Deserialize)]
pub struct VerifyEvidenceBody {
    pub status: String,
    pub notes: Option<String>,
}

/// Request body for `POST /goals/{id}/progress`.
#[derive(Debug, Deserialize)]
pub struct ProgressBody {
    pub note: String,
}

// ---------------------------------------------------------------------------
// Creation and reads
// ---------------------------------------------------------------------------

/// POST /api/v1/goals
pub async fn create_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGoalRequest>,
) -> AppResult<impl IntoResponse> {
    let goal = state.workflow.create_goal(&input, auth.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// GET /api/v1/goals
///
/// List the authenticated user's own goals, optionally filtered by status.
pub async fn list_own_goals(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<GoalListQuery>,
) -> AppResult<Json<DataResponse<Vec<Goal>>>> {
    let goals = match params.status {
        Some(status) => {
            state
                .workflow
                .goals_for_user_with_status(auth.user_id, &status)
                .await?
        }
        None => state.workflow.goals_for_user(auth.user_id).await?,
    };
    Ok(Json(DataResponse { data: goals }))
}

/// GET /api/v1/goals/team
///
/// List all goals the authenticated manager is responsible for.
pub async fn list_team_goals(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Goal>>>> {
    let goals = state.workflow.goals_for_manager(auth.user_id).await?;
    Ok(Json(DataResponse { data: goals }))
}

/// GET /api/v1/goals/{id}
pub async fn get_goal(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state.workflow.get_goal(goal_id).await?;
    Ok(Json(DataResponse { data: goal }))
}

/// PUT /api/v1/goals/{id}
///
/// Rework the goal definition after a change request and resubmit it.
pub async fn update_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<CreateGoalRequest>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .update_goal(goal_id, &input, auth.user_id)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /api/v1/goals/{id}
///
/// Soft delete. Employees may only delete their own goals; managers and
/// admins may delete any.
pub async fn delete_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let role = auth.parsed_role()?;
    state
        .workflow
        .delete_goal(goal_id, auth.user_id, role)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Initial approval
// ---------------------------------------------------------------------------

/// POST /api/v1/goals/{id}/approve
pub async fn approve_goal(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state.workflow.approve_goal(goal_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: goal }))
}

/// POST /api/v1/goals/{id}/request-changes
pub async fn request_changes(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<RequestChangesBody>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .request_changes(goal_id, auth.user_id, &input.comments)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// POST /api/v1/goals/{id}/submit-completion
pub async fn submit_completion(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<SubmitCompletionRequest>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .submit_completion(goal_id, &input, auth.user_id)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// POST /api/v1/goals/{id}/approve-completion
pub async fn approve_completion(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<ApproveCompletionBody>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .approve_completion(goal_id, input.comments, auth.user_id)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// POST /api/v1/goals/{id}/reject-completion
pub async fn reject_completion(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<ReasonBody>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .reject_completion(goal_id, &input.reason, auth.user_id)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// POST /api/v1/goals/{id}/request-additional-evidence
pub async fn request_additional_evidence(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<ReasonBody>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .request_additional_evidence(goal_id, &input.reason, auth.user_id)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// POST /api/v1/goals/{id}/verify-evidence
pub async fn verify_evidence(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<VerifyEvidenceBody>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .verify_evidence(goal_id, &input.status, input.notes, auth.user_id)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// GET /api/v1/goals/{id}/approvals
///
/// The full decision history for a goal's completion submissions.
pub async fn list_approvals(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<GoalCompletionApproval>>>> {
    let approvals = CompletionApprovalRepo::list_for_goal(&state.pool, goal_id).await?;
    Ok(Json(DataResponse { data: approvals }))
}

/// GET /api/v1/goals/{id}/feedback
pub async fn list_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let feedback = FeedbackRepo::list_for_goal(&state.pool, goal_id).await?;
    Ok(Json(serde_json::json!({ "data": feedback })))
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// POST /api/v1/goals/{id}/progress
pub async fn add_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<ProgressBody>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = state
        .workflow
        .add_progress_update(goal_id, auth.user_id, &input.note)
        .await?;
    Ok(Json(DataResponse { data: goal }))
}

/// GET /api/v1/goals/{id}/progress
pub async fn get_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let notes = state.workflow.get_progress_updates(goal_id).await?;
    Ok(Json(serde_json::json!({ "data": { "progress_notes": notes } })))
}
