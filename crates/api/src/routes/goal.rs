//! Route definitions for the `/goals` resource.
//!
//! All endpoints require authentication; manager-only decision endpoints
//! additionally require an elevated role via the RBAC extractor. The
//! workflow engine enforces the per-goal ownership rules.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::goal;
use crate::state::AppState;

/// Routes mounted at `/goals`.
///
/// ```text
/// POST   /                                  -> create_goal
/// GET    /                                  -> list_own_goals (?status=)
/// GET    /team                              -> list_team_goals
/// GET    /{id}                              -> get_goal
/// PUT    /{id}                              -> update_goal
/// DELETE /{id}                              -> delete_goal
///
/// POST   /{id}/approve                      -> approve_goal
/// POST   /{id}/request-changes              -> request_changes
/// POST   /{id}/submit-completion            -> submit_completion
/// POST   /{id}/approve-completion           -> approve_completion
/// POST   /{id}/reject-completion            -> reject_completion
/// POST   /{id}/request-additional-evidence  -> request_additional_evidence
/// POST   /{id}/verify-evidence              -> verify_evidence
///
/// POST   /{id}/progress                     -> add_progress
/// GET    /{id}/progress                     -> get_progress
/// GET    /{id}/approvals                    -> list_approvals
/// GET    /{id}/feedback                     -> list_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(goal::create_goal).get(goal::list_own_goals))
        .route("/team", get(goal::list_team_goals))
        .route(
            "/{id}",
            get(goal::get_goal)
                .put(goal::update_goal)
                .delete(goal::delete_goal),
        )
        .route("/{id}/approve", post(goal::approve_goal))
        .route("/{id}/request-changes", post(goal::request_changes))
        .route("/{id}/submit-completion", post(goal::submit_completion))
        .route("/{id}/approve-completion", post(goal::approve_completion))
        .route("/{id}/reject-completion", post(goal::reject_completion))
        .route(
            "/{id}/request-additional-evidence",
            post(goal::request_additional_evidence),
        )
        .route("/{id}/verify-evidence", post(goal::verify_evidence))
        .route(
            "/{id}/progress",
            post(goal::add_progress).get(goal::get_progress),
        )
        .route("/{id}/approvals", get(goal::list_approvals))
        .route("/{id}/feedback", get(goal::list_feedback))
}
