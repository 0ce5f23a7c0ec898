pub mod audit;
pub mod auth;
pub mod goal;
pub mod health;
pub mod notification;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
///
/// /goals                                       create, list own
/// /goals/team                                  manager's team goals
/// /goals/{id}                                  get, update, delete
/// /goals/{id}/approve                          manager approval
/// /goals/{id}/request-changes                  manager change request
/// /goals/{id}/submit-completion                employee evidence submission
/// /goals/{id}/approve-completion               manager completion approval
/// /goals/{id}/reject-completion                manager completion rejection
/// /goals/{id}/request-additional-evidence      manager evidence request
/// /goals/{id}/verify-evidence                  manager evidence verification
/// /goals/{id}/progress                         add / read progress notes
/// /goals/{id}/approvals                        decision history
/// /goals/{id}/feedback                         feedback history
///
/// /notifications                               list
/// /notifications/unread-count                  count
/// /notifications/{id}/read                     mark one read
/// /notifications/read-all                      mark all read
///
/// /users                                       create account (admin)
///
/// /audit-logs                                  recent entries (admin)
/// /audit-logs/{entity_type}/{entity_id}        entity trail (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/goals", goal::router())
        .nest("/users", user::router())
        .nest("/notifications", notification::router())
        .nest("/audit-logs", audit::router())
}
