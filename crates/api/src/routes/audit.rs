//! Route definitions for the `/audit-logs` resource.
//!
//! All routes require the `ADMIN` role (enforced by handler extractors).

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audit-logs`.
///
/// ```text
/// GET /                            -> list_recent
/// GET /{entity_type}/{entity_id}   -> list_for_entity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(audit::list_recent))
        .route("/{entity_type}/{entity_id}", get(audit::list_for_entity))
}
