//! Route definitions for the `/users` resource.
//!
//! Account provisioning is admin only (enforced by handler extractors).

use axum::routing::post;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST / -> create_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(user::create_user))
}
