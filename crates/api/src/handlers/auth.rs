//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use perftrack_core::audit::{actions, outcomes};
use perftrack_core::error::CoreError;
use perftrack_core::types::DbId;
use perftrack_db::models::audit_log::NewAuditLog;
use perftrack_db::repositories::{AuditLogRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns an access token. Both
/// successful and failed attempts against a known account are audited.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        record_login_audit(&state, user.id, outcomes::FAILURE).await;
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    record_login_audit(&state, user.id, outcomes::SUCCESS).await;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
    }))
}

/// Best-effort login audit record; a write failure must not block login.
async fn record_login_audit(state: &AppState, user_id: DbId, outcome: &str) {
    let entry = NewAuditLog {
        user_id,
        action: actions::USER_LOGIN.to_string(),
        details: format!("Login attempt: {outcome}"),
        entity_type: None,
        entity_id: None,
        outcome: outcome.to_string(),
    };
    if let Err(e) = AuditLogRepo::record(&state.pool, &entry).await {
        tracing::warn!(error = %e, user_id, "Failed to record login audit entry");
    }
}
