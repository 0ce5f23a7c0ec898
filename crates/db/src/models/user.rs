//! User model.

use serde::Serialize;
use sqlx::FromRow;

use perftrack_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `password_hash` is skipped on serialization so it can never leak
/// through an API response.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role name: `EMPLOYEE`, `MANAGER`, or `ADMIN`.
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new user. The password is hashed before this
/// struct is built.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
