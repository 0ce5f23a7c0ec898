//! Collaborator capabilities the workflow engine depends on.
//!
//! The engine never touches a connection pool directly; everything it
//! needs from the outside world is expressed as one of these four traits.
//! Production wires in the Postgres implementations from [`crate::pg`];
//! tests substitute in-memory fakes.

use async_trait::async_trait;

use perftrack_core::error::CoreError;
use perftrack_core::types::DbId;
use perftrack_db::models::audit_log::NewAuditLog;
use perftrack_db::models::feedback::NewFeedback;
use perftrack_db::models::goal::{Goal, NewCompletionApproval, NewGoal};
use perftrack_db::models::notification::CreateNotification;
use perftrack_db::models::user::User;

/// Goal persistence.
///
/// The two `update_with_*` methods are the atomic composite writes the
/// workflow requires: the goal mutation and its companion record commit
/// or fail as one unit, so a failure partway through leaves no partial
/// record behind.
#[async_trait]
pub trait GoalStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Goal>, CoreError>;

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, CoreError>;

    async fn update(&self, goal: &Goal) -> Result<Goal, CoreError>;

    /// Update the goal and append a completion decision record atomically.
    async fn update_with_decision(
        &self,
        goal: &Goal,
        decision: &NewCompletionApproval,
    ) -> Result<Goal, CoreError>;

    /// Update the goal and append a feedback record atomically.
    async fn update_with_feedback(
        &self,
        goal: &Goal,
        feedback: &NewFeedback,
    ) -> Result<Goal, CoreError>;

    async fn list_by_assignee(&self, user_id: DbId) -> Result<Vec<Goal>, CoreError>;

    async fn list_by_manager(&self, manager_id: DbId) -> Result<Vec<Goal>, CoreError>;

    async fn list_by_assignee_and_status(
        &self,
        user_id: DbId,
        status: &str,
    ) -> Result<Vec<Goal>, CoreError>;
}

/// User lookup.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError>;
}

/// Notification creation. Delivery mechanics (persistence, live push) are
/// the implementation's concern; the engine only states what to send.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, input: &CreateNotification) -> Result<(), CoreError>;
}

/// Append-only audit trail.
#[async_trait]
pub trait AuditRecorder: Send + Sync {
    async fn record(&self, entry: &NewAuditLog) -> Result<(), CoreError>;
}
