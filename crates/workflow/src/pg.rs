//! Postgres-backed implementations of the workflow capability traits,
//! delegating to the repositories in `perftrack-db`.

use async_trait::async_trait;

use perftrack_core::error::CoreError;
use perftrack_core::types::DbId;
use perftrack_db::models::audit_log::NewAuditLog;
use perftrack_db::models::feedback::NewFeedback;
use perftrack_db::models::goal::{Goal, NewCompletionApproval, NewGoal};
use perftrack_db::models::notification::CreateNotification;
use perftrack_db::models::user::User;
use perftrack_db::repositories::{
    AuditLogRepo, GoalRepo, NotificationRepo, UserRepo,
};
use perftrack_db::DbPool;

use crate::store::{AuditRecorder, GoalStore, Notifier, UserDirectory};

fn db_err(e: sqlx::Error) -> CoreError {
    CoreError::Internal(e.to_string())
}

/// [`GoalStore`] over the `goals` table.
pub struct PgGoalStore {
    pool: DbPool,
}

impl PgGoalStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalStore for PgGoalStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Goal>, CoreError> {
        GoalRepo::find_by_id(&self.pool, id).await.map_err(db_err)
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, CoreError> {
        GoalRepo::create(&self.pool, goal).await.map_err(db_err)
    }

    async fn update(&self, goal: &Goal) -> Result<Goal, CoreError> {
        GoalRepo::update(&self.pool, goal).await.map_err(db_err)
    }

    async fn update_with_decision(
        &self,
        goal: &Goal,
        decision: &NewCompletionApproval,
    ) -> Result<Goal, CoreError> {
        GoalRepo::update_with_decision(&self.pool, goal, decision)
            .await
            .map_err(db_err)
    }

    async fn update_with_feedback(
        &self,
        goal: &Goal,
        feedback: &NewFeedback,
    ) -> Result<Goal, CoreError> {
        GoalRepo::update_with_feedback(&self.pool, goal, feedback)
            .await
            .map_err(db_err)
    }

    async fn list_by_assignee(&self, user_id: DbId) -> Result<Vec<Goal>, CoreError> {
        GoalRepo::list_by_assignee(&self.pool, user_id)
            .await
            .map_err(db_err)
    }

    async fn list_by_manager(&self, manager_id: DbId) -> Result<Vec<Goal>, CoreError> {
        GoalRepo::list_by_manager(&self.pool, manager_id)
            .await
            .map_err(db_err)
    }

    async fn list_by_assignee_and_status(
        &self,
        user_id: DbId,
        status: &str,
    ) -> Result<Vec<Goal>, CoreError> {
        GoalRepo::list_by_assignee_and_status(&self.pool, user_id, status)
            .await
            .map_err(db_err)
    }
}

/// [`UserDirectory`] over the `users` table.
pub struct PgUserDirectory {
    pool: DbPool,
}

impl PgUserDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError> {
        UserRepo::find_by_id(&self.pool, id).await.map_err(db_err)
    }
}

/// [`Notifier`] that persists notifications for in-app delivery.
pub struct PgNotifier {
    pool: DbPool,
}

impl PgNotifier {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Notifier for PgNotifier {
    async fn notify(&self, input: &CreateNotification) -> Result<(), CoreError> {
        NotificationRepo::create(&self.pool, input)
            .await
            .map(|_| ())
            .map_err(db_err)
    }
}

/// [`AuditRecorder`] over the `audit_logs` table.
pub struct PgAuditRecorder {
    pool: DbPool,
}

impl PgAuditRecorder {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRecorder for PgAuditRecorder {
    async fn record(&self, entry: &NewAuditLog) -> Result<(), CoreError> {
        AuditLogRepo::record(&self.pool, entry)
            .await
            .map(|_| ())
            .map_err(db_err)
    }
}
