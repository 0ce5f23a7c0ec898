use std::sync::Arc;

use perftrack_workflow::GoalWorkflow;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is internally reference-counted and the rest
/// sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: perftrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The goal lifecycle workflow engine.
    pub workflow: Arc<GoalWorkflow>,
}

impl AppState {
    /// Build production state: the workflow engine wired to its
    /// Postgres-backed collaborators over `pool`.
    pub fn new(pool: perftrack_db::DbPool, config: Arc<ServerConfig>) -> Self {
        let workflow = Arc::new(GoalWorkflow::new(
            Arc::new(perftrack_workflow::pg::PgGoalStore::new(pool.clone())),
            Arc::new(perftrack_workflow::pg::PgUserDirectory::new(pool.clone())),
            Arc::new(perftrack_workflow::pg::PgNotifier::new(pool.clone())),
            Arc::new(perftrack_workflow::pg::PgAuditRecorder::new(pool.clone())),
        ));
        Self {
            pool,
            config,
            workflow,
        }
    }
}
