//! Goal lifecycle workflow engine.
//!
//! [`GoalWorkflow`](engine::GoalWorkflow) owns every goal state transition:
//! creation, manager approval/rejection, change requests, completion
//! submission, evidence verification, and the final completion decision.
//! It talks to its collaborators (goal store, user directory, notifier,
//! audit recorder) through the capability traits in [`store`], with
//! Postgres-backed implementations in [`pg`].

pub mod engine;
pub mod pg;
pub mod store;

pub use engine::GoalWorkflow;
