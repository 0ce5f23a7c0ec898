//! Domain vocabulary for the performance-tracking backend.
//!
//! This crate has no internal dependencies so it can be used by the
//! persistence layer, the workflow engine, the API, and any future CLI
//! tooling alike.

pub mod approval;
pub mod audit;
pub mod error;
pub mod goal;
pub mod notifications;
pub mod progress;
pub mod roles;
pub mod types;
