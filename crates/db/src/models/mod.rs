//! Row models and create DTOs, one module per table.

pub mod audit_log;
pub mod feedback;
pub mod goal;
pub mod notification;
pub mod user;
