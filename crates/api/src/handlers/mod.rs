//! HTTP request handlers, one module per resource.

pub mod audit;
pub mod auth;
pub mod goal;
pub mod notification;
pub mod user;
