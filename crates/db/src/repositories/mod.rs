//! Repository unit structs, one per table.

mod audit_log_repo;
mod completion_approval_repo;
mod feedback_repo;
mod goal_repo;
mod notification_repo;
mod user_repo;

pub use audit_log_repo::AuditLogRepo;
pub use completion_approval_repo::CompletionApprovalRepo;
pub use feedback_repo::FeedbackRepo;
pub use goal_repo::GoalRepo;
pub use notification_repo::NotificationRepo;
pub use user_repo::UserRepo;
