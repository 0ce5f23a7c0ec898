//! Periodic review reminders for managers.
//!
//! Scans for goals stuck awaiting manager action and sends each affected
//! manager one aggregated `REVIEW_REMINDER` notification per category:
//! goals pending initial approval for over two days, and completion
//! submissions awaiting review for over three days. Read-only with respect
//! to goals; the only writes are notification rows.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use perftrack_core::goal::GoalStatus;
use perftrack_core::notifications::{priorities, types};
use perftrack_core::types::DbId;
use perftrack_db::models::goal::Goal;
use perftrack_db::models::notification::CreateNotification;
use perftrack_db::repositories::{GoalRepo, NotificationRepo};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How long a goal may sit in PENDING before its manager is reminded.
const PENDING_APPROVAL_DAYS: i64 = 2;

/// How long a completion submission may await review before a reminder.
const PENDING_COMPLETION_DAYS: i64 = 3;

/// How often the reminder job runs.
const REMINDER_INTERVAL: Duration = Duration::from_secs(6 * 3600);

/// Run the review reminder loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = REMINDER_INTERVAL.as_secs(),
        "Review reminder job started"
    );

    let mut interval = tokio::time::interval(REMINDER_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Review reminder job stopping");
                break;
            }
            _ = interval.tick() => {
                if let Err(e) = send_reminders(&pool).await {
                    tracing::error!(error = %e, "Review reminder pass failed");
                }
            }
        }
    }
}

/// One reminder pass: both staleness categories, one aggregated
/// notification per manager per category.
async fn send_reminders(pool: &PgPool) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    let stale_pending = GoalRepo::list_stale_by_status(
        pool,
        GoalStatus::Pending.as_str(),
        now - chrono::Duration::days(PENDING_APPROVAL_DAYS),
    )
    .await?;
    notify_managers(pool, &stale_pending, |count| {
        format!("You have {count} goal(s) pending approval for over {PENDING_APPROVAL_DAYS} days")
    })
    .await;

    let stale_completions = GoalRepo::list_stale_completion_submissions(
        pool,
        GoalStatus::PendingCompletionApproval.as_str(),
        now - chrono::Duration::days(PENDING_COMPLETION_DAYS),
    )
    .await?;
    notify_managers(pool, &stale_completions, |count| {
        format!(
            "You have {count} goal(s) pending completion approval for over {PENDING_COMPLETION_DAYS} days"
        )
    })
    .await;

    Ok(())
}

/// Group goals by assigned manager and send one reminder each.
async fn notify_managers(pool: &PgPool, goals: &[Goal], message: impl Fn(usize) -> String) {
    let mut by_manager: HashMap<DbId, usize> = HashMap::new();
    for goal in goals {
        *by_manager.entry(goal.assigned_manager_id).or_default() += 1;
    }

    for (manager_id, count) in by_manager {
        let input = CreateNotification {
            user_id: manager_id,
            kind: types::REVIEW_REMINDER.to_string(),
            message: message(count),
            entity_type: None,
            entity_id: None,
            priority: priorities::HIGH.to_string(),
            action_required: true,
        };
        if let Err(e) = NotificationRepo::create(pool, &input).await {
            tracing::warn!(error = %e, manager_id, "Failed to send review reminder");
        } else {
            tracing::debug!(manager_id, count, "Review reminder sent");
        }
    }
}
