//! End-to-end workflow tests over in-memory collaborators.

mod common;

use std::sync::atomic::Ordering;

use assert_matches::assert_matches;
use chrono::NaiveDate;

use common::{Harness, ADMIN_ID, EMPLOYEE_ID, MANAGER_ID, OTHER_EMPLOYEE_ID};
use perftrack_core::error::CoreError;
use perftrack_core::types::DbId;
use perftrack_db::models::goal::{CreateGoalRequest, Goal, NewGoal, SubmitCompletionRequest};
use perftrack_workflow::store::GoalStore;

fn goal_request() -> CreateGoalRequest {
    CreateGoalRequest {
        title: "Ship the Q3 reporting pipeline".to_string(),
        description: Some("Design, build, and deploy the pipeline".to_string()),
        category: "TECHNICAL".to_string(),
        priority: "HIGH".to_string(),
        manager_id: MANAGER_ID,
        start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    }
}

fn completion_request() -> SubmitCompletionRequest {
    SubmitCompletionRequest {
        evidence_link: "https://repo.example.com/pipeline".to_string(),
        evidence_link_description: Some("Merged PRs and dashboard".to_string()),
        evidence_access_instructions: None,
        completion_notes: Some("Deployed to production".to_string()),
    }
}

async fn created_goal(h: &Harness) -> Goal {
    h.workflow
        .create_goal(&goal_request(), EMPLOYEE_ID)
        .await
        .unwrap()
}

async fn in_progress_goal(h: &Harness) -> Goal {
    let goal = created_goal(h).await;
    h.workflow.approve_goal(goal.id, MANAGER_ID).await.unwrap()
}

async fn submitted_goal(h: &Harness) -> Goal {
    let goal = in_progress_goal(h).await;
    h.workflow
        .submit_completion(goal.id, &completion_request(), EMPLOYEE_ID)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_goal_starts_pending_and_notifies_manager() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    assert_eq!(goal.status, "PENDING");
    assert_eq!(goal.assigned_to_user_id, EMPLOYEE_ID);
    assert_eq!(goal.assigned_manager_id, MANAGER_ID);
    assert!(!goal.request_changes);

    let sent = h.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id, MANAGER_ID);
    assert_eq!(sent[0].kind, "GOAL_SUBMITTED");
    assert_eq!(
        sent[0].message,
        "Ava Patel submitted goal: Ship the Q3 reporting pipeline"
    );
    // Submission notifications inherit the goal's own priority.
    assert_eq!(sent[0].priority, "HIGH");
    assert!(sent[0].action_required);

    let audit = h.audit_entries();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].user_id, EMPLOYEE_ID);
    assert_eq!(audit[0].action, "GOAL_CREATED");
    assert_eq!(audit[0].entity_id, Some(goal.id));
}

#[tokio::test]
async fn create_goal_rejects_self_managed_goal() {
    let h = Harness::new();
    let mut req = goal_request();
    req.manager_id = EMPLOYEE_ID;

    let err = h.workflow.create_goal(&req, EMPLOYEE_ID).await.unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
    assert!(h.sent().is_empty());
}

#[tokio::test]
async fn create_goal_with_unknown_manager_is_not_found() {
    let h = Harness::new();
    let mut req = goal_request();
    req.manager_id = 999;

    let err = h.workflow.create_goal(&req, EMPLOYEE_ID).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Manager", id: 999 });
}

#[tokio::test]
async fn create_goal_rejects_inverted_date_range() {
    let h = Harness::new();
    let mut req = goal_request();
    req.end_date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

    let err = h.workflow.create_goal(&req, EMPLOYEE_ID).await.unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "End date must be after start date"
    );
}

// ---------------------------------------------------------------------------
// Initial approval
// ---------------------------------------------------------------------------

#[tokio::test]
async fn approve_goal_moves_to_in_progress() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let approved = h.workflow.approve_goal(goal.id, MANAGER_ID).await.unwrap();

    assert_eq!(approved.status, "IN_PROGRESS");
    assert_eq!(approved.approved_by, Some(MANAGER_ID));
    assert!(approved.approved_date.is_some());

    let sent = h.sent();
    let note = sent.last().unwrap();
    assert_eq!(note.user_id, EMPLOYEE_ID);
    assert_eq!(note.kind, "GOAL_APPROVED");
    assert!(!note.action_required);
}

#[tokio::test]
async fn approve_goal_rejects_other_manager() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let err = h
        .workflow
        .approve_goal(goal.id, OTHER_EMPLOYEE_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Unauthorized(msg) if msg == "Not authorized to approve this goal"
    );
    assert_eq!(h.goals.goal(goal.id).status, "PENDING");
}

#[tokio::test]
async fn approve_goal_twice_fails_and_leaves_goal_unchanged() {
    let h = Harness::new();
    let goal = created_goal(&h).await;
    let first = h.workflow.approve_goal(goal.id, MANAGER_ID).await.unwrap();

    let err = h
        .workflow
        .approve_goal(goal.id, MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not in pending status"
    );

    let stored = h.goals.goal(goal.id);
    assert_eq!(stored.status, "IN_PROGRESS");
    assert_eq!(stored.approved_date, first.approved_date);
}

#[tokio::test]
async fn request_changes_raises_flag_and_records_feedback() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let updated = h
        .workflow
        .request_changes(goal.id, MANAGER_ID, "Scope is too broad")
        .await
        .unwrap();

    // The top-level status does not move on a change request.
    assert_eq!(updated.status, "PENDING");
    assert!(updated.request_changes);
    assert_eq!(updated.last_reviewed_by, Some(MANAGER_ID));

    let feedback = h.goals.feedback.lock().unwrap().clone();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].goal_id, goal.id);
    assert_eq!(feedback[0].given_by, MANAGER_ID);
    assert_eq!(feedback[0].comments, "Scope is too broad");
    assert_eq!(feedback[0].feedback_type, "CHANGE_REQUEST");

    let note = h.sent().last().unwrap().clone();
    assert_eq!(note.kind, "GOAL_CHANGE_REQUESTED");
    assert_eq!(note.user_id, EMPLOYEE_ID);
    assert!(note.action_required);
}

#[tokio::test]
async fn update_goal_requires_an_open_change_request() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let err = h
        .workflow
        .update_goal(goal.id, &goal_request(), EMPLOYEE_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not in change request status"
    );
}

#[tokio::test]
async fn update_goal_resubmits_and_cannot_reassign_manager() {
    let h = Harness::new();
    let goal = created_goal(&h).await;
    h.workflow
        .request_changes(goal.id, MANAGER_ID, "Narrow the scope")
        .await
        .unwrap();

    let mut req = goal_request();
    req.title = "Ship the Q3 reporting pipeline (phase 1)".to_string();
    req.manager_id = 999 as DbId; // ignored
    let updated = h
        .workflow
        .update_goal(goal.id, &req, EMPLOYEE_ID)
        .await
        .unwrap();

    assert_eq!(updated.title, "Ship the Q3 reporting pipeline (phase 1)");
    assert_eq!(updated.assigned_manager_id, MANAGER_ID);
    assert!(!updated.request_changes);
    assert!(updated.resubmitted_date.is_some());
    assert_eq!(updated.status, "PENDING");

    let note = h.sent().last().unwrap().clone();
    assert_eq!(note.kind, "GOAL_RESUBMITTED");
    assert_eq!(note.user_id, MANAGER_ID);
    assert_eq!(
        note.message,
        "Ava Patel updated and resubmitted goal: Ship the Q3 reporting pipeline (phase 1)"
    );
}

// ---------------------------------------------------------------------------
// Completion submission and decision
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_completion_requires_in_progress() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let err = h
        .workflow
        .submit_completion(goal.id, &completion_request(), EMPLOYEE_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not in progress"
    );
}

#[tokio::test]
async fn submit_completion_initializes_sub_statuses() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;

    assert_eq!(goal.status, "PENDING_COMPLETION_APPROVAL");
    assert_eq!(goal.completion_approval_status.as_deref(), Some("PENDING"));
    assert_eq!(
        goal.evidence_verification_status.as_deref(),
        Some("NOT_VERIFIED")
    );
    assert_eq!(
        goal.evidence_link.as_deref(),
        Some("https://repo.example.com/pipeline")
    );
    assert!(goal.completion_submitted_date.is_some());

    let note = h.sent().last().unwrap().clone();
    assert_eq!(note.user_id, MANAGER_ID);
    assert_eq!(note.kind, "GOAL_COMPLETION_SUBMITTED");
    assert_eq!(note.priority, "HIGH");
    assert!(note.action_required);
}

// Rows can reference users that have since been removed from the
// directory. Operations on such goals must fail on the user lookup
// before writing anything.
async fn orphaned_goal(h: &Harness, status: &str) -> Goal {
    h.goals
        .insert(&NewGoal {
            title: "Migrate the billing exports".to_string(),
            description: None,
            category: "TECHNICAL".to_string(),
            priority: "MEDIUM".to_string(),
            assigned_to_user_id: 99,
            assigned_manager_id: MANAGER_ID,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            status: status.to_string(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn submit_completion_by_unknown_employee_leaves_goal_untouched() {
    let h = Harness::new();
    let goal = orphaned_goal(&h, "IN_PROGRESS").await;

    let err = h
        .workflow
        .submit_completion(goal.id, &completion_request(), 99)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Employee", id: 99 });

    let stored = h.goals.goal(goal.id);
    assert_eq!(stored.status, "IN_PROGRESS");
    assert_eq!(stored.evidence_link, None);
    assert_eq!(stored.completion_submitted_date, None);
}

#[tokio::test]
async fn update_goal_by_unknown_employee_leaves_goal_untouched() {
    let h = Harness::new();
    let mut goal = orphaned_goal(&h, "PENDING").await;
    goal.request_changes = true;
    h.goals.update(&goal).await.unwrap();

    let err = h
        .workflow
        .update_goal(goal.id, &goal_request(), 99)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Employee", id: 99 });

    let stored = h.goals.goal(goal.id);
    assert_eq!(stored.title, "Migrate the billing exports");
    assert!(stored.request_changes);
    assert_eq!(stored.resubmitted_date, None);
}

#[tokio::test]
async fn approve_completion_completes_goal_with_one_decision_record() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;

    let done = h
        .workflow
        .approve_completion(goal.id, Some("Great work".to_string()), MANAGER_ID)
        .await
        .unwrap();

    assert_eq!(done.status, "COMPLETED");
    assert_eq!(done.completion_approval_status.as_deref(), Some("APPROVED"));
    assert_eq!(done.completion_approved_by, Some(MANAGER_ID));
    assert!(done.final_completion_date.is_some());
    assert_eq!(
        done.evidence_verification_status.as_deref(),
        Some("VERIFIED")
    );
    assert_eq!(done.evidence_verified_by, Some(MANAGER_ID));
    assert_eq!(done.manager_completion_comments.as_deref(), Some("Great work"));

    let decisions = h.goals.decisions.lock().unwrap().clone();
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].decision, "APPROVED");
    assert!(decisions[0].evidence_verified);
    assert_eq!(
        decisions[0].decision_rationale,
        "Evidence verified and goal completion approved"
    );

    let note = h.sent().last().unwrap().clone();
    assert_eq!(note.kind, "GOAL_COMPLETION_APPROVED");
    assert_eq!(note.user_id, EMPLOYEE_ID);
    assert!(!note.action_required);
}

#[tokio::test]
async fn approve_completion_requires_pending_completion_approval() {
    let h = Harness::new();
    let goal = in_progress_goal(&h).await;

    let err = h
        .workflow
        .approve_completion(goal.id, None, MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not pending completion approval"
    );
    assert!(h.goals.decisions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn reject_completion_returns_goal_to_in_progress() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;

    let back = h
        .workflow
        .reject_completion(goal.id, "Evidence link is broken", MANAGER_ID)
        .await
        .unwrap();

    assert_eq!(back.status, "IN_PROGRESS");
    assert_eq!(back.completion_approval_status.as_deref(), Some("REJECTED"));
    assert_eq!(
        back.manager_completion_comments.as_deref(),
        Some("Evidence link is broken")
    );

    let decisions = h.goals.decisions.lock().unwrap().clone();
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].decision, "REJECTED");
    assert!(!decisions[0].evidence_verified);
    assert_eq!(decisions[0].decision_rationale, "Goal completion rejected");

    let note = h.sent().last().unwrap().clone();
    assert_eq!(note.kind, "GOAL_COMPLETION_REJECTED");
    assert!(note.action_required);
}

#[tokio::test]
async fn reject_completion_outside_review_is_invalid() {
    let h = Harness::new();
    let goal = in_progress_goal(&h).await;

    let err = h
        .workflow
        .reject_completion(goal.id, "n/a", MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

#[tokio::test]
async fn reject_completion_on_pending_goal_fails_without_side_effects() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let err = h
        .workflow
        .reject_completion(goal.id, "not up for review yet", MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not pending completion approval"
    );

    // A never-approved goal must not slip into IN_PROGRESS or gain
    // completion state from a misplaced rejection.
    let stored = h.goals.goal(goal.id);
    assert_eq!(stored.status, "PENDING");
    assert_eq!(stored.completion_approval_status, None);
    assert!(h.goals.decisions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn request_additional_evidence_keeps_top_level_status() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;

    let updated = h
        .workflow
        .request_additional_evidence(goal.id, "Dashboard link is private", MANAGER_ID)
        .await
        .unwrap();

    assert_eq!(updated.status, "PENDING_COMPLETION_APPROVAL");
    assert_eq!(
        updated.completion_approval_status.as_deref(),
        Some("ADDITIONAL_EVIDENCE_REQUIRED")
    );
    assert_eq!(
        updated.evidence_verification_status.as_deref(),
        Some("NEEDS_ADDITIONAL_LINK")
    );
    assert_eq!(
        updated.evidence_verification_notes.as_deref(),
        Some("Dashboard link is private")
    );

    let note = h.sent().last().unwrap().clone();
    assert_eq!(note.kind, "ADDITIONAL_EVIDENCE_REQUIRED");
    assert!(note.action_required);
}

#[tokio::test]
async fn request_additional_evidence_requires_completion_review() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let err = h
        .workflow
        .request_additional_evidence(goal.id, "where is the link", MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not pending completion approval"
    );

    let stored = h.goals.goal(goal.id);
    assert_eq!(stored.completion_approval_status, None);
    assert_eq!(stored.evidence_verification_status, None);
}

#[tokio::test]
async fn verify_evidence_accepts_lowercase_token_and_sends_no_notification() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;
    let sent_before = h.sent().len();

    let updated = h
        .workflow
        .verify_evidence(goal.id, "verified", Some("Checked the repo".to_string()), MANAGER_ID)
        .await
        .unwrap();

    assert_eq!(
        updated.evidence_verification_status.as_deref(),
        Some("VERIFIED")
    );
    assert_eq!(updated.evidence_verified_by, Some(MANAGER_ID));
    assert_eq!(h.sent().len(), sent_before);

    let audit = h.audit_entries();
    let last = audit.last().unwrap();
    assert_eq!(last.action, "EVIDENCE_VERIFIED");
    assert!(last.details.ends_with("Status: VERIFIED"));
}

#[tokio::test]
async fn verify_evidence_rejects_unknown_token() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;

    let err = h
        .workflow
        .verify_evidence(goal.id, "KIND_OF_OK", None, MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

#[tokio::test]
async fn verify_evidence_requires_completion_review() {
    let h = Harness::new();
    let goal = in_progress_goal(&h).await;

    let err = h
        .workflow
        .verify_evidence(goal.id, "VERIFIED", None, MANAGER_ID)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Validation(msg) if msg == "Goal is not pending completion approval"
    );
    assert_eq!(h.goals.goal(goal.id).evidence_verification_status, None);
}

// ---------------------------------------------------------------------------
// Soft delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_goal_marks_rejected_and_audits() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    h.workflow
        .delete_goal(goal.id, EMPLOYEE_ID, perftrack_core::roles::Role::Employee)
        .await
        .unwrap();

    assert_eq!(h.goals.goal(goal.id).status, "REJECTED");
    let last = h.audit_entries().last().unwrap().clone();
    assert_eq!(last.action, "GOAL_DELETED");
    assert_eq!(last.user_id, EMPLOYEE_ID);
}

#[tokio::test]
async fn delete_goal_twice_is_idempotent_with_two_audit_records() {
    let h = Harness::new();
    let goal = created_goal(&h).await;
    let role = perftrack_core::roles::Role::Employee;

    h.workflow.delete_goal(goal.id, EMPLOYEE_ID, role).await.unwrap();
    h.workflow.delete_goal(goal.id, EMPLOYEE_ID, role).await.unwrap();

    assert_eq!(h.goals.goal(goal.id).status, "REJECTED");
    let deletions = h
        .audit_entries()
        .iter()
        .filter(|e| e.action == "GOAL_DELETED")
        .count();
    assert_eq!(deletions, 2);
}

#[tokio::test]
async fn delete_goal_by_unrelated_employee_is_unauthorized() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let err = h
        .workflow
        .delete_goal(goal.id, OTHER_EMPLOYEE_ID, perftrack_core::roles::Role::Employee)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        CoreError::Unauthorized(msg) if msg == "Not authorized to delete this goal"
    );
}

#[tokio::test]
async fn elevated_roles_may_delete_any_goal() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    h.workflow
        .delete_goal(goal.id, ADMIN_ID, perftrack_core::roles::Role::Admin)
        .await
        .unwrap();
    assert_eq!(h.goals.goal(goal.id).status, "REJECTED");
}

#[tokio::test]
async fn completed_goals_cannot_be_deleted() {
    let h = Harness::new();
    let goal = submitted_goal(&h).await;
    h.workflow
        .approve_completion(goal.id, None, MANAGER_ID)
        .await
        .unwrap();

    let err = h
        .workflow
        .delete_goal(goal.id, EMPLOYEE_ID, perftrack_core::roles::Role::Employee)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
    assert_eq!(h.goals.goal(goal.id).status, "COMPLETED");
}

// ---------------------------------------------------------------------------
// Progress updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn progress_notes_append_in_order() {
    let h = Harness::new();
    let goal = in_progress_goal(&h).await;

    for note in ["Kicked off design", "Schema merged", "Backfill running"] {
        h.workflow
            .add_progress_update(goal.id, EMPLOYEE_ID, note)
            .await
            .unwrap();
    }

    let notes = h.workflow.get_progress_updates(goal.id).await.unwrap();
    let lines: Vec<&str> = notes.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("Kicked off design"));
    assert!(lines[1].ends_with("Schema merged"));
    assert!(lines[2].ends_with("Backfill running"));
    // Each line carries its timestamp prefix.
    assert!(lines[0].contains(": "));
}

#[tokio::test]
async fn progress_read_on_empty_goal_returns_placeholder() {
    let h = Harness::new();
    let goal = created_goal(&h).await;

    let notes = h.workflow.get_progress_updates(goal.id).await.unwrap();
    assert_eq!(notes, "No progress updates yet");
}

#[tokio::test]
async fn add_progress_requires_assignee_and_non_empty_note() {
    let h = Harness::new();
    let goal = in_progress_goal(&h).await;

    let err = h
        .workflow
        .add_progress_update(goal.id, OTHER_EMPLOYEE_ID, "peeking")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Unauthorized(_));

    let err = h
        .workflow
        .add_progress_update(goal.id, EMPLOYEE_ID, "   ")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

// ---------------------------------------------------------------------------
// Side-effect and read behavior
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notifier_failure_does_not_fail_the_operation() {
    let h = Harness::new();
    let goal = created_goal(&h).await;
    h.notifier.fail.store(true, Ordering::SeqCst);

    let approved = h.workflow.approve_goal(goal.id, MANAGER_ID).await.unwrap();

    assert_eq!(approved.status, "IN_PROGRESS");
    // The audit record still lands even though notification delivery failed.
    assert_eq!(h.audit_entries().last().unwrap().action, "GOAL_APPROVED");
}

#[tokio::test]
async fn status_filtered_listing_rejects_unknown_status() {
    let h = Harness::new();

    let err = h
        .workflow
        .goals_for_user_with_status(EMPLOYEE_ID, "ALMOST_DONE")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

#[tokio::test]
async fn status_filtered_listing_returns_matching_goals() {
    let h = Harness::new();
    let first = created_goal(&h).await;
    let second = created_goal(&h).await;
    h.workflow.approve_goal(second.id, MANAGER_ID).await.unwrap();

    let pending = h
        .workflow
        .goals_for_user_with_status(EMPLOYEE_ID, "PENDING")
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, first.id);

    let all = h.workflow.goals_for_user(EMPLOYEE_ID).await.unwrap();
    assert_eq!(all.len(), 2);
}
