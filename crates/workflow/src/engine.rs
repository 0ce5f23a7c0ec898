//! The goal workflow engine.
//!
//! Every operation follows the same shape: load the goal, check the
//! actor's ownership or role and the status precondition (before any
//! write), mutate the aggregate, persist through the store (composite
//! writes are transactional), then fire the audit record and notification.
//! Side effects never abort an operation that has already committed; a
//! failed notification or audit write is logged and swallowed.

use std::sync::Arc;

use chrono::Utc;

use perftrack_core::approval::{
    DECISION_APPROVED, DECISION_REJECTED, RATIONALE_APPROVED, RATIONALE_REJECTED,
};
use perftrack_core::audit::{actions, outcomes, ENTITY_GOAL};
use perftrack_core::error::CoreError;
use perftrack_core::goal::{
    validate_date_range, validate_evidence_link, validate_title, CompletionApprovalStatus,
    EvidenceVerificationStatus, GoalCategory, GoalPriority, GoalStatus,
};
use perftrack_core::notifications::{priorities, types, FEEDBACK_CHANGE_REQUEST};
use perftrack_core::progress::{append_progress_note, format_progress_note, NO_PROGRESS_PLACEHOLDER};
use perftrack_core::roles::Role;
use perftrack_core::types::DbId;
use perftrack_db::models::audit_log::NewAuditLog;
use perftrack_db::models::feedback::NewFeedback;
use perftrack_db::models::goal::{
    CreateGoalRequest, Goal, NewCompletionApproval, NewGoal, SubmitCompletionRequest,
};
use perftrack_db::models::notification::CreateNotification;
use perftrack_db::models::user::User;

use crate::store::{AuditRecorder, GoalStore, Notifier, UserDirectory};

/// Owns all goal state transitions and their authorization rules.
pub struct GoalWorkflow {
    goals: Arc<dyn GoalStore>,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn Notifier>,
    audit: Arc<dyn AuditRecorder>,
}

impl GoalWorkflow {
    pub fn new(
        goals: Arc<dyn GoalStore>,
        users: Arc<dyn UserDirectory>,
        notifier: Arc<dyn Notifier>,
        audit: Arc<dyn AuditRecorder>,
    ) -> Self {
        Self {
            goals,
            users,
            notifier,
            audit,
        }
    }

    // -----------------------------------------------------------------------
    // Creation and reads
    // -----------------------------------------------------------------------

    /// Create a new goal on behalf of an employee. The goal enters the
    /// lifecycle as `PENDING` and the assigned manager is notified.
    pub async fn create_goal(
        &self,
        req: &CreateGoalRequest,
        employee_id: DbId,
    ) -> Result<Goal, CoreError> {
        let employee = self.load_user(employee_id, "Employee").await?;
        let manager = self.load_user(req.manager_id, "Manager").await?;

        if manager.id == employee.id {
            return Err(CoreError::Validation(
                "A goal cannot be managed by its own assignee".to_string(),
            ));
        }
        Self::validate_definition(req)?;

        let goal = self
            .goals
            .insert(&NewGoal {
                title: req.title.clone(),
                description: req.description.clone(),
                category: req.category.clone(),
                priority: req.priority.clone(),
                assigned_to_user_id: employee.id,
                assigned_manager_id: manager.id,
                start_date: req.start_date,
                end_date: req.end_date,
                status: GoalStatus::Pending.as_str().to_string(),
            })
            .await?;

        self.notify(CreateNotification {
            user_id: manager.id,
            kind: types::GOAL_SUBMITTED.to_string(),
            message: format!("{} submitted goal: {}", employee.name, goal.title),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(goal.id),
            priority: goal.priority.clone(),
            action_required: true,
        })
        .await;
        self.record_audit(
            employee.id,
            actions::GOAL_CREATED,
            format!("Created goal: {}", goal.title),
            Some(goal.id),
        )
        .await;

        Ok(goal)
    }

    /// Fetch a single goal.
    pub async fn get_goal(&self, goal_id: DbId) -> Result<Goal, CoreError> {
        self.load_goal(goal_id).await
    }

    /// All goals assigned to a user.
    pub async fn goals_for_user(&self, user_id: DbId) -> Result<Vec<Goal>, CoreError> {
        self.goals.list_by_assignee(user_id).await
    }

    /// All goals assigned to a user, filtered by lifecycle status.
    pub async fn goals_for_user_with_status(
        &self,
        user_id: DbId,
        status_token: &str,
    ) -> Result<Vec<Goal>, CoreError> {
        let status = GoalStatus::parse(status_token)?;
        self.goals
            .list_by_assignee_and_status(user_id, status.as_str())
            .await
    }

    /// All goals a manager is responsible for.
    pub async fn goals_for_manager(&self, manager_id: DbId) -> Result<Vec<Goal>, CoreError> {
        self.goals.list_by_manager(manager_id).await
    }

    // -----------------------------------------------------------------------
    // Initial approval
    // -----------------------------------------------------------------------

    /// Manager approves a pending goal, moving it to `IN_PROGRESS`.
    pub async fn approve_goal(&self, goal_id: DbId, manager_id: DbId) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assigned_manager(&goal, manager_id, "Not authorized to approve this goal")?;

        let status = Self::parsed_status(&goal)?;
        if status != GoalStatus::Pending {
            return Err(CoreError::Validation(
                "Goal is not in pending status".to_string(),
            ));
        }

        Self::transition(&mut goal, status, GoalStatus::InProgress)?;
        goal.approved_by = Some(manager_id);
        goal.approved_date = Some(Utc::now());
        goal.request_changes = false;
        let updated = self.goals.update(&goal).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_to_user_id,
            kind: types::GOAL_APPROVED.to_string(),
            message: format!("Your goal '{}' has been approved", updated.title),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: updated.priority.clone(),
            action_required: false,
        })
        .await;
        self.record_audit(
            manager_id,
            actions::GOAL_APPROVED,
            format!("Approved goal: {}", updated.title),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Manager requests changes on a goal. The top-level status is left
    /// untouched; the changes-requested flag is raised and a CHANGE_REQUEST
    /// feedback row is written in the same transaction as the goal update.
    pub async fn request_changes(
        &self,
        goal_id: DbId,
        manager_id: DbId,
        comments: &str,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assigned_manager(&goal, manager_id, "Not authorized")?;

        goal.request_changes = true;
        goal.last_reviewed_by = Some(manager_id);
        goal.last_reviewed_date = Some(Utc::now());

        let feedback = NewFeedback {
            goal_id: goal.id,
            given_by: manager_id,
            comments: comments.to_string(),
            feedback_type: FEEDBACK_CHANGE_REQUEST.to_string(),
        };
        let updated = self.goals.update_with_feedback(&goal, &feedback).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_to_user_id,
            kind: types::GOAL_CHANGE_REQUESTED.to_string(),
            message: format!("Changes requested for goal: {}", updated.title),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: priorities::NORMAL.to_string(),
            action_required: true,
        })
        .await;
        self.record_audit(
            manager_id,
            actions::GOAL_CHANGE_REQUESTED,
            format!("Requested changes for goal: {}", updated.title),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Employee reworks the goal definition after a change request.
    /// Clears the changes-requested flag; the top-level status is not
    /// touched (it was never changed by the change request either).
    /// The assigned manager cannot be reassigned here.
    pub async fn update_goal(
        &self,
        goal_id: DbId,
        req: &CreateGoalRequest,
        employee_id: DbId,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assignee(&goal, employee_id, "Not authorized")?;

        if !goal.request_changes {
            return Err(CoreError::Validation(
                "Goal is not in change request status".to_string(),
            ));
        }
        Self::validate_definition(req)?;
        let employee = self.load_user(employee_id, "Employee").await?;

        goal.title = req.title.clone();
        goal.description = req.description.clone();
        goal.category = req.category.clone();
        goal.priority = req.priority.clone();
        goal.start_date = req.start_date;
        goal.end_date = req.end_date;
        goal.request_changes = false;
        goal.resubmitted_date = Some(Utc::now());
        let updated = self.goals.update(&goal).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_manager_id,
            kind: types::GOAL_RESUBMITTED.to_string(),
            message: format!(
                "{} updated and resubmitted goal: {}",
                employee.name, updated.title
            ),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: priorities::NORMAL.to_string(),
            action_required: true,
        })
        .await;
        self.record_audit(
            employee_id,
            actions::GOAL_UPDATED,
            format!("Updated and resubmitted goal: {}", updated.title),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    // -----------------------------------------------------------------------
    // Completion
    // -----------------------------------------------------------------------

    /// Employee submits completion evidence, moving the goal to
    /// `PENDING_COMPLETION_APPROVAL`. The completion-approval and
    /// evidence-verification sub-statuses are initialized here and only
    /// here.
    pub async fn submit_completion(
        &self,
        goal_id: DbId,
        req: &SubmitCompletionRequest,
        employee_id: DbId,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assignee(&goal, employee_id, "Not authorized")?;

        let status =
            Self::parsed_status_guard(&goal, GoalStatus::InProgress, "Goal is not in progress")?;

        validate_evidence_link(&req.evidence_link)?;
        let employee = self.load_user(employee_id, "Employee").await?;

        Self::transition(&mut goal, status, GoalStatus::PendingCompletionApproval)?;
        goal.evidence_link = Some(req.evidence_link.clone());
        goal.evidence_link_description = req.evidence_link_description.clone();
        goal.evidence_access_instructions = req.evidence_access_instructions.clone();
        goal.completion_notes = req.completion_notes.clone();
        goal.completion_submitted_date = Some(Utc::now());
        goal.completion_approval_status =
            Some(CompletionApprovalStatus::Pending.as_str().to_string());
        goal.evidence_verification_status =
            Some(EvidenceVerificationStatus::NotVerified.as_str().to_string());
        let updated = self.goals.update(&goal).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_manager_id,
            kind: types::GOAL_COMPLETION_SUBMITTED.to_string(),
            message: format!(
                "{} submitted completion for: {}",
                employee.name, updated.title
            ),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: priorities::HIGH.to_string(),
            action_required: true,
        })
        .await;
        self.record_audit(
            employee_id,
            actions::GOAL_COMPLETION_SUBMITTED,
            "Submitted completion".to_string(),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Manager approves a completion submission: the goal becomes
    /// `COMPLETED`, the evidence is marked verified, and an APPROVED
    /// decision record is appended in the same transaction.
    pub async fn approve_completion(
        &self,
        goal_id: DbId,
        manager_comments: Option<String>,
        manager_id: DbId,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assigned_manager(&goal, manager_id, "Not authorized")?;

        let status = Self::parsed_status_guard(
            &goal,
            GoalStatus::PendingCompletionApproval,
            "Goal is not pending completion approval",
        )?;

        let now = Utc::now();
        Self::transition(&mut goal, status, GoalStatus::Completed)?;
        goal.completion_approval_status =
            Some(CompletionApprovalStatus::Approved.as_str().to_string());
        goal.completion_approved_by = Some(manager_id);
        goal.completion_approved_date = Some(now);
        goal.final_completion_date = Some(now);
        goal.manager_completion_comments = manager_comments.clone();
        goal.evidence_verification_status =
            Some(EvidenceVerificationStatus::Verified.as_str().to_string());
        goal.evidence_verified_by = Some(manager_id);
        goal.evidence_verified_date = Some(now);

        let decision = NewCompletionApproval {
            goal_id: goal.id,
            decision: DECISION_APPROVED.to_string(),
            approved_by: manager_id,
            manager_comments,
            evidence_verified: true,
            decision_rationale: RATIONALE_APPROVED.to_string(),
        };
        let updated = self.goals.update_with_decision(&goal, &decision).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_to_user_id,
            kind: types::GOAL_COMPLETION_APPROVED.to_string(),
            message: format!(
                "Your goal '{}' completion has been approved!",
                updated.title
            ),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: priorities::HIGH.to_string(),
            // Success notification, nothing for the employee to act on.
            action_required: false,
        })
        .await;
        self.record_audit(
            manager_id,
            actions::GOAL_COMPLETION_APPROVED,
            format!("Approved completion for goal: {}", updated.title),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Manager rejects a completion submission: the goal returns to
    /// `IN_PROGRESS` and a REJECTED decision record is appended in the
    /// same transaction.
    pub async fn reject_completion(
        &self,
        goal_id: DbId,
        reason: &str,
        manager_id: DbId,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assigned_manager(&goal, manager_id, "Not authorized")?;

        let status = Self::parsed_status_guard(
            &goal,
            GoalStatus::PendingCompletionApproval,
            "Goal is not pending completion approval",
        )?;
        Self::transition(&mut goal, status, GoalStatus::InProgress)?;
        goal.completion_approval_status =
            Some(CompletionApprovalStatus::Rejected.as_str().to_string());
        goal.manager_completion_comments = Some(reason.to_string());

        let decision = NewCompletionApproval {
            goal_id: goal.id,
            decision: DECISION_REJECTED.to_string(),
            approved_by: manager_id,
            manager_comments: Some(reason.to_string()),
            evidence_verified: false,
            decision_rationale: RATIONALE_REJECTED.to_string(),
        };
        let updated = self.goals.update_with_decision(&goal, &decision).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_to_user_id,
            kind: types::GOAL_COMPLETION_REJECTED.to_string(),
            message: format!(
                "Your goal '{}' completion was rejected. Please review feedback.",
                updated.title
            ),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: priorities::HIGH.to_string(),
            action_required: true,
        })
        .await;
        self.record_audit(
            manager_id,
            actions::GOAL_COMPLETION_REJECTED,
            format!("Rejected completion for goal: {}", updated.title),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Manager asks for more evidence. Only the sub-statuses move; the
    /// goal stays in `PENDING_COMPLETION_APPROVAL`.
    pub async fn request_additional_evidence(
        &self,
        goal_id: DbId,
        reason: &str,
        manager_id: DbId,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assigned_manager(&goal, manager_id, "Not authorized")?;
        Self::parsed_status_guard(
            &goal,
            GoalStatus::PendingCompletionApproval,
            "Goal is not pending completion approval",
        )?;

        goal.completion_approval_status = Some(
            CompletionApprovalStatus::AdditionalEvidenceRequired
                .as_str()
                .to_string(),
        );
        goal.evidence_verification_status = Some(
            EvidenceVerificationStatus::NeedsAdditionalLink
                .as_str()
                .to_string(),
        );
        goal.evidence_verification_notes = Some(reason.to_string());
        let updated = self.goals.update(&goal).await?;

        self.notify(CreateNotification {
            user_id: updated.assigned_to_user_id,
            kind: types::ADDITIONAL_EVIDENCE_REQUIRED.to_string(),
            message: format!("Additional evidence needed for goal: {}", updated.title),
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id: Some(updated.id),
            priority: priorities::NORMAL.to_string(),
            action_required: true,
        })
        .await;
        self.record_audit(
            manager_id,
            actions::ADDITIONAL_EVIDENCE_REQUESTED,
            "Requested additional evidence".to_string(),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Manager records an evidence verification outcome. The status token
    /// is parsed case-insensitively; an unrecognized token is a validation
    /// error. No notification is sent for this operation.
    pub async fn verify_evidence(
        &self,
        goal_id: DbId,
        status_token: &str,
        notes: Option<String>,
        manager_id: DbId,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assigned_manager(&goal, manager_id, "Not authorized")?;
        Self::parsed_status_guard(
            &goal,
            GoalStatus::PendingCompletionApproval,
            "Goal is not pending completion approval",
        )?;

        let verification = EvidenceVerificationStatus::parse(status_token)?;
        goal.evidence_verification_status = Some(verification.as_str().to_string());
        goal.evidence_verification_notes = notes;
        goal.evidence_verified_by = Some(manager_id);
        goal.evidence_verified_date = Some(Utc::now());
        let updated = self.goals.update(&goal).await?;

        self.record_audit(
            manager_id,
            actions::EVIDENCE_VERIFIED,
            format!(
                "Verified evidence for goal: {} - Status: {}",
                updated.title,
                verification.as_str()
            ),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    // -----------------------------------------------------------------------
    // Deletion and progress
    // -----------------------------------------------------------------------

    /// Soft-delete a goal by marking it `REJECTED`. Employees may only
    /// delete their own goals; elevated roles bypass the ownership check.
    /// Deleting an already-deleted goal is a no-op mutation but still
    /// produces an audit record.
    pub async fn delete_goal(
        &self,
        goal_id: DbId,
        actor_id: DbId,
        actor_role: Role,
    ) -> Result<(), CoreError> {
        let mut goal = self.load_goal(goal_id).await?;

        if !actor_role.is_elevated() && goal.assigned_to_user_id != actor_id {
            return Err(CoreError::Unauthorized(
                "Not authorized to delete this goal".to_string(),
            ));
        }
        let actor = self.load_user(actor_id, "User").await?;

        let status = Self::parsed_status(&goal)?;
        if status != GoalStatus::Rejected {
            Self::transition(&mut goal, status, GoalStatus::Rejected)?;
            self.goals.update(&goal).await?;
        }

        self.record_audit(
            actor.id,
            actions::GOAL_DELETED,
            format!("Deleted goal: {}", goal.title),
            Some(goal.id),
        )
        .await;

        Ok(())
    }

    /// Append a timestamp-prefixed progress note. Strictly append-only;
    /// prior notes are never rewritten. No notification is sent.
    pub async fn add_progress_update(
        &self,
        goal_id: DbId,
        actor_id: DbId,
        note: &str,
    ) -> Result<Goal, CoreError> {
        let mut goal = self.load_goal(goal_id).await?;
        Self::ensure_assignee(&goal, actor_id, "Not authorized")?;

        if note.trim().is_empty() {
            return Err(CoreError::Validation(
                "Progress note must not be empty".to_string(),
            ));
        }

        let entry = format_progress_note(Utc::now(), note);
        goal.progress_notes = Some(append_progress_note(goal.progress_notes.as_deref(), &entry));
        let updated = self.goals.update(&goal).await?;

        self.record_audit(
            actor_id,
            actions::PROGRESS_ADDED,
            format!("Added progress update for goal: {}", updated.title),
            Some(updated.id),
        )
        .await;

        Ok(updated)
    }

    /// Read the progress notes, or a fixed placeholder when none exist.
    /// Pure read; no side effects.
    pub async fn get_progress_updates(&self, goal_id: DbId) -> Result<String, CoreError> {
        let goal = self.load_goal(goal_id).await?;
        Ok(goal
            .progress_notes
            .filter(|notes| !notes.is_empty())
            .unwrap_or_else(|| NO_PROGRESS_PLACEHOLDER.to_string()))
    }

    // -----------------------------------------------------------------------
    // Shared guards and side-effect plumbing
    // -----------------------------------------------------------------------

    async fn load_goal(&self, goal_id: DbId) -> Result<Goal, CoreError> {
        self.goals
            .find_by_id(goal_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Goal",
                id: goal_id,
            })
    }

    async fn load_user(&self, user_id: DbId, entity: &'static str) -> Result<User, CoreError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity,
                id: user_id,
            })
    }

    /// Manager-only transitions: the actor must be the assigned manager.
    fn ensure_assigned_manager(goal: &Goal, actor_id: DbId, msg: &str) -> Result<(), CoreError> {
        if goal.assigned_manager_id != actor_id {
            return Err(CoreError::Unauthorized(msg.to_string()));
        }
        Ok(())
    }

    /// Employee-only transitions: the actor must be the assignee.
    fn ensure_assignee(goal: &Goal, actor_id: DbId, msg: &str) -> Result<(), CoreError> {
        if goal.assigned_to_user_id != actor_id {
            return Err(CoreError::Unauthorized(msg.to_string()));
        }
        Ok(())
    }

    /// Parse the stored status. A goal row with an unparseable status is
    /// corrupt data, not a caller mistake.
    fn parsed_status(goal: &Goal) -> Result<GoalStatus, CoreError> {
        GoalStatus::parse(&goal.status).map_err(|_| {
            CoreError::Internal(format!(
                "Goal {} has invalid stored status '{}'",
                goal.id, goal.status
            ))
        })
    }

    fn parsed_status_guard(
        goal: &Goal,
        expected: GoalStatus,
        msg: &str,
    ) -> Result<GoalStatus, CoreError> {
        let status = Self::parsed_status(goal)?;
        if status != expected {
            return Err(CoreError::Validation(msg.to_string()));
        }
        Ok(status)
    }

    /// Apply a lifecycle transition, rejecting anything the transition
    /// table does not allow.
    fn transition(goal: &mut Goal, from: GoalStatus, to: GoalStatus) -> Result<(), CoreError> {
        if !from.can_transition(to) {
            return Err(CoreError::Validation(format!(
                "Goal status cannot change from {} to {}",
                from.as_str(),
                to.as_str()
            )));
        }
        goal.status = to.as_str().to_string();
        Ok(())
    }

    /// Best-effort notification: the goal mutation has already committed,
    /// so a delivery failure is logged and swallowed.
    async fn notify(&self, input: CreateNotification) {
        if let Err(e) = self.notifier.notify(&input).await {
            tracing::warn!(
                error = %e,
                user_id = input.user_id,
                kind = %input.kind,
                "Failed to create notification"
            );
        }
    }

    /// Best-effort audit record, same policy as [`Self::notify`].
    async fn record_audit(&self, actor_id: DbId, action: &str, details: String, entity_id: Option<DbId>) {
        let entry = NewAuditLog {
            user_id: actor_id,
            action: action.to_string(),
            details,
            entity_type: Some(ENTITY_GOAL.to_string()),
            entity_id,
            outcome: outcomes::SUCCESS.to_string(),
        };
        if let Err(e) = self.audit.record(&entry).await {
            tracing::warn!(error = %e, action, "Failed to record audit entry");
        }
    }

    fn validate_definition(req: &CreateGoalRequest) -> Result<(), CoreError> {
        validate_title(&req.title)?;
        GoalCategory::parse(&req.category)?;
        GoalPriority::parse(&req.priority)?;
        validate_date_range(req.start_date, req.end_date)?;
        Ok(())
    }
}
