//! In-memory fakes for the workflow capability traits, plus a wired-up
//! test harness.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use perftrack_core::error::CoreError;
use perftrack_core::types::DbId;
use perftrack_db::models::audit_log::NewAuditLog;
use perftrack_db::models::feedback::NewFeedback;
use perftrack_db::models::goal::{Goal, NewCompletionApproval, NewGoal};
use perftrack_db::models::notification::CreateNotification;
use perftrack_db::models::user::User;
use perftrack_workflow::store::{AuditRecorder, GoalStore, Notifier, UserDirectory};
use perftrack_workflow::GoalWorkflow;

pub const EMPLOYEE_ID: DbId = 1;
pub const MANAGER_ID: DbId = 2;
pub const ADMIN_ID: DbId = 3;
pub const OTHER_EMPLOYEE_ID: DbId = 4;

/// Goal storage over a `HashMap`, with decision and feedback rows kept in
/// plain vectors so tests can assert on what was appended.
#[derive(Default)]
pub struct InMemoryGoals {
    goals: Mutex<HashMap<DbId, Goal>>,
    next_id: Mutex<DbId>,
    pub decisions: Mutex<Vec<NewCompletionApproval>>,
    pub feedback: Mutex<Vec<NewFeedback>>,
}

impl InMemoryGoals {
    pub fn goal(&self, id: DbId) -> Goal {
        self.goals
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| panic!("no goal with id {id} in fake store"))
    }

    fn store_update(&self, goal: &Goal) -> Result<Goal, CoreError> {
        let mut goals = self.goals.lock().unwrap();
        if !goals.contains_key(&goal.id) {
            return Err(CoreError::Internal(format!(
                "update of unknown goal {}",
                goal.id
            )));
        }
        let mut updated = goal.clone();
        updated.updated_at = Utc::now();
        goals.insert(updated.id, updated.clone());
        Ok(updated)
    }
}

#[async_trait]
impl GoalStore for InMemoryGoals {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Goal>, CoreError> {
        Ok(self.goals.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, CoreError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let now = Utc::now();
        let row = Goal {
            id: *next,
            title: goal.title.clone(),
            description: goal.description.clone(),
            category: goal.category.clone(),
            priority: goal.priority.clone(),
            assigned_to_user_id: goal.assigned_to_user_id,
            assigned_manager_id: goal.assigned_manager_id,
            start_date: goal.start_date,
            end_date: goal.end_date,
            status: goal.status.clone(),
            approved_by: None,
            approved_date: None,
            request_changes: false,
            last_reviewed_by: None,
            last_reviewed_date: None,
            resubmitted_date: None,
            progress_notes: None,
            evidence_link: None,
            evidence_link_description: None,
            evidence_access_instructions: None,
            completion_notes: None,
            completion_submitted_date: None,
            evidence_verification_status: None,
            evidence_verification_notes: None,
            evidence_verified_by: None,
            evidence_verified_date: None,
            completion_approval_status: None,
            completion_approved_by: None,
            completion_approved_date: None,
            final_completion_date: None,
            manager_completion_comments: None,
            created_at: now,
            updated_at: now,
        };
        self.goals.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, goal: &Goal) -> Result<Goal, CoreError> {
        self.store_update(goal)
    }

    async fn update_with_decision(
        &self,
        goal: &Goal,
        decision: &NewCompletionApproval,
    ) -> Result<Goal, CoreError> {
        let updated = self.store_update(goal)?;
        self.decisions.lock().unwrap().push(decision.clone());
        Ok(updated)
    }

    async fn update_with_feedback(
        &self,
        goal: &Goal,
        feedback: &NewFeedback,
    ) -> Result<Goal, CoreError> {
        let updated = self.store_update(goal)?;
        self.feedback.lock().unwrap().push(feedback.clone());
        Ok(updated)
    }

    async fn list_by_assignee(&self, user_id: DbId) -> Result<Vec<Goal>, CoreError> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.assigned_to_user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_manager(&self, manager_id: DbId) -> Result<Vec<Goal>, CoreError> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.assigned_manager_id == manager_id)
            .cloned()
            .collect())
    }

    async fn list_by_assignee_and_status(
        &self,
        user_id: DbId,
        status: &str,
    ) -> Result<Vec<Goal>, CoreError> {
        Ok(self
            .goals
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.assigned_to_user_id == user_id && g.status == status)
            .cloned()
            .collect())
    }
}

pub struct FixedUsers {
    users: HashMap<DbId, User>,
}

impl FixedUsers {
    pub fn with_default_cast() -> Self {
        let mut users = HashMap::new();
        users.insert(EMPLOYEE_ID, make_user(EMPLOYEE_ID, "Ava Patel", "EMPLOYEE"));
        users.insert(MANAGER_ID, make_user(MANAGER_ID, "Noah Kim", "MANAGER"));
        users.insert(ADMIN_ID, make_user(ADMIN_ID, "Site Admin", "ADMIN"));
        users.insert(
            OTHER_EMPLOYEE_ID,
            make_user(OTHER_EMPLOYEE_ID, "Sam Rivera", "EMPLOYEE"),
        );
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FixedUsers {
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError> {
        Ok(self.users.get(&id).cloned())
    }
}

/// Records every notification; can be told to fail to prove side-effect
/// failures never abort a committed operation.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<CreateNotification>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, input: &CreateNotification) -> Result<(), CoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::Internal("notifier down".to_string()));
        }
        self.sent.lock().unwrap().push(input.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAudit {
    pub entries: Mutex<Vec<NewAuditLog>>,
}

#[async_trait]
impl AuditRecorder for RecordingAudit {
    async fn record(&self, entry: &NewAuditLog) -> Result<(), CoreError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

pub struct Harness {
    pub workflow: GoalWorkflow,
    pub goals: Arc<InMemoryGoals>,
    pub notifier: Arc<RecordingNotifier>,
    pub audit: Arc<RecordingAudit>,
}

impl Harness {
    pub fn new() -> Self {
        let goals = Arc::new(InMemoryGoals::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let audit = Arc::new(RecordingAudit::default());
        let workflow = GoalWorkflow::new(
            goals.clone(),
            Arc::new(FixedUsers::with_default_cast()),
            notifier.clone(),
            audit.clone(),
        );
        Self {
            workflow,
            goals,
            notifier,
            audit,
        }
    }

    pub fn sent(&self) -> Vec<CreateNotification> {
        self.notifier.sent.lock().unwrap().clone()
    }

    pub fn audit_entries(&self) -> Vec<NewAuditLog> {
        self.audit.entries.lock().unwrap().clone()
    }
}

fn make_user(id: DbId, name: &str, role: &str) -> User {
    let now = Utc::now();
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        password_hash: "$argon2id$fake".to_string(),
        role: role.to_string(),
        created_at: now,
        updated_at: now,
    }
}
