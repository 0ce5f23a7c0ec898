//! Goal lifecycle vocabulary: the top-level status state machine and the
//! completion/evidence sub-status enumerations, plus goal-definition
//! validation helpers.
//!
//! Each concern is its own enum. Sub-statuses are stored as nullable
//! columns and stay unset until the goal reaches the phase that owns them;
//! the workflow engine is the only writer.

use crate::error::CoreError;
use crate::types::Date;

/// Maximum length for a goal title (matches the `goals.title` column).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for an evidence link URL.
pub const MAX_EVIDENCE_LINK_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Top-level lifecycle status
// ---------------------------------------------------------------------------

/// Top-level goal lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    /// Created by the employee, awaiting manager approval.
    Pending,
    /// Approved; the employee is working on it.
    InProgress,
    /// Completion evidence submitted, awaiting the manager's decision.
    PendingCompletionApproval,
    /// Completion approved. Terminal.
    Completed,
    /// Soft-deleted. Terminal.
    Rejected,
}

impl GoalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalStatus::Pending => "PENDING",
            GoalStatus::InProgress => "IN_PROGRESS",
            GoalStatus::PendingCompletionApproval => "PENDING_COMPLETION_APPROVAL",
            GoalStatus::Completed => "COMPLETED",
            GoalStatus::Rejected => "REJECTED",
        }
    }

    /// Parse a stored or user-supplied status token.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token {
            "PENDING" => Ok(GoalStatus::Pending),
            "IN_PROGRESS" => Ok(GoalStatus::InProgress),
            "PENDING_COMPLETION_APPROVAL" => Ok(GoalStatus::PendingCompletionApproval),
            "COMPLETED" => Ok(GoalStatus::Completed),
            "REJECTED" => Ok(GoalStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid goal status '{other}'"
            ))),
        }
    }

    /// Whether `self -> to` is a legal lifecycle transition.
    ///
    /// Soft delete (any live state -> `Rejected`) is always legal;
    /// `Completed` and `Rejected` are terminal.
    pub fn can_transition(self, to: GoalStatus) -> bool {
        use GoalStatus::*;
        match (self, to) {
            (Pending, InProgress) => true,
            (InProgress, PendingCompletionApproval) => true,
            (PendingCompletionApproval, Completed) => true,
            (PendingCompletionApproval, InProgress) => true,
            (Pending | InProgress | PendingCompletionApproval, Rejected) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GoalStatus::Completed | GoalStatus::Rejected)
    }
}

// ---------------------------------------------------------------------------
// Completion-approval sub-status
// ---------------------------------------------------------------------------

/// The manager-decision state on a completion submission. Distinct from the
/// goal's top-level lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionApprovalStatus {
    Pending,
    Approved,
    Rejected,
    AdditionalEvidenceRequired,
}

impl CompletionApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionApprovalStatus::Pending => "PENDING",
            CompletionApprovalStatus::Approved => "APPROVED",
            CompletionApprovalStatus::Rejected => "REJECTED",
            CompletionApprovalStatus::AdditionalEvidenceRequired => {
                "ADDITIONAL_EVIDENCE_REQUIRED"
            }
        }
    }

    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token {
            "PENDING" => Ok(CompletionApprovalStatus::Pending),
            "APPROVED" => Ok(CompletionApprovalStatus::Approved),
            "REJECTED" => Ok(CompletionApprovalStatus::Rejected),
            "ADDITIONAL_EVIDENCE_REQUIRED" => {
                Ok(CompletionApprovalStatus::AdditionalEvidenceRequired)
            }
            other => Err(CoreError::Validation(format!(
                "Invalid completion approval status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Evidence-verification sub-status
// ---------------------------------------------------------------------------

/// Verification state of the submitted evidence link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceVerificationStatus {
    NotVerified,
    NeedsAdditionalLink,
    Verified,
    Rejected,
}

impl EvidenceVerificationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceVerificationStatus::NotVerified => "NOT_VERIFIED",
            EvidenceVerificationStatus::NeedsAdditionalLink => "NEEDS_ADDITIONAL_LINK",
            EvidenceVerificationStatus::Verified => "VERIFIED",
            EvidenceVerificationStatus::Rejected => "REJECTED",
        }
    }

    /// Parse a verification token. Case-insensitive: the verify-evidence
    /// operation accepts tokens as submitted by the client.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token.to_uppercase().as_str() {
            "NOT_VERIFIED" => Ok(EvidenceVerificationStatus::NotVerified),
            "NEEDS_ADDITIONAL_LINK" => Ok(EvidenceVerificationStatus::NeedsAdditionalLink),
            "VERIFIED" => Ok(EvidenceVerificationStatus::Verified),
            "REJECTED" => Ok(EvidenceVerificationStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid evidence verification status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Definition fields
// ---------------------------------------------------------------------------

/// Goal priority. Also reused as the notification priority when a goal is
/// first submitted to its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

impl GoalPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalPriority::Low => "LOW",
            GoalPriority::Medium => "MEDIUM",
            GoalPriority::High => "HIGH",
        }
    }

    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token {
            "LOW" => Ok(GoalPriority::Low),
            "MEDIUM" => Ok(GoalPriority::Medium),
            "HIGH" => Ok(GoalPriority::High),
            other => Err(CoreError::Validation(format!(
                "Invalid goal priority '{other}'"
            ))),
        }
    }
}

/// Goal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCategory {
    Technical,
    Behavioral,
    Leadership,
    PersonalDevelopment,
}

impl GoalCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalCategory::Technical => "TECHNICAL",
            GoalCategory::Behavioral => "BEHAVIORAL",
            GoalCategory::Leadership => "LEADERSHIP",
            GoalCategory::PersonalDevelopment => "PERSONAL_DEVELOPMENT",
        }
    }

    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token {
            "TECHNICAL" => Ok(GoalCategory::Technical),
            "BEHAVIORAL" => Ok(GoalCategory::Behavioral),
            "LEADERSHIP" => Ok(GoalCategory::Leadership),
            "PERSONAL_DEVELOPMENT" => Ok(GoalCategory::PersonalDevelopment),
            other => Err(CoreError::Validation(format!(
                "Invalid goal category '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Definition validation
// ---------------------------------------------------------------------------

/// Validate the goal's date range. The end date may equal the start date.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(
            "End date must be after start date".to_string(),
        ));
    }
    Ok(())
}

/// Validate a goal title: non-empty after trimming, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an evidence link: non-empty after trimming, bounded length.
pub fn validate_evidence_link(link: &str) -> Result<(), CoreError> {
    if link.trim().is_empty() {
        return Err(CoreError::Validation(
            "Evidence link must not be empty".to_string(),
        ));
    }
    if link.len() > MAX_EVIDENCE_LINK_LENGTH {
        return Err(CoreError::Validation(format!(
            "Evidence link must be at most {MAX_EVIDENCE_LINK_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    // -----------------------------------------------------------------------
    // Status round-trips and parsing
    // -----------------------------------------------------------------------

    #[test]
    fn goal_status_round_trips() {
        for status in [
            GoalStatus::Pending,
            GoalStatus::InProgress,
            GoalStatus::PendingCompletionApproval,
            GoalStatus::Completed,
            GoalStatus::Rejected,
        ] {
            assert_eq!(GoalStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_goal_status_is_validation_error() {
        assert!(matches!(
            GoalStatus::parse("ARCHIVED"),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn evidence_status_parse_is_case_insensitive() {
        assert_eq!(
            EvidenceVerificationStatus::parse("verified").unwrap(),
            EvidenceVerificationStatus::Verified
        );
        assert_eq!(
            EvidenceVerificationStatus::parse("needs_additional_link").unwrap(),
            EvidenceVerificationStatus::NeedsAdditionalLink
        );
    }

    #[test]
    fn unknown_evidence_status_is_validation_error() {
        assert!(matches!(
            EvidenceVerificationStatus::parse("MAYBE"),
            Err(CoreError::Validation(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Transition table
    // -----------------------------------------------------------------------

    #[test]
    fn happy_path_transitions_are_legal() {
        assert!(GoalStatus::Pending.can_transition(GoalStatus::InProgress));
        assert!(GoalStatus::InProgress.can_transition(GoalStatus::PendingCompletionApproval));
        assert!(GoalStatus::PendingCompletionApproval.can_transition(GoalStatus::Completed));
    }

    #[test]
    fn rejected_completion_returns_to_in_progress() {
        assert!(GoalStatus::PendingCompletionApproval.can_transition(GoalStatus::InProgress));
    }

    #[test]
    fn soft_delete_is_legal_from_any_live_state() {
        assert!(GoalStatus::Pending.can_transition(GoalStatus::Rejected));
        assert!(GoalStatus::InProgress.can_transition(GoalStatus::Rejected));
        assert!(GoalStatus::PendingCompletionApproval.can_transition(GoalStatus::Rejected));
    }

    #[test]
    fn direct_jumps_are_illegal() {
        assert!(!GoalStatus::Pending.can_transition(GoalStatus::Completed));
        assert!(!GoalStatus::Pending.can_transition(GoalStatus::PendingCompletionApproval));
        assert!(!GoalStatus::InProgress.can_transition(GoalStatus::Completed));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for to in [
            GoalStatus::Pending,
            GoalStatus::InProgress,
            GoalStatus::PendingCompletionApproval,
            GoalStatus::Completed,
            GoalStatus::Rejected,
        ] {
            assert!(!GoalStatus::Completed.can_transition(to));
            assert!(!GoalStatus::Rejected.can_transition(to));
        }
        assert!(GoalStatus::Completed.is_terminal());
        assert!(GoalStatus::Rejected.is_terminal());
    }

    // -----------------------------------------------------------------------
    // Definition validation
    // -----------------------------------------------------------------------

    #[test]
    fn end_before_start_is_rejected() {
        let err = validate_date_range(date("2025-01-10"), date("2025-01-01")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg)
            if msg == "End date must be after start date"));
    }

    #[test]
    fn equal_dates_are_accepted() {
        assert!(validate_date_range(date("2025-01-01"), date("2025-01-01")).is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn overlong_title_is_rejected() {
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn evidence_link_bounds_are_enforced() {
        assert!(validate_evidence_link("  ").is_err());
        assert!(validate_evidence_link(&"x".repeat(MAX_EVIDENCE_LINK_LENGTH + 1)).is_err());
        assert!(validate_evidence_link("https://example.com/evidence").is_ok());
    }
}
