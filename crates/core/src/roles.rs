//! User roles and the elevation rule used by soft delete.

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(token: &str) -> Result<Self, CoreError> {
        match token {
            "EMPLOYEE" => Ok(Role::Employee),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            other => Err(CoreError::Validation(format!("Invalid role '{other}'"))),
        }
    }

    /// Elevated roles bypass the ownership check on soft delete.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        for role in [Role::Employee, Role::Manager, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::parse("CONTRACTOR").is_err());
    }

    #[test]
    fn only_manager_and_admin_are_elevated() {
        assert!(!Role::Employee.is_elevated());
        assert!(Role::Manager.is_elevated());
        assert!(Role::Admin.is_elevated());
    }
}
