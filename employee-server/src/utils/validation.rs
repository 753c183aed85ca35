//! Employee field validation
//!
//! Explicit checks running in field declaration order (name, salary,
//! department). The first violation is the one surfaced to the client, so
//! the ordering here is part of the observable contract.

use std::fmt;

use crate::db::models::{EmployeeCreate, EmployeePayload};

// ── Field constraints ───────────────────────────────────────────────

/// Allowed length range for `name`, in characters
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 40;

/// Allowed length range for `department`, in characters
pub const DEPARTMENT_MIN_LEN: usize = 3;
pub const DEPARTMENT_MAX_LEN: usize = 20;

/// Smallest accepted salary
pub const MIN_SALARY: i64 = 1;

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}- {}", self.field, self.message)
    }
}

/// Validate an incoming employee payload.
///
/// All violations are collected in declaration order and the first one is
/// returned; on success the validated candidate is handed back, ready for
/// persistence. A missing `salary` fails the minimum-value check.
pub fn validate_employee(payload: &EmployeePayload) -> Result<EmployeeCreate, Violation> {
    let name = payload.name.clone().unwrap_or_default();
    let salary = payload.salary.unwrap_or(0);
    let department = payload.department.clone().unwrap_or_default();

    let mut violations = Vec::new();
    check_required_text(
        &mut violations,
        "name",
        &name,
        NAME_MIN_LEN,
        NAME_MAX_LEN,
        "Enter employee name",
    );
    if salary < MIN_SALARY {
        violations.push(Violation::new(
            "salary",
            format!("must be greater than or equal to {MIN_SALARY}"),
        ));
    }
    check_required_text(
        &mut violations,
        "department",
        &department,
        DEPARTMENT_MIN_LEN,
        DEPARTMENT_MAX_LEN,
        "Enter employee department",
    );

    match violations.into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(EmployeeCreate {
            name,
            salary,
            department,
        }),
    }
}

/// Required-text check: non-blank first, then length bounds.
///
/// Blank-ness is judged on the trimmed string; the length bounds on the
/// untrimmed character count.
fn check_required_text(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    blank_message: &str,
) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, blank_message));
        return;
    }
    let len = value.chars().count();
    if len < min || len > max {
        violations.push(Violation::new(
            field,
            format!("size must be between {min} and {max}"),
        ));
    }
}
