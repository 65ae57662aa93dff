// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::input::InputError;
use gymshift::CoreError;
use gymshift_domain::DomainError;
use gymshift_persistence::PersistenceError;

/// Errors returned to API callers.
///
/// Every scheduler, domain and storage failure is translated into one of
/// these before it leaves the crate. The server maps each variant to an
/// HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request breaks a scheduling rule, such as assigning from an
    /// archived shift or an illegal status change.
    DomainRuleViolation { rule: String, message: String },
    /// The slot is blocked by a holiday or already taken. Nothing was written.
    Conflict { rule: String, message: String },
    /// A request field is missing, malformed or out of range.
    InvalidInput { field: String, message: String },
    /// A center, shift pattern or assignment ID does not exist.
    ResourceNotFound {
        resource_type: String,
        message: String,
    },
    /// Storage or configuration failed. Not the caller's fault.
    Internal { message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Rule '{rule}' violated: {message}")
            }
            Self::Conflict { rule, message } => write!(f, "Slot conflict ({rule}): {message}"),
            Self::InvalidInput { field, message } => write!(f, "Bad value for '{field}': {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => write!(f, "Unknown {resource_type}: {message}"),
            Self::Internal { message } => write!(f, "Scheduler failure: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Maps a domain rule failure onto the field or rule it concerns.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: err.to_string(),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::TimeParseError { time_string, error } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Failed to parse time '{time_string}': {error}"),
        },
        DomainError::NoShiftSelected => ApiError::InvalidInput {
            field: String::from("shift_id"),
            message: err.to_string(),
        },
        DomainError::NoEmployeesSelected => ApiError::InvalidInput {
            field: String::from("employee_ids"),
            message: err.to_string(),
        },
        DomainError::NoAssignmentsSelected => ApiError::InvalidInput {
            field: String::from("assignment_ids"),
            message: err.to_string(),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidHeadcount { .. } => ApiError::InvalidInput {
            field: String::from("max_staff"),
            message: err.to_string(),
        },
        DomainError::InvalidLifecycleState(state) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown status '{state}'; expected draft, published or archived"),
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("shift_lifecycle"),
            message: err.to_string(),
        },
        DomainError::ShiftArchived { .. } => ApiError::DomainRuleViolation {
            rule: String::from("archived_shift"),
            message: err.to_string(),
        },
        DomainError::ShiftCenterMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("shift_center"),
            message: err.to_string(),
        },
        DomainError::EmployeeCenterMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("employee_center"),
            message: err.to_string(),
        },
        DomainError::InvalidHolidayScope(scope) => ApiError::InvalidInput {
            field: String::from("scope"),
            message: format!(
                "Invalid holiday scope '{scope}'; expected global, regional (with region) or center (with center_id)"
            ),
        },
    }
}

/// Maps a scheduler failure. Holiday and duplicate refusals become
/// `Conflict`; collaborator failures become `Internal`.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ShiftNotFound(shift_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift pattern"),
            message: format!("Shift pattern {shift_id} does not exist"),
        },
        CoreError::EmployeeNotFound(employee_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        },
        CoreError::AssignmentNotFound(assignment_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!("Assignment {assignment_id} does not exist"),
        },
        CoreError::HolidayConflict { date, label } => ApiError::Conflict {
            rule: String::from("holiday_blackout"),
            message: format!("{date} is a holiday ({label}); shifts cannot be assigned on it"),
        },
        CoreError::DuplicateAssignment {
            employee_id,
            shift_id,
            date,
        } => ApiError::Conflict {
            rule: String::from("unique_assignment"),
            message: format!(
                "Employee {employee_id} is already assigned to shift {shift_id} on {date}"
            ),
        },
        CoreError::InvalidConfig(_)
        | CoreError::HolidayLookupFailed(_)
        | CoreError::EmployeeLookupFailed(_)
        | CoreError::ShiftLookupFailed(_)
        | CoreError::StoreFailure(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Maps a storage failure. Only missing rows are the caller's concern.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::CenterNotFound(center_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Center"),
            message: format!("Center {center_id} does not exist"),
        },
        PersistenceError::ShiftNotFound(shift_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift pattern"),
            message: format!("Shift pattern {shift_id} does not exist"),
        },
        PersistenceError::AssignmentNotFound(assignment_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!("Assignment {assignment_id} does not exist"),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
