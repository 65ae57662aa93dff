// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::CollaboratorError;
use gymshift_domain::{AssignmentId, DomainError, EmployeeId, ShiftId};
use time::Date;

/// Errors that can occur while scheduling assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The scheduler configuration is unusable.
    InvalidConfig(String),
    /// The requested shift does not exist.
    ShiftNotFound(ShiftId),
    /// An employee named by the request does not exist.
    EmployeeNotFound(EmployeeId),
    /// The requested assignment does not exist.
    AssignmentNotFound(AssignmentId),
    /// A single-slot action targeted a blackout date.
    HolidayConflict {
        /// The blackout date.
        date: Date,
        /// The holiday label.
        label: String,
    },
    /// A single-slot action would duplicate an existing assignment.
    DuplicateAssignment {
        /// The employee.
        employee_id: EmployeeId,
        /// The shift.
        shift_id: ShiftId,
        /// The date already taken.
        date: Date,
    },
    /// The holiday oracle could not be reached.
    HolidayLookupFailed(CollaboratorError),
    /// The employee directory could not be reached.
    EmployeeLookupFailed(CollaboratorError),
    /// The shift directory could not be reached.
    ShiftLookupFailed(CollaboratorError),
    /// The assignment store rejected a read or write.
    StoreFailure(CollaboratorError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidConfig(msg) => write!(f, "Invalid scheduler configuration: {msg}"),
            Self::ShiftNotFound(shift_id) => write!(f, "Shift {shift_id} not found"),
            Self::EmployeeNotFound(employee_id) => write!(f, "Employee {employee_id} not found"),
            Self::AssignmentNotFound(assignment_id) => {
                write!(f, "Assignment {assignment_id} not found")
            }
            Self::HolidayConflict { date, label } => {
                write!(f, "{date} is a holiday ({label}); no assignment allowed")
            }
            Self::DuplicateAssignment {
                employee_id,
                shift_id,
                date,
            } => {
                write!(
                    f,
                    "Employee {employee_id} is already assigned to shift {shift_id} on {date}"
                )
            }
            Self::HolidayLookupFailed(err) => write!(f, "Holiday lookup failed: {err}"),
            Self::EmployeeLookupFailed(err) => write!(f, "Employee lookup failed: {err}"),
            Self::ShiftLookupFailed(err) => write!(f, "Shift lookup failed: {err}"),
            Self::StoreFailure(err) => write!(f, "Assignment store failure: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
