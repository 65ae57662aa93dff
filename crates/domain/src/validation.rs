// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::request::BulkAssignmentRequest;
use crate::types::{AssignmentId, CenterId, Employee, EmployeeId, PatternStatus, ShiftPattern};
use time::Date;

/// Validates that a date range is not inverted.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if `start_date > end_date`.
pub fn validate_date_range(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if start_date > end_date {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Validates a bulk request before any date iteration or I/O.
///
/// # Errors
///
/// Returns an error if the date range is inverted.
pub fn validate_bulk_request(request: &BulkAssignmentRequest) -> Result<(), DomainError> {
    validate_date_range(request.start_date, request.end_date)
}

/// Validates that a shift pattern can receive assignments at a center.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern is archived
/// - The pattern belongs to a different center
pub fn validate_shift_assignable(
    pattern: &ShiftPattern,
    center_id: CenterId,
) -> Result<(), DomainError> {
    if !pattern.status.accepts_assignments() {
        return Err(DomainError::ShiftArchived {
            shift_id: pattern.shift_id.value(),
        });
    }
    if pattern.center_id != center_id {
        return Err(DomainError::ShiftCenterMismatch {
            shift_id: pattern.shift_id.value(),
            shift_center_id: pattern.center_id.value(),
            requested_center_id: center_id.value(),
        });
    }
    Ok(())
}

/// Validates that an employee can be scheduled at `center_id`.
///
/// # Errors
///
/// Returns `DomainError::EmployeeCenterMismatch` if the employee works elsewhere.
pub fn validate_employee_at_center(
    employee: &Employee,
    center_id: CenterId,
) -> Result<(), DomainError> {
    if employee.center_id == center_id {
        return Ok(());
    }
    Err(DomainError::EmployeeCenterMismatch {
        employee_id: employee.employee_id.value(),
        employee_center_id: employee.center_id.value(),
        requested_center_id: center_id.value(),
    })
}

/// Validates that at least one employee was selected.
///
/// # Errors
///
/// Returns `DomainError::NoEmployeesSelected` if the selection is empty.
pub const fn validate_employees_selected(employees: &[EmployeeId]) -> Result<(), DomainError> {
    if employees.is_empty() {
        return Err(DomainError::NoEmployeesSelected);
    }
    Ok(())
}

/// Validates that at least one assignment was selected.
///
/// # Errors
///
/// Returns `DomainError::NoAssignmentsSelected` if the selection is empty.
pub const fn validate_assignments_selected(ids: &[AssignmentId]) -> Result<(), DomainError> {
    if ids.is_empty() {
        return Err(DomainError::NoAssignmentsSelected);
    }
    Ok(())
}

/// Validates a display name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty or whitespace.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates the editable fields of a shift pattern.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - `min_staff` exceeds `max_staff`, or `max_staff` is zero
pub fn validate_shift_pattern(pattern: &ShiftPattern) -> Result<(), DomainError> {
    validate_name(&pattern.name)?;
    if pattern.max_staff == 0 || pattern.min_staff > pattern.max_staff {
        return Err(DomainError::InvalidHeadcount {
            min_staff: pattern.min_staff,
            max_staff: pattern.max_staff,
        });
    }
    Ok(())
}

/// Validates a shift pattern lifecycle transition.
///
/// # Errors
///
/// Returns `DomainError::InvalidStatusTransition` if the transition is not permitted.
pub const fn validate_status_transition(
    from: PatternStatus,
    to: PatternStatus,
) -> Result<(), DomainError> {
    if !from.can_transition_to(to) {
        return Err(DomainError::InvalidStatusTransition { from, to });
    }
    Ok(())
}
