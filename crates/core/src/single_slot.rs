// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-slot operations driven by direct calendar interaction.
//!
//! These share the bulk path's rules (no assignment on a blackout date, no
//! duplicate (employee, shift, date)) but report violations differently:
//! the bulk path skips and counts, while single-slot operations refuse with
//! an error and write nothing. Neither path ever overwrites an existing row.
//!
//! Assignment lifecycle across these operations:
//!
//! ```text
//! absent --(bulk commit | quick_assign)--> present
//! present --(move_assignment)--> present, same id, new date
//! present --(delete_assignments)--> absent
//! ```

use crate::collaborators::{
    AssignmentFilter, AssignmentStore, CollaboratorError, EmployeeDirectory, HolidayOracle,
    ShiftDirectory,
};
use crate::error::CoreError;
use gymshift_domain::{
    Assignment, AssignmentId, CenterId, Employee, Holiday, ShiftPattern,
    validate_assignments_selected, validate_date_range, validate_employee_at_center,
    validate_shift_assignable,
};
use std::collections::BTreeSet;
use time::Date;
use tracing::info;

/// Result of a drag-move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The destination equals the source date; nothing was written.
    Unchanged(Assignment),
    /// The assignment now sits on the destination date.
    Moved {
        /// The date the assignment was moved from.
        from: Date,
        /// The updated assignment.
        assignment: Assignment,
    },
}

/// Creates one assignment directly.
///
/// # Arguments
///
/// * `backend` - Holiday oracle, shift and employee directories, assignment store
/// * `slot` - The assignment to create; its ID is ignored
///
/// # Returns
///
/// The persisted assignment, with its ID.
///
/// # Errors
///
/// Returns an error, with nothing written, if:
/// - The shift does not exist, is archived, or belongs to another center
/// - The employee does not exist or works at another center
/// - The date is a holiday for the center (`CoreError::HolidayConflict`)
/// - The same (employee, shift, date) already exists (`CoreError::DuplicateAssignment`)
/// - A collaborator fails
pub fn quick_assign<B>(backend: &mut B, slot: &Assignment) -> Result<Assignment, CoreError>
where
    B: HolidayOracle + ShiftDirectory + EmployeeDirectory + AssignmentStore + ?Sized,
{
    let pattern: ShiftPattern = backend
        .shifts_by_ids(&[slot.shift_id])
        .map_err(CoreError::ShiftLookupFailed)?
        .into_iter()
        .find(|pattern| pattern.shift_id == slot.shift_id)
        .ok_or(CoreError::ShiftNotFound(slot.shift_id))?;
    validate_shift_assignable(&pattern, slot.center_id)?;

    let employee: Employee = backend
        .employees_by_ids(&[slot.employee_id])
        .map_err(CoreError::EmployeeLookupFailed)?
        .into_iter()
        .find(|employee| employee.employee_id == slot.employee_id)
        .ok_or(CoreError::EmployeeNotFound(slot.employee_id))?;
    validate_employee_at_center(&employee, slot.center_id)?;

    ensure_not_holiday(backend, slot.center_id, slot.date)?;
    ensure_slot_free(backend, slot, slot.date)?;

    let row: Assignment = Assignment::new(slot.employee_id, slot.shift_id, slot.center_id, slot.date);
    backend
        .insert_assignments(std::slice::from_ref(&row))
        .map_err(CoreError::StoreFailure)?;

    let filter: AssignmentFilter =
        AssignmentFilter::for_slot_dates(row.employee_id, row.shift_id, vec![row.date]);
    let created: Assignment = backend
        .select_assignments(&filter)
        .map_err(CoreError::StoreFailure)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            CoreError::StoreFailure(CollaboratorError::new(format!(
                "inserted assignment for employee {} on {} could not be read back",
                row.employee_id, row.date
            )))
        })?;

    info!(
        employee_id = created.employee_id.value(),
        shift_id = created.shift_id.value(),
        date = %created.date,
        "Quick-assigned shift"
    );
    Ok(created)
}

/// Moves an existing assignment to another date, keeping its ID.
///
/// # Errors
///
/// Returns an error, leaving the assignment untouched, if:
/// - The assignment does not exist
/// - The destination is a holiday for the assignment's center
/// - The employee already holds the same shift on the destination date
/// - A collaborator fails
pub fn move_assignment<B>(
    backend: &mut B,
    assignment_id: AssignmentId,
    to_date: Date,
) -> Result<MoveOutcome, CoreError>
where
    B: HolidayOracle + AssignmentStore + ?Sized,
{
    let current: Assignment = backend
        .select_assignments(&AssignmentFilter::by_ids(vec![assignment_id]))
        .map_err(CoreError::StoreFailure)?
        .into_iter()
        .next()
        .ok_or(CoreError::AssignmentNotFound(assignment_id))?;

    if current.date == to_date {
        return Ok(MoveOutcome::Unchanged(current));
    }

    ensure_not_holiday(backend, current.center_id, to_date)?;
    ensure_slot_free(backend, &current, to_date)?;

    let from: Date = current.date;
    let assignment: Assignment = backend
        .update_assignment_date(assignment_id, to_date)
        .map_err(CoreError::StoreFailure)?;

    info!(
        assignment_id = assignment_id.value(),
        from = %from,
        to = %to_date,
        "Moved assignment"
    );
    Ok(MoveOutcome::Moved { from, assignment })
}

/// Deletes assignments by ID in one request.
///
/// Repeated IDs are collapsed before the request is sent.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if no IDs are given or the store rejects the delete.
pub fn delete_assignments<S>(store: &mut S, ids: &[AssignmentId]) -> Result<usize, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    validate_assignments_selected(ids)?;
    let unique: Vec<AssignmentId> = ids
        .iter()
        .copied()
        .collect::<BTreeSet<AssignmentId>>()
        .into_iter()
        .collect();

    let deleted: usize = store
        .delete_assignments(&unique)
        .map_err(CoreError::StoreFailure)?;

    info!(requested = unique.len(), deleted = deleted, "Deleted assignments");
    Ok(deleted)
}

/// Lists a center's assignments over a visible window.
///
/// Results are ordered by date, then employee, then shift.
///
/// # Errors
///
/// Returns an error if the window is inverted or the store cannot be queried.
pub fn list_assignments<S>(
    store: &mut S,
    center_id: CenterId,
    from: Date,
    to: Date,
) -> Result<Vec<Assignment>, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    validate_date_range(from, to)?;
    let mut rows: Vec<Assignment> = store
        .select_assignments(&AssignmentFilter::for_window(center_id, from, to))
        .map_err(CoreError::StoreFailure)?;
    rows.sort_by_key(|row| (row.date, row.employee_id, row.shift_id));
    Ok(rows)
}

fn ensure_not_holiday<B>(backend: &mut B, center_id: CenterId, date: Date) -> Result<(), CoreError>
where
    B: HolidayOracle + ?Sized,
{
    let holiday: Option<Holiday> = backend
        .holiday_on(center_id, date)
        .map_err(CoreError::HolidayLookupFailed)?;
    match holiday {
        Some(holiday) => Err(CoreError::HolidayConflict {
            date,
            label: holiday.label,
        }),
        None => Ok(()),
    }
}

fn ensure_slot_free<S>(store: &mut S, slot: &Assignment, date: Date) -> Result<(), CoreError>
where
    S: AssignmentStore + ?Sized,
{
    let filter: AssignmentFilter =
        AssignmentFilter::for_slot_dates(slot.employee_id, slot.shift_id, vec![date]);
    let taken: bool = !store
        .select_assignments(&filter)
        .map_err(CoreError::StoreFailure)?
        .is_empty();
    if taken {
        return Err(CoreError::DuplicateAssignment {
            employee_id: slot.employee_id,
            shift_id: slot.shift_id,
            date,
        });
    }
    Ok(())
}
