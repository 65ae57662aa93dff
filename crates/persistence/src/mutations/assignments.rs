// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment writes.
//!
//! ## Invariants
//!
//! - A multi-row insert is one transaction: all rows land or none do
//! - The unique index on (employee, shift, date) rejects duplicates; a
//!   rejected row fails its whole insert call
//! - A date change keeps the assignment ID

use diesel::SqliteConnection;
use diesel::prelude::*;
use gymshift_domain::{Assignment, AssignmentId, format_date};
use time::Date;
use tracing::debug;

use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = assignments)]
struct NewAssignmentRow {
    employee_id: i64,
    shift_id: i64,
    center_id: i64,
    assignment_date: String,
}

impl From<&Assignment> for NewAssignmentRow {
    fn from(assignment: &Assignment) -> Self {
        Self {
            employee_id: assignment.employee_id.value(),
            shift_id: assignment.shift_id.value(),
            center_id: assignment.center_id.value(),
            assignment_date: format_date(assignment.date),
        }
    }
}

/// Inserts `rows` in a single transaction.
///
/// Any assignment IDs on the input are ignored.
///
/// # Returns
///
/// The number of rows inserted.
///
/// # Errors
///
/// Returns an error, with nothing inserted, if any row violates a
/// constraint or the transaction fails.
pub fn insert_assignments(
    conn: &mut SqliteConnection,
    rows: &[Assignment],
) -> Result<usize, PersistenceError> {
    if rows.is_empty() {
        return Ok(0);
    }
    let new_rows: Vec<NewAssignmentRow> = rows.iter().map(NewAssignmentRow::from).collect();

    let inserted: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        Ok(diesel::insert_into(assignments::table)
            .values(&new_rows)
            .execute(conn)?)
    })?;

    debug!(inserted, "Inserted assignment rows");
    Ok(inserted)
}

/// Changes the date of one assignment.
///
/// # Errors
///
/// Returns `PersistenceError::AssignmentNotFound` if the ID is unknown, or
/// a database error if the new date collides with the unique index.
pub fn update_assignment_date(
    conn: &mut SqliteConnection,
    assignment_id: AssignmentId,
    date: Date,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(assignments::table)
        .filter(assignments::assignment_id.eq(assignment_id.value()))
        .set(assignments::assignment_date.eq(format_date(date)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::AssignmentNotFound(assignment_id.value()));
    }
    Ok(())
}

/// Deletes the assignments with the given IDs in one statement.
///
/// Unknown IDs are ignored.
///
/// # Returns
///
/// The number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_assignments(
    conn: &mut SqliteConnection,
    assignment_ids: &[AssignmentId],
) -> Result<usize, PersistenceError> {
    let ids: Vec<i64> = assignment_ids.iter().map(AssignmentId::value).collect();
    let deleted: usize = diesel::delete(assignments::table)
        .filter(assignments::assignment_id.eq_any(ids))
        .execute(conn)?;

    debug!(requested = assignment_ids.len(), deleted, "Deleted assignment rows");
    Ok(deleted)
}
