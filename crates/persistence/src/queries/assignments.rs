// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment selection.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use gymshift::AssignmentFilter;
use gymshift_domain::{
    Assignment, AssignmentId, CenterId, EmployeeId, ShiftId, format_date, parse_date,
};
use time::Date;

use crate::diesel_schema::assignments;
use crate::error::{PersistenceError, corrupt};

/// Diesel Queryable struct for assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
struct AssignmentRow {
    assignment_id: i64,
    employee_id: i64,
    shift_id: i64,
    center_id: i64,
    assignment_date: String,
}

impl AssignmentRow {
    fn into_assignment(self) -> Result<Assignment, PersistenceError> {
        let date: Date = parse_date(&self.assignment_date)
            .map_err(corrupt("assignment_date", &self.assignment_date))?;
        let mut assignment: Assignment = Assignment::new(
            EmployeeId::new(self.employee_id),
            ShiftId::new(self.shift_id),
            CenterId::new(self.center_id),
            date,
        );
        assignment.assignment_id = Some(AssignmentId::new(self.assignment_id));
        Ok(assignment)
    }
}

/// Selects the assignments matching every criterion set on `filter`.
///
/// Rows come back ordered by ID; callers that need another order sort
/// them.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn select_assignments(
    conn: &mut SqliteConnection,
    filter: &AssignmentFilter,
) -> Result<Vec<Assignment>, PersistenceError> {
    let mut query = assignments::table
        .select(AssignmentRow::as_select())
        .into_boxed::<Sqlite>();

    if let Some(ids) = &filter.ids {
        let ids: Vec<i64> = ids.iter().map(AssignmentId::value).collect();
        query = query.filter(assignments::assignment_id.eq_any(ids));
    }
    if let Some(center_id) = filter.center_id {
        query = query.filter(assignments::center_id.eq(center_id.value()));
    }
    if let Some(employee_id) = filter.employee_id {
        query = query.filter(assignments::employee_id.eq(employee_id.value()));
    }
    if let Some(shift_id) = filter.shift_id {
        query = query.filter(assignments::shift_id.eq(shift_id.value()));
    }
    if let Some(dates) = &filter.dates {
        let dates: Vec<String> = dates.iter().copied().map(format_date).collect();
        query = query.filter(assignments::assignment_date.eq_any(dates));
    }
    if let Some(from) = filter.from {
        query = query.filter(assignments::assignment_date.ge(format_date(from)));
    }
    if let Some(to) = filter.to {
        query = query.filter(assignments::assignment_date.le(format_date(to)));
    }

    let rows: Vec<AssignmentRow> = query
        .order(assignments::assignment_id.asc())
        .load(conn)?;

    rows.into_iter().map(AssignmentRow::into_assignment).collect()
}

/// Retrieves one assignment by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row cannot be decoded.
/// Returns `Ok(None)` if the assignment is not found.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: AssignmentId,
) -> Result<Option<Assignment>, PersistenceError> {
    let row: Option<AssignmentRow> = assignments::table
        .filter(assignments::assignment_id.eq(assignment_id.value()))
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(AssignmentRow::into_assignment).transpose()
}
