// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Center, employee and shift pattern lookups.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gymshift_domain::{
    Center, CenterId, Employee, EmployeeId, PatternStatus, ShiftId, ShiftPattern, WeekdayFlags,
    parse_time,
};
use std::str::FromStr;
use tracing::debug;

use crate::diesel_schema::{centers, employees, shift_patterns};
use crate::error::{PersistenceError, corrupt};

#[derive(Queryable, Selectable)]
#[diesel(table_name = centers)]
struct CenterRow {
    center_id: i64,
    name: String,
    region: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
struct EmployeeRow {
    employee_id: i64,
    center_id: i64,
    name: String,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            employee_id: EmployeeId::new(self.employee_id),
            center_id: CenterId::new(self.center_id),
            name: self.name,
        }
    }
}

/// Diesel Queryable struct for shift pattern rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = shift_patterns)]
struct ShiftPatternRow {
    shift_id: i64,
    center_id: i64,
    name: String,
    start_time: String,
    end_time: String,
    runs_monday: i32,
    runs_tuesday: i32,
    runs_wednesday: i32,
    runs_thursday: i32,
    runs_friday: i32,
    runs_saturday: i32,
    runs_sunday: i32,
    min_staff: i32,
    max_staff: i32,
    status: String,
}

impl ShiftPatternRow {
    fn into_pattern(self) -> Result<ShiftPattern, PersistenceError> {
        let weekdays: WeekdayFlags = WeekdayFlags::from_array([
            self.runs_monday != 0,
            self.runs_tuesday != 0,
            self.runs_wednesday != 0,
            self.runs_thursday != 0,
            self.runs_friday != 0,
            self.runs_saturday != 0,
            self.runs_sunday != 0,
        ]);
        Ok(ShiftPattern {
            shift_id: ShiftId::new(self.shift_id),
            center_id: CenterId::new(self.center_id),
            start_time: parse_time(&self.start_time)
                .map_err(corrupt("start_time", &self.start_time))?,
            end_time: parse_time(&self.end_time).map_err(corrupt("end_time", &self.end_time))?,
            weekdays,
            min_staff: headcount("min_staff", self.min_staff)?,
            max_staff: headcount("max_staff", self.max_staff)?,
            status: PatternStatus::from_str(&self.status)
                .map_err(corrupt("status", &self.status))?,
            name: self.name,
        })
    }
}

fn headcount(column: &'static str, value: i32) -> Result<u16, PersistenceError> {
    u16::try_from(value).map_err(|_| PersistenceError::CorruptValue {
        column,
        value: value.to_string(),
    })
}

/// Retrieves a center by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the center is not found.
pub fn get_center(
    conn: &mut SqliteConnection,
    center_id: CenterId,
) -> Result<Option<Center>, PersistenceError> {
    let row: Option<CenterRow> = centers::table
        .filter(centers::center_id.eq(center_id.value()))
        .select(CenterRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| Center::new(CenterId::new(row.center_id), row.name, row.region)))
}

/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: EmployeeId,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(employee_id.value()))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(EmployeeRow::into_employee))
}

/// Retrieves the employees with the given IDs, in any center.
///
/// Unknown IDs are omitted from the result.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_employees(
    conn: &mut SqliteConnection,
    ids: &[EmployeeId],
) -> Result<Vec<Employee>, PersistenceError> {
    let raw_ids: Vec<i64> = ids.iter().map(EmployeeId::value).collect();
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq_any(raw_ids))
        .select(EmployeeRow::as_select())
        .load(conn)?;

    debug!(requested = ids.len(), found = rows.len(), "Resolved employees");
    Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
}

/// Lists the employees of a center, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(
    conn: &mut SqliteConnection,
    center_id: CenterId,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::center_id.eq(center_id.value()))
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
}

/// Retrieves the shift patterns with the given IDs.
///
/// Unknown IDs are omitted from the result.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn get_shift_patterns(
    conn: &mut SqliteConnection,
    shift_ids: &[ShiftId],
) -> Result<Vec<ShiftPattern>, PersistenceError> {
    let ids: Vec<i64> = shift_ids.iter().map(ShiftId::value).collect();
    debug!(count = ids.len(), "Looking up shift patterns");

    let rows: Vec<ShiftPatternRow> = shift_patterns::table
        .filter(shift_patterns::shift_id.eq_any(&ids))
        .order(shift_patterns::shift_id.asc())
        .select(ShiftPatternRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ShiftPatternRow::into_pattern).collect()
}

/// Lists the shift patterns owned by a center, ordered by ID.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn list_shift_patterns(
    conn: &mut SqliteConnection,
    center_id: CenterId,
) -> Result<Vec<ShiftPattern>, PersistenceError> {
    let rows: Vec<ShiftPatternRow> = shift_patterns::table
        .filter(shift_patterns::center_id.eq(center_id.value()))
        .order(shift_patterns::shift_id.asc())
        .select(ShiftPatternRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ShiftPatternRow::into_pattern).collect()
}
