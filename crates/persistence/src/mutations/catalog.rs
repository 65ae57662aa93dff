// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Center, employee and shift pattern writes.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gymshift_domain::{CenterId, PatternStatus, ShiftId, ShiftPattern, format_time};
use tracing::info;

use crate::diesel_schema::{centers, employees, shift_patterns};
use crate::error::PersistenceError;

/// Creates a center.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - Display name
/// * `region` - Optional region code for regional holidays
///
/// # Returns
///
/// The new center's ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_center(
    conn: &mut SqliteConnection,
    name: &str,
    region: Option<&str>,
) -> Result<i64, PersistenceError> {
    let center_id: i64 = diesel::insert_into(centers::table)
        .values((centers::name.eq(name), centers::region.eq(region)))
        .returning(centers::center_id)
        .get_result(conn)?;
    info!(center_id, name, region = ?region, "Created center");
    Ok(center_id)
}

/// Creates an employee attached to a center.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the center does
/// not exist.
pub fn create_employee(
    conn: &mut SqliteConnection,
    center_id: CenterId,
    name: &str,
) -> Result<i64, PersistenceError> {
    let employee_id: i64 = diesel::insert_into(employees::table)
        .values((
            employees::center_id.eq(center_id.value()),
            employees::name.eq(name),
        ))
        .returning(employees::employee_id)
        .get_result(conn)?;
    info!(employee_id, center_id = center_id.value(), "Created employee");
    Ok(employee_id)
}

/// Creates a shift pattern. The pattern's own ID is ignored.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the center does
/// not exist.
pub fn create_shift_pattern(
    conn: &mut SqliteConnection,
    pattern: &ShiftPattern,
) -> Result<i64, PersistenceError> {
    let [mon, tue, wed, thu, fri, sat, sun]: [bool; 7] = pattern.weekdays.to_array();

    let shift_id: i64 = diesel::insert_into(shift_patterns::table)
        .values((
            shift_patterns::center_id.eq(pattern.center_id.value()),
            shift_patterns::name.eq(&pattern.name),
            shift_patterns::start_time.eq(format_time(pattern.start_time)),
            shift_patterns::end_time.eq(format_time(pattern.end_time)),
            shift_patterns::runs_monday.eq(i32::from(mon)),
            shift_patterns::runs_tuesday.eq(i32::from(tue)),
            shift_patterns::runs_wednesday.eq(i32::from(wed)),
            shift_patterns::runs_thursday.eq(i32::from(thu)),
            shift_patterns::runs_friday.eq(i32::from(fri)),
            shift_patterns::runs_saturday.eq(i32::from(sat)),
            shift_patterns::runs_sunday.eq(i32::from(sun)),
            shift_patterns::min_staff.eq(i32::from(pattern.min_staff)),
            shift_patterns::max_staff.eq(i32::from(pattern.max_staff)),
            shift_patterns::status.eq(pattern.status.as_str()),
        ))
        .returning(shift_patterns::shift_id)
        .get_result(conn)?;
    info!(
        shift_id,
        center_id = pattern.center_id.value(),
        status = pattern.status.as_str(),
        "Created shift pattern"
    );
    Ok(shift_id)
}

/// Sets a shift pattern's lifecycle status.
///
/// Transition rules are checked by the caller.
///
/// # Errors
///
/// Returns `PersistenceError::ShiftNotFound` if no row was updated.
pub fn update_shift_status(
    conn: &mut SqliteConnection,
    shift_id: ShiftId,
    status: PatternStatus,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(shift_patterns::table)
        .filter(shift_patterns::shift_id.eq(shift_id.value()))
        .set(shift_patterns::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::ShiftNotFound(shift_id.value()));
    }

    info!(
        shift_id = shift_id.value(),
        status = status.as_str(),
        "Updated shift pattern status"
    );
    Ok(())
}
