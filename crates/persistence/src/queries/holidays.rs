// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday lookups.
//!
//! Holidays are stored once with their scope. Whether a holiday blacks out
//! a given center is decided by `Holiday::applies_to`, so global, regional
//! and center-scoped rows all go through the same rule.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gymshift_domain::{Center, CenterId, Holiday, HolidayScope, format_date, parse_date};
use time::Date;
use tracing::debug;

use crate::diesel_schema::holidays;
use crate::error::{PersistenceError, corrupt};

/// Diesel Queryable struct for holiday rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = holidays)]
struct HolidayRow {
    holiday_date: String,
    label: String,
    scope_kind: String,
    region: Option<String>,
    center_id: Option<i64>,
}

impl HolidayRow {
    fn into_holiday(self) -> Result<Holiday, PersistenceError> {
        let date: Date =
            parse_date(&self.holiday_date).map_err(corrupt("holiday_date", &self.holiday_date))?;
        let scope: HolidayScope = HolidayScope::from_parts(
            &self.scope_kind,
            self.region,
            self.center_id.map(CenterId::new),
        )
        .map_err(corrupt("scope_kind", &self.scope_kind))?;
        Ok(Holiday::new(date, self.label, scope))
    }
}

/// Lists every holiday between `start` and `end` inclusive, regardless of
/// scope, ordered by date.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn list_holidays_between(
    conn: &mut SqliteConnection,
    start: Date,
    end: Date,
) -> Result<Vec<Holiday>, PersistenceError> {
    let rows: Vec<HolidayRow> = holidays::table
        .filter(holidays::holiday_date.ge(format_date(start)))
        .filter(holidays::holiday_date.le(format_date(end)))
        .order((holidays::holiday_date.asc(), holidays::holiday_id.asc()))
        .select(HolidayRow::as_select())
        .load(conn)?;

    rows.into_iter().map(HolidayRow::into_holiday).collect()
}

/// Lists the holidays that black out `center` between `start` and `end`
/// inclusive, ordered by date.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn list_holidays_for_center(
    conn: &mut SqliteConnection,
    center: &Center,
    start: Date,
    end: Date,
) -> Result<Vec<Holiday>, PersistenceError> {
    let holidays: Vec<Holiday> = list_holidays_between(conn, start, end)?
        .into_iter()
        .filter(|holiday| holiday.applies_to(center))
        .collect();

    debug!(
        center_id = center.center_id.value(),
        start = %start,
        end = %end,
        found = holidays.len(),
        "Loaded holidays for center"
    );
    Ok(holidays)
}
