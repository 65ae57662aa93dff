// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gymshift_domain::{Holiday, HolidayScope, format_date};
use tracing::info;

use crate::diesel_schema::holidays;
use crate::error::PersistenceError;

/// Stores a holiday with its scope.
///
/// # Returns
///
/// The new holiday's row ID.
///
/// # Errors
///
/// Returns an error if the insert fails, including when a center-scoped
/// holiday names a center that does not exist.
pub fn add_holiday(conn: &mut SqliteConnection, holiday: &Holiday) -> Result<i64, PersistenceError> {
    let (region, center_id): (Option<&str>, Option<i64>) = match &holiday.scope {
        HolidayScope::Global => (None, None),
        HolidayScope::Regional(region) => (Some(region.as_str()), None),
        HolidayScope::Center(center_id) => (None, Some(center_id.value())),
    };

    let holiday_id: i64 = diesel::insert_into(holidays::table)
        .values((
            holidays::holiday_date.eq(format_date(holiday.date)),
            holidays::label.eq(&holiday.label),
            holidays::scope_kind.eq(holiday.scope.kind()),
            holidays::region.eq(region),
            holidays::center_id.eq(center_id),
        ))
        .returning(holidays::holiday_id)
        .get_result(conn)?;
    info!(
        holiday_id,
        date = %holiday.date,
        scope = holiday.scope.kind(),
        "Added holiday"
    );
    Ok(holiday_id)
}
