// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dates;
mod error;
mod expansion;
mod holiday_calendar;
mod request;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{
    DateRange, days_inclusive, format_date, format_time, is_weekend, parse_date, parse_time,
};
pub use error::DomainError;
pub use expansion::expand_pattern;
pub use holiday_calendar::{HolidayCalendar, PrunedDates};
pub use request::BulkAssignmentRequest;

// Re-export public types
pub use types::{
    Assignment, AssignmentId, AssignmentKey, Center, CenterId, Employee, EmployeeId, Holiday,
    HolidayScope, PatternStatus, ShiftId, ShiftPattern, WeekdayFlags,
};
pub use validation::{
    validate_assignments_selected, validate_bulk_request, validate_date_range,
    validate_employee_at_center, validate_employees_selected, validate_name,
    validate_shift_assignable,
    validate_shift_pattern, validate_status_transition,
};
