// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the gym shift scheduler.
//!
//! Requests arrive string-typed (dates as `YYYY-MM-DD`, times as `HH:MM`)
//! and are parsed and validated here before anything reaches the
//! scheduler or the store. Errors from every lower layer are translated
//! into `ApiError` explicitly; nothing below this crate leaks through.
//!
//! The bulk and single-slot paths report rule hits differently. A bulk
//! assignment skips holidays and existing assignments and counts them in
//! its response. Quick-assign and drag-move refuse the same situations
//! with `ApiError::Conflict` and write nothing.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod input;
mod request_response;
mod selection;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    bulk_assign, create_center, create_employee, create_holiday, create_shift, delete_assignments,
    list_assignments, list_holidays, move_assignment, quick_assign, update_shift_status,
};
pub use input::{InputError, parse_date_field, parse_date_set, parse_time_field};
pub use request_response::{
    AssignmentInfo, BulkAssignRequest, BulkAssignResponse, CenterInfo, CreateCenterRequest,
    CreateEmployeeRequest, CreateHolidayRequest, CreateShiftRequest, DeleteAssignmentsRequest,
    DeleteAssignmentsResponse, EmployeeInfo, HolidayInfo, ListAssignmentsRequest,
    ListAssignmentsResponse, ListHolidaysRequest, ListHolidaysResponse, MoveAssignmentRequest,
    MoveAssignmentResponse, QuickAssignRequest, ShiftInfo, UpdateShiftStatusRequest,
    WeekdaySelection,
};
pub use selection::{AssignmentSelection, delete_selected};
