// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates are `YYYY-MM-DD` strings and times `HH:MM` strings on both sides
//! of the boundary; IDs are plain integers.

use gymshift::BulkAssignOutcome;
use gymshift_domain::{
    Assignment, AssignmentId, Center, Employee, Holiday, HolidayScope, ShiftPattern, WeekdayFlags,
    format_date, format_time,
};
use serde::{Deserialize, Serialize};

/// Seven weekday flags, Monday through Sunday.
///
/// Missing flags default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WeekdaySelection {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl From<WeekdaySelection> for WeekdayFlags {
    fn from(selection: WeekdaySelection) -> Self {
        Self::from_array([
            selection.monday,
            selection.tuesday,
            selection.wednesday,
            selection.thursday,
            selection.friday,
            selection.saturday,
            selection.sunday,
        ])
    }
}

impl From<WeekdayFlags> for WeekdaySelection {
    fn from(flags: WeekdayFlags) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday]: [bool; 7] =
            flags.to_array();
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

// ============================================================================
// Reference data
// ============================================================================

/// API request to create a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCenterRequest {
    /// Display name.
    pub name: String,
    /// Optional region code; regional holidays for this code apply.
    pub region: Option<String>,
}

/// Center information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterInfo {
    pub center_id: i64,
    pub name: String,
    pub region: Option<String>,
}

impl From<&Center> for CenterInfo {
    fn from(center: &Center) -> Self {
        Self {
            center_id: center.center_id.value(),
            name: center.name.clone(),
            region: center.region.clone(),
        }
    }
}

/// API request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The center the employee works at.
    pub center_id: i64,
    /// Display name.
    pub name: String,
}

/// Employee information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub employee_id: i64,
    pub center_id: i64,
    pub name: String,
}

impl From<&Employee> for EmployeeInfo {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.value(),
            center_id: employee.center_id.value(),
            name: employee.name.clone(),
        }
    }
}

/// API request to create a shift pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The owning center.
    pub center_id: i64,
    /// Display name.
    pub name: String,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Days the shift runs on.
    pub weekdays: WeekdaySelection,
    /// Minimum headcount.
    pub min_staff: u16,
    /// Maximum headcount.
    pub max_staff: u16,
    /// Initial status; `draft` when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

/// API request to move a shift pattern through its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateShiftStatusRequest {
    /// Target status: `published` or `archived`.
    pub status: String,
}

/// Shift pattern information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInfo {
    pub shift_id: i64,
    pub center_id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub weekdays: WeekdaySelection,
    pub min_staff: u16,
    pub max_staff: u16,
    pub status: String,
}

impl From<&ShiftPattern> for ShiftInfo {
    fn from(pattern: &ShiftPattern) -> Self {
        Self {
            shift_id: pattern.shift_id.value(),
            center_id: pattern.center_id.value(),
            name: pattern.name.clone(),
            start_time: format_time(pattern.start_time),
            end_time: format_time(pattern.end_time),
            weekdays: WeekdaySelection::from(pattern.weekdays),
            min_staff: pattern.min_staff,
            max_staff: pattern.max_staff,
            status: pattern.status.as_str().to_string(),
        }
    }
}

/// API request to create a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHolidayRequest {
    /// The blackout date, `YYYY-MM-DD`.
    pub date: String,
    /// Human-readable label.
    pub label: String,
    /// `global`, `regional` or `center`.
    pub scope: String,
    /// Required when `scope` is `regional`.
    #[serde(default)]
    pub region: Option<String>,
    /// Required when `scope` is `center`.
    #[serde(default)]
    pub center_id: Option<i64>,
}

/// Holiday information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInfo {
    pub date: String,
    pub label: String,
    pub scope: String,
    pub region: Option<String>,
    pub center_id: Option<i64>,
}

impl From<&Holiday> for HolidayInfo {
    fn from(holiday: &Holiday) -> Self {
        let (region, center_id): (Option<String>, Option<i64>) = match &holiday.scope {
            HolidayScope::Global => (None, None),
            HolidayScope::Regional(region) => (Some(region.clone()), None),
            HolidayScope::Center(center_id) => (None, Some(center_id.value())),
        };
        Self {
            date: format_date(holiday.date),
            label: holiday.label.clone(),
            scope: holiday.scope.kind().to_string(),
            region,
            center_id,
        }
    }
}

/// API request to list the holidays that apply to a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListHolidaysRequest {
    pub center_id: i64,
    /// First date, `YYYY-MM-DD`.
    pub from: String,
    /// Last date, `YYYY-MM-DD`.
    pub to: String,
}

/// API response listing holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListHolidaysResponse {
    pub center_id: i64,
    pub holidays: Vec<HolidayInfo>,
}

// ============================================================================
// Assignments
// ============================================================================

/// API request to expand a shift pattern over a date range for one or
/// more employees.
///
/// Dates that fall on a holiday, or that the employee already holds, are
/// skipped and counted in the response rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAssignRequest {
    pub center_id: i64,
    pub shift_id: i64,
    /// Employees to assign; each gets the same dates.
    pub employee_ids: Vec<i64>,
    /// First date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Drop Saturdays and Sundays.
    #[serde(default)]
    pub exclude_weekends: bool,
    /// Dates never to assign, `YYYY-MM-DD`.
    #[serde(default)]
    pub exclude_dates: Vec<String>,
    /// Overrides the pattern's weekdays when at least one day is set.
    #[serde(default)]
    pub manual_days: Option<WeekdaySelection>,
}

/// API response for a bulk assignment.
///
/// `complete` is false when an insert chunk failed; rows inserted before
/// the failure are kept and counted in `inserted_count`. Re-sending the
/// same request fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAssignResponse {
    pub candidate_count: usize,
    pub inserted_count: usize,
    pub skipped_holiday: usize,
    pub skipped_duplicate: usize,
    pub complete: bool,
    pub failed_at_chunk: Option<usize>,
    pub error: Option<String>,
    /// Summary with every skip category spelled out.
    pub message: String,
}

impl From<&BulkAssignOutcome> for BulkAssignResponse {
    fn from(outcome: &BulkAssignOutcome) -> Self {
        Self {
            candidate_count: outcome.candidate_count,
            inserted_count: outcome.inserted_count,
            skipped_holiday: outcome.skipped_holiday,
            skipped_duplicate: outcome.skipped_duplicate,
            complete: outcome.is_complete(),
            failed_at_chunk: outcome.failed_at_chunk,
            error: outcome.error.as_ref().map(ToString::to_string),
            message: outcome.summary(),
        }
    }
}

/// API request to assign one shift on one date.
///
/// Unlike bulk assignment, a holiday or an existing assignment is an
/// error here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAssignRequest {
    pub center_id: i64,
    pub shift_id: i64,
    pub employee_id: i64,
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// Assignment information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInfo {
    pub assignment_id: Option<i64>,
    pub employee_id: i64,
    pub shift_id: i64,
    pub center_id: i64,
    pub date: String,
}

impl From<&Assignment> for AssignmentInfo {
    fn from(assignment: &Assignment) -> Self {
        Self {
            assignment_id: assignment.assignment_id.as_ref().map(AssignmentId::value),
            employee_id: assignment.employee_id.value(),
            shift_id: assignment.shift_id.value(),
            center_id: assignment.center_id.value(),
            date: format_date(assignment.date),
        }
    }
}

/// API request to drag an assignment to another date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAssignmentRequest {
    /// Destination date, `YYYY-MM-DD`.
    pub to_date: String,
}

/// API response for a drag-move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAssignmentResponse {
    pub assignment: AssignmentInfo,
    /// False when the destination equalled the current date.
    pub moved: bool,
    pub from_date: String,
    pub message: String,
}

/// API request to delete assignments by ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAssignmentsRequest {
    pub assignment_ids: Vec<i64>,
}

/// API response for a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAssignmentsResponse {
    /// Distinct IDs sent to the store.
    pub requested: usize,
    pub deleted: usize,
    pub message: String,
}

/// API request to list a center's assignments over a visible window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAssignmentsRequest {
    pub center_id: i64,
    /// First date, `YYYY-MM-DD`.
    pub from: String,
    /// Last date, `YYYY-MM-DD`.
    pub to: String,
}

/// API response listing assignments, ordered by date then employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAssignmentsResponse {
    pub center_id: i64,
    pub from: String,
    pub to: String,
    pub assignments: Vec<AssignmentInfo>,
}
