// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::PatternStatus;
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The start date of a range falls after its end date.
    InvalidDateRange {
        /// The requested start date.
        start_date: Date,
        /// The requested end date.
        end_date: Date,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
    /// No shift was selected for an assignment operation.
    NoShiftSelected,
    /// No employees were selected for an assignment operation.
    NoEmployeesSelected,
    /// No assignments were selected for a delete operation.
    NoAssignmentsSelected,
    /// A name (center, employee or shift) is empty or invalid.
    InvalidName(String),
    /// Headcount bounds are inconsistent.
    InvalidHeadcount {
        /// The minimum headcount.
        min_staff: u16,
        /// The maximum headcount.
        max_staff: u16,
    },
    /// An unknown lifecycle status string.
    InvalidLifecycleState(String),
    /// A lifecycle transition that is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: PatternStatus,
        /// The requested status.
        to: PatternStatus,
    },
    /// The shift pattern is archived and cannot receive new assignments.
    ShiftArchived {
        /// The archived shift.
        shift_id: i64,
    },
    /// The shift pattern belongs to a different center than the request.
    ShiftCenterMismatch {
        /// The shift.
        shift_id: i64,
        /// The center that owns the shift.
        shift_center_id: i64,
        /// The center named by the request.
        requested_center_id: i64,
    },
    /// The employee works at a different center than the request.
    EmployeeCenterMismatch {
        employee_id: i64,
        employee_center_id: i64,
        requested_center_id: i64,
    },
    /// An unknown holiday scope string.
    InvalidHolidayScope(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid date range: start date {start_date} is after end date {end_date}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::NoShiftSelected => write!(f, "No shift selected"),
            Self::NoEmployeesSelected => write!(f, "No employees selected"),
            Self::NoAssignmentsSelected => write!(f, "No assignments selected"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidHeadcount {
                min_staff,
                max_staff,
            } => {
                write!(
                    f,
                    "Invalid headcount: minimum {min_staff} exceeds maximum {max_staff} or maximum is zero"
                )
            }
            Self::InvalidLifecycleState(state) => {
                write!(f, "Invalid lifecycle state: {state}")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot transition shift pattern from {from} to {to}")
            }
            Self::ShiftArchived { shift_id } => {
                write!(f, "Shift {shift_id} is archived and cannot be assigned")
            }
            Self::ShiftCenterMismatch {
                shift_id,
                shift_center_id,
                requested_center_id,
            } => {
                write!(
                    f,
                    "Shift {shift_id} belongs to center {shift_center_id}, not center {requested_center_id}"
                )
            }
            Self::EmployeeCenterMismatch {
                employee_id,
                employee_center_id,
                requested_center_id,
            } => write!(
                f,
                "Employee {employee_id} works at center {employee_center_id}, not center {requested_center_id}"
            ),
            Self::InvalidHolidayScope(scope) => write!(f, "Invalid holiday scope: {scope}"),
        }
    }
}

impl std::error::Error for DomainError {}
