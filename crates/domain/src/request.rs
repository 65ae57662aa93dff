// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CenterId, EmployeeId, ShiftId, WeekdayFlags};
use std::collections::BTreeSet;
use time::Date;

/// A request to expand one shift over a date range for one employee.
///
/// Requests are ephemeral: they exist only for the duration of one
/// expansion-and-commit operation and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkAssignmentRequest {
    /// The employee to assign.
    pub employee_id: EmployeeId,
    /// The shift to assign.
    pub shift_id: ShiftId,
    /// The center whose holidays apply.
    pub center_id: CenterId,
    /// First date of the range (inclusive).
    pub start_date: Date,
    /// Last date of the range (inclusive).
    pub end_date: Date,
    /// Drop Saturdays and Sundays regardless of weekday flags.
    pub exclude_weekends: bool,
    /// Dates that must never be produced.
    pub exclude_dates: BTreeSet<Date>,
    /// Optional weekday override. When at least one day is set, the
    /// pattern's own weekday flags are ignored.
    pub manual_day_selection: Option<WeekdayFlags>,
}

impl BulkAssignmentRequest {
    /// Creates a request with no exclusions and no manual day selection.
    #[must_use]
    pub const fn new(
        employee_id: EmployeeId,
        shift_id: ShiftId,
        center_id: CenterId,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self {
            employee_id,
            shift_id,
            center_id,
            start_date,
            end_date,
            exclude_weekends: false,
            exclude_dates: BTreeSet::new(),
            manual_day_selection: None,
        }
    }

    /// Returns the manual day selection if it has at least one day set.
    #[must_use]
    pub fn effective_manual_selection(&self) -> Option<WeekdayFlags> {
        self.manual_day_selection.filter(|flags| !flags.is_empty())
    }
}
