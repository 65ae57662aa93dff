// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentFilter, AssignmentStore, CollaboratorError, EmployeeDirectory, HolidayOracle,
    ShiftDirectory,
};
use gymshift_domain::{
    Assignment, AssignmentId, AssignmentKey, BulkAssignmentRequest, CenterId, Employee, EmployeeId,
    Holiday, HolidayScope, PatternStatus, ShiftId, ShiftPattern, WeekdayFlags,
};
use std::collections::HashSet;
use time::macros::time;
use time::{Date, Weekday};

pub const CENTER: CenterId = CenterId::new(1);
pub const SHIFT: ShiftId = ShiftId::new(10);
pub const EMPLOYEE: EmployeeId = EmployeeId::new(100);
pub const COWORKER: EmployeeId = EmployeeId::new(200);

/// In-memory collaborator with call accounting and failure injection.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub holidays: Vec<Holiday>,
    pub shifts: Vec<ShiftPattern>,
    pub employees: Vec<Employee>,
    pub rows: Vec<Assignment>,
    pub next_id: i64,
    pub holiday_calls: usize,
    pub select_calls: usize,
    pub insert_calls: Vec<usize>,
    pub update_calls: usize,
    pub delete_calls: Vec<Vec<AssignmentId>>,
    pub fail_holidays: bool,
    pub fail_select: bool,
    pub fail_insert_on_call: Option<usize>,
    pub fail_update: bool,
    pub fail_employees: bool,
    /// Inserts report success but store nothing.
    pub discard_inserts: bool,
    pub reverse_select_results: bool,
}

impl FakeBackend {
    /// A backend knowing one shift and two employees, all at `CENTER`.
    pub fn with_shift(pattern: ShiftPattern) -> Self {
        Self {
            shifts: vec![pattern],
            employees: vec![
                create_test_employee(EMPLOYEE, CENTER),
                create_test_employee(COWORKER, CENTER),
            ],
            ..Self::default()
        }
    }

    pub fn add_holiday(&mut self, date: Date, label: &str) {
        self.holidays.push(Holiday::new(
            date,
            String::from(label),
            HolidayScope::Center(CENTER),
        ));
    }

    /// Seeds a persisted row directly, bypassing call accounting.
    pub fn seed(&mut self, employee_id: EmployeeId, shift_id: ShiftId, date: Date) -> AssignmentId {
        self.next_id += 1;
        let id: AssignmentId = AssignmentId::new(self.next_id);
        let mut row: Assignment = Assignment::new(employee_id, shift_id, CENTER, date);
        row.assignment_id = Some(id);
        self.rows.push(row);
        id
    }

    pub fn row(&self, id: AssignmentId) -> Option<&Assignment> {
        self.rows.iter().find(|row| row.assignment_id == Some(id))
    }

    pub fn has_duplicate_keys(&self) -> bool {
        let mut keys: HashSet<AssignmentKey> = HashSet::new();
        !self.rows.iter().all(|row| keys.insert(row.key()))
    }
}

impl HolidayOracle for FakeBackend {
    fn holidays_between(
        &mut self,
        center_id: CenterId,
        start: Date,
        end: Date,
    ) -> Result<Vec<Holiday>, CollaboratorError> {
        self.holiday_calls += 1;
        if self.fail_holidays {
            return Err(CollaboratorError::new("holiday service unreachable"));
        }
        Ok(self
            .holidays
            .iter()
            .filter(|h| h.date >= start && h.date <= end)
            .filter(|h| match &h.scope {
                HolidayScope::Global => true,
                HolidayScope::Center(id) => *id == center_id,
                HolidayScope::Regional(_) => false,
            })
            .cloned()
            .collect())
    }
}

impl ShiftDirectory for FakeBackend {
    fn shifts_by_ids(&mut self, ids: &[ShiftId]) -> Result<Vec<ShiftPattern>, CollaboratorError> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| ids.contains(&s.shift_id))
            .cloned()
            .collect())
    }
}

impl EmployeeDirectory for FakeBackend {
    fn employees_by_ids(&mut self, ids: &[EmployeeId]) -> Result<Vec<Employee>, CollaboratorError> {
        if self.fail_employees {
            return Err(CollaboratorError::new("staff directory offline"));
        }
        Ok(self
            .employees
            .iter()
            .filter(|e| ids.contains(&e.employee_id))
            .cloned()
            .collect())
    }
}

impl AssignmentStore for FakeBackend {
    fn select_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, CollaboratorError> {
        self.select_calls += 1;
        if self.fail_select {
            return Err(CollaboratorError::new("select timed out"));
        }
        let mut rows: Vec<Assignment> = self
            .rows
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        if self.reverse_select_results {
            rows.reverse();
        }
        Ok(rows)
    }

    fn insert_assignments(&mut self, rows: &[Assignment]) -> Result<usize, CollaboratorError> {
        let call: usize = self.insert_calls.len();
        self.insert_calls.push(rows.len());
        if self.fail_insert_on_call == Some(call) {
            return Err(CollaboratorError::new("payload rejected"));
        }
        let existing: HashSet<AssignmentKey> = self.rows.iter().map(Assignment::key).collect();
        if rows.iter().any(|row| existing.contains(&row.key())) {
            return Err(CollaboratorError::new("UNIQUE constraint failed"));
        }
        if self.discard_inserts {
            return Ok(rows.len());
        }
        for row in rows {
            self.next_id += 1;
            let mut stored: Assignment = row.clone();
            stored.assignment_id = Some(AssignmentId::new(self.next_id));
            self.rows.push(stored);
        }
        Ok(rows.len())
    }

    fn update_assignment_date(
        &mut self,
        assignment_id: AssignmentId,
        date: Date,
    ) -> Result<Assignment, CollaboratorError> {
        self.update_calls += 1;
        if self.fail_update {
            return Err(CollaboratorError::new("update rejected"));
        }
        let row: &mut Assignment = self
            .rows
            .iter_mut()
            .find(|row| row.assignment_id == Some(assignment_id))
            .ok_or_else(|| CollaboratorError::new("not found"))?;
        row.date = date;
        Ok(row.clone())
    }

    fn delete_assignments(&mut self, ids: &[AssignmentId]) -> Result<usize, CollaboratorError> {
        self.delete_calls.push(ids.to_vec());
        let before: usize = self.rows.len();
        self.rows
            .retain(|row| row.assignment_id.is_none_or(|id| !ids.contains(&id)));
        Ok(before - self.rows.len())
    }
}

pub fn create_test_employee(employee_id: EmployeeId, center_id: CenterId) -> Employee {
    Employee {
        employee_id,
        center_id,
        name: format!("Employee {employee_id}"),
    }
}

pub fn create_test_pattern(weekdays: WeekdayFlags) -> ShiftPattern {
    ShiftPattern {
        shift_id: SHIFT,
        center_id: CENTER,
        name: String::from("Morning floor"),
        start_time: time!(06:00),
        end_time: time!(14:00),
        weekdays,
        min_staff: 1,
        max_staff: 3,
        status: PatternStatus::Published,
    }
}

pub fn mon_wed_fri() -> WeekdayFlags {
    WeekdayFlags::from_weekdays(&[Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
}

pub fn every_day() -> WeekdayFlags {
    WeekdayFlags::from_array([true; 7])
}

pub fn create_test_request(start_date: Date, end_date: Date) -> BulkAssignmentRequest {
    BulkAssignmentRequest::new(EMPLOYEE, SHIFT, CENTER, start_date, end_date)
}
