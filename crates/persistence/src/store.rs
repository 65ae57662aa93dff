// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduler collaborator implementations backed by `SQLite`.
//!
//! Every `PersistenceError` crossing this boundary is flattened into a
//! `CollaboratorError` carrying its message.

use gymshift::{
    AssignmentFilter, AssignmentStore, CollaboratorError, EmployeeDirectory, HolidayOracle,
    ShiftDirectory,
};
use gymshift_domain::{
    Assignment, AssignmentId, CenterId, Employee, EmployeeId, Holiday, ShiftId, ShiftPattern,
};
use time::Date;

use crate::error::PersistenceError;
use crate::{Persistence, mutations, queries};

impl HolidayOracle for Persistence {
    fn holidays_between(
        &mut self,
        center_id: CenterId,
        start: Date,
        end: Date,
    ) -> Result<Vec<Holiday>, CollaboratorError> {
        Ok(self.list_holidays_for_center(center_id, start, end)?)
    }
}

impl ShiftDirectory for Persistence {
    fn shifts_by_ids(&mut self, ids: &[ShiftId]) -> Result<Vec<ShiftPattern>, CollaboratorError> {
        Ok(queries::catalog::get_shift_patterns(&mut self.conn, ids)?)
    }
}

impl EmployeeDirectory for Persistence {
    fn employees_by_ids(&mut self, ids: &[EmployeeId]) -> Result<Vec<Employee>, CollaboratorError> {
        Ok(queries::catalog::get_employees(&mut self.conn, ids)?)
    }
}

impl AssignmentStore for Persistence {
    fn select_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, CollaboratorError> {
        Ok(queries::assignments::select_assignments(&mut self.conn, filter)?)
    }

    fn insert_assignments(&mut self, rows: &[Assignment]) -> Result<usize, CollaboratorError> {
        Ok(mutations::assignments::insert_assignments(&mut self.conn, rows)?)
    }

    fn update_assignment_date(
        &mut self,
        assignment_id: AssignmentId,
        date: Date,
    ) -> Result<Assignment, CollaboratorError> {
        mutations::assignments::update_assignment_date(&mut self.conn, assignment_id, date)?;
        let updated: Assignment = queries::assignments::get_assignment(&mut self.conn, assignment_id)?
            .ok_or(PersistenceError::AssignmentNotFound(assignment_id.value()))?;
        Ok(updated)
    }

    fn delete_assignments(&mut self, ids: &[AssignmentId]) -> Result<usize, CollaboratorError> {
        Ok(mutations::assignments::delete_assignments(&mut self.conn, ids)?)
    }
}
