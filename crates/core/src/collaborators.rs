// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interfaces to the systems the scheduler reads from and writes to.
//!
//! The scheduler never implements these; it receives them per call and
//! holds no state between calls. Every method is a single request/response
//! round trip from the scheduler's point of view.

use gymshift_domain::{
    Assignment, AssignmentId, CenterId, Employee, EmployeeId, Holiday, ShiftId, ShiftPattern,
};
use time::Date;

/// An opaque failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorError {
    message: String,
}

impl CollaboratorError {
    /// Creates a new collaborator error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CollaboratorError {}

/// Answers blackout-date questions for a center.
pub trait HolidayOracle {
    /// Returns every holiday that applies to `center_id` between `start`
    /// and `end` inclusive, in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if the holiday source cannot be queried.
    fn holidays_between(
        &mut self,
        center_id: CenterId,
        start: Date,
        end: Date,
    ) -> Result<Vec<Holiday>, CollaboratorError>;

    /// Returns the holiday applying to `center_id` on `date`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the holiday source cannot be queried.
    fn holiday_on(
        &mut self,
        center_id: CenterId,
        date: Date,
    ) -> Result<Option<Holiday>, CollaboratorError> {
        Ok(self
            .holidays_between(center_id, date, date)?
            .into_iter()
            .find(|holiday| holiday.date == date))
    }
}

/// Resolves shift patterns by ID.
pub trait ShiftDirectory {
    /// Returns the patterns for the requested IDs. Unknown IDs are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be queried.
    fn shifts_by_ids(&mut self, ids: &[ShiftId]) -> Result<Vec<ShiftPattern>, CollaboratorError>;
}

/// Resolves employees by ID.
pub trait EmployeeDirectory {
    /// Returns the employees for the requested IDs. Unknown IDs are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be queried.
    fn employees_by_ids(&mut self, ids: &[EmployeeId]) -> Result<Vec<Employee>, CollaboratorError>;
}

/// Selection criteria for assignment rows. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    /// Restrict to these assignment IDs.
    pub ids: Option<Vec<AssignmentId>>,
    /// Restrict to one center.
    pub center_id: Option<CenterId>,
    /// Restrict to one employee.
    pub employee_id: Option<EmployeeId>,
    /// Restrict to one shift.
    pub shift_id: Option<ShiftId>,
    /// Restrict to these exact dates.
    pub dates: Option<Vec<Date>>,
    /// Earliest date (inclusive).
    pub from: Option<Date>,
    /// Latest date (inclusive).
    pub to: Option<Date>,
}

impl AssignmentFilter {
    /// Rows for one employee on one shift, on any of `dates`.
    #[must_use]
    pub fn for_slot_dates(employee_id: EmployeeId, shift_id: ShiftId, dates: Vec<Date>) -> Self {
        Self {
            employee_id: Some(employee_id),
            shift_id: Some(shift_id),
            dates: Some(dates),
            ..Self::default()
        }
    }

    /// Rows for a center over a date window.
    #[must_use]
    pub fn for_window(center_id: CenterId, from: Date, to: Date) -> Self {
        Self {
            center_id: Some(center_id),
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    /// Rows with the given IDs.
    #[must_use]
    pub fn by_ids(ids: Vec<AssignmentId>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    /// Returns whether an assignment satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, assignment: &Assignment) -> bool {
        let id_matches: bool = self.ids.as_ref().is_none_or(|ids| {
            assignment
                .assignment_id
                .is_some_and(|id| ids.contains(&id))
        });
        id_matches
            && self.center_id.is_none_or(|c| c == assignment.center_id)
            && self.employee_id.is_none_or(|e| e == assignment.employee_id)
            && self.shift_id.is_none_or(|s| s == assignment.shift_id)
            && self
                .dates
                .as_ref()
                .is_none_or(|dates| dates.contains(&assignment.date))
            && self.from.is_none_or(|from| assignment.date >= from)
            && self.to.is_none_or(|to| assignment.date <= to)
    }
}

/// Generic tabular store for assignment rows.
///
/// The store offers no multi-row transaction across calls. Each call is
/// atomic on its own.
pub trait AssignmentStore {
    /// Returns the rows matching `filter`, in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn select_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, CollaboratorError>;

    /// Inserts `rows` atomically and returns the number inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if any row is rejected; nothing from this call is kept.
    fn insert_assignments(&mut self, rows: &[Assignment]) -> Result<usize, CollaboratorError>;

    /// Changes the date of an existing row and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected; the row is left unchanged.
    fn update_assignment_date(
        &mut self,
        assignment_id: AssignmentId,
        date: Date,
    ) -> Result<Assignment, CollaboratorError>;

    /// Deletes the rows with the given IDs and returns the number deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete is rejected.
    fn delete_assignments(&mut self, ids: &[AssignmentId]) -> Result<usize, CollaboratorError>;
}
