// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the gym shift scheduler.
//!
//! This crate stores centers, employees, shift patterns, holidays and
//! assignments in `SQLite` through Diesel, and implements the scheduler's
//! collaborator traits (`HolidayOracle`, `ShiftDirectory`,
//! `AssignmentStore`) on top of that store.
//!
//! ## Database
//!
//! - Migrations are embedded and applied when a connection is opened
//! - Foreign key enforcement is switched on and verified at startup
//! - File databases run in WAL mode
//! - Each in-memory database is isolated, so tests never share state
//! - Dates are stored as `YYYY-MM-DD` text and times as `HH:MM` text
//!
//! ## Uniqueness
//!
//! A unique index on (employee, shift, date) backs the scheduler's
//! duplicate filter. Two bulk runs racing on the same slots cannot both
//! insert; the loser sees its chunk fail.

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

use backend::sqlite::Storage;
use diesel::SqliteConnection;
use gymshift_domain::{
    Center, CenterId, Employee, EmployeeId, Holiday, PatternStatus, ShiftId, ShiftPattern,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Suffix for in-memory database names; keeps test adapters apart.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the scheduler's reference data and assignments.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Opens a fresh in-memory store with the schema applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be applied.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_gymshift_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::open(Storage::Memory(&shared_memory_url))?;

        Ok(Self { conn })
    }

    /// Opens (or creates) a store backed by a database file, in WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not UTF-8, the file cannot be
    /// opened, or the schema cannot be applied.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(format!(
                "database path {} is not valid UTF-8",
                path.as_ref().display()
            ))
        })?;

        let conn: SqliteConnection = backend::sqlite::open(Storage::File(path_str))?;

        Ok(Self { conn })
    }

    /// Re-checks that the connection still enforces foreign keys.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` if it does not.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::require_foreign_keys(&mut self.conn)
    }

    // ========================================================================
    // Centers & Employees
    // ========================================================================

    /// Creates a center.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `region` - Optional region code; regional holidays for this code
    ///   black out the center
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_center(
        &mut self,
        name: &str,
        region: Option<&str>,
    ) -> Result<Center, PersistenceError> {
        let center_id: i64 = mutations::catalog::create_center(&mut self.conn, name, region)?;
        Ok(Center::new(
            CenterId::new(center_id),
            name.to_string(),
            region.map(str::to_string),
        ))
    }

    /// Retrieves a center by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the center
    /// does not exist.
    pub fn get_center(&mut self, center_id: CenterId) -> Result<Option<Center>, PersistenceError> {
        queries::catalog::get_center(&mut self.conn, center_id)
    }

    /// Creates an employee attached to a center.
    ///
    /// # Errors
    ///
    /// Returns an error if the center does not exist or the insert fails.
    pub fn create_employee(
        &mut self,
        center_id: CenterId,
        name: &str,
    ) -> Result<Employee, PersistenceError> {
        let employee_id: i64 = mutations::catalog::create_employee(&mut self.conn, center_id, name)?;
        Ok(Employee {
            employee_id: EmployeeId::new(employee_id),
            center_id,
            name: name.to_string(),
        })
    }

    /// Retrieves an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::catalog::get_employee(&mut self.conn, employee_id)
    }

    /// Lists a center's employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self, center_id: CenterId) -> Result<Vec<Employee>, PersistenceError> {
        queries::catalog::list_employees(&mut self.conn, center_id)
    }

    // ========================================================================
    // Shift Patterns
    // ========================================================================

    /// Creates a shift pattern and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the center does not exist or the insert fails.
    pub fn create_shift_pattern(
        &mut self,
        pattern: &ShiftPattern,
    ) -> Result<ShiftPattern, PersistenceError> {
        let shift_id: i64 = mutations::catalog::create_shift_pattern(&mut self.conn, pattern)?;
        let mut created: ShiftPattern = pattern.clone();
        created.shift_id = ShiftId::new(shift_id);
        Ok(created)
    }

    /// Retrieves a shift pattern by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded.
    pub fn get_shift_pattern(
        &mut self,
        shift_id: ShiftId,
    ) -> Result<Option<ShiftPattern>, PersistenceError> {
        Ok(queries::catalog::get_shift_patterns(&mut self.conn, &[shift_id])?
            .into_iter()
            .next())
    }

    /// Lists a center's shift patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_shift_patterns(
        &mut self,
        center_id: CenterId,
    ) -> Result<Vec<ShiftPattern>, PersistenceError> {
        queries::catalog::list_shift_patterns(&mut self.conn, center_id)
    }

    /// Stores a new lifecycle status for a shift pattern.
    ///
    /// Transition rules are not checked here.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ShiftNotFound` if the pattern does not exist.
    pub fn update_shift_status(
        &mut self,
        shift_id: ShiftId,
        status: PatternStatus,
    ) -> Result<(), PersistenceError> {
        mutations::catalog::update_shift_status(&mut self.conn, shift_id, status)
    }

    // ========================================================================
    // Holidays
    // ========================================================================

    /// Stores a holiday.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_holiday(&mut self, holiday: &Holiday) -> Result<i64, PersistenceError> {
        mutations::holidays::add_holiday(&mut self.conn, holiday)
    }

    /// Lists the holidays that black out a center over a date range.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CenterNotFound` if the center does not
    /// exist, or an error if the query fails.
    pub fn list_holidays_for_center(
        &mut self,
        center_id: CenterId,
        start: Date,
        end: Date,
    ) -> Result<Vec<Holiday>, PersistenceError> {
        let center: Center = self
            .get_center(center_id)?
            .ok_or(PersistenceError::CenterNotFound(center_id.value()))?;
        queries::holidays::list_holidays_for_center(&mut self.conn, &center, start, end)
    }
}
