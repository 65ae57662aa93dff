// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift-assignment scheduler.
//!
//! Turns recurring weekly shift patterns into dated assignments while
//! honoring holiday blackouts and never duplicating an existing
//! (employee, shift, date). The scheduler owns no state: collaborators and
//! configuration are passed in on every call.

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

mod bulk;
mod collaborators;
mod committer;
mod config;
mod conflict_filter;
mod error;
mod single_slot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use bulk::{BulkAssignOutcome, bulk_assign, bulk_assign_many};
pub use collaborators::{
    AssignmentFilter, AssignmentStore, CollaboratorError, EmployeeDirectory, HolidayOracle,
    ShiftDirectory,
};
pub use committer::{CommitReport, commit_in_chunks};
pub use config::{DEFAULT_DUPLICATE_CHECK_BATCH_SIZE, DEFAULT_INSERT_CHUNK_SIZE, SchedulerConfig};
pub use conflict_filter::{FilteredCandidates, filter_duplicates};
pub use error::CoreError;
pub use single_slot::{
    MoveOutcome, delete_assignments, list_assignments, move_assignment, quick_assign,
};
