// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk expansion of shift patterns into persisted assignments.
//!
//! ## Pipeline
//!
//! 1. Validate configuration and every request (no I/O yet)
//! 2. Resolve the shift patterns and employees named by the requests
//! 3. Fetch holidays once per center for the covered range
//! 4. Expand each request and drop blackout dates
//! 5. Drop candidates that already exist
//! 6. Insert the remainder in chunks
//!
//! Any failure in steps 1 through 5 is returned as an error and nothing has
//! been written. An unknown employee, or one from another center, is
//! caught in step 2. A failure in step 6 is carried inside the outcome together
//! with the number of rows already inserted; those rows are not rolled back.
//!
//! Re-running the same requests is safe: rows committed by an earlier run are
//! filtered as duplicates.

use crate::collaborators::{AssignmentStore, EmployeeDirectory, HolidayOracle, ShiftDirectory};
use crate::committer::{CommitReport, commit_in_chunks};
use crate::config::SchedulerConfig;
use crate::conflict_filter::{FilteredCandidates, filter_duplicates};
use crate::error::CoreError;
use gymshift_domain::{
    Assignment, BulkAssignmentRequest, CenterId, DomainError, Employee, EmployeeId,
    HolidayCalendar, PrunedDates, ShiftId, ShiftPattern, expand_pattern, validate_bulk_request,
    validate_employee_at_center, validate_shift_assignable,
};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;
use tracing::{info, warn};

/// Result of a bulk assignment run.
///
/// Holiday and duplicate skips are informational, not failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkAssignOutcome {
    /// Dates produced by expansion before holiday pruning.
    pub candidate_count: usize,
    /// Rows actually inserted.
    pub inserted_count: usize,
    /// Candidates dropped because the date is a holiday.
    pub skipped_holiday: usize,
    /// Candidates dropped because the assignment already exists.
    pub skipped_duplicate: usize,
    /// Zero-based index of the insert chunk that failed, if any.
    pub failed_at_chunk: Option<usize>,
    /// The failure that stopped the commit, if any.
    pub error: Option<CoreError>,
}

impl BulkAssignOutcome {
    /// Returns whether every surviving candidate was inserted.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable summary with every skip category spelled out.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary: String = format!(
            "{} assignments created; {} dates skipped: holiday; {} dates skipped: already assigned",
            self.inserted_count, self.skipped_holiday, self.skipped_duplicate
        );
        if let Some(err) = &self.error {
            summary.push_str(&format!("; stopped with error: {err}"));
        }
        summary
    }
}

/// Expands and commits a single bulk request.
///
/// # Errors
///
/// See `bulk_assign_many`.
pub fn bulk_assign<B>(
    backend: &mut B,
    config: &SchedulerConfig,
    request: &BulkAssignmentRequest,
) -> Result<BulkAssignOutcome, CoreError>
where
    B: HolidayOracle + ShiftDirectory + EmployeeDirectory + AssignmentStore + ?Sized,
{
    bulk_assign_many(backend, config, std::slice::from_ref(request))
}

/// Expands and commits several bulk requests as one operation.
///
/// Candidates from every request are pooled, filtered for duplicates
/// together and committed in one chunk sequence.
///
/// # Arguments
///
/// * `backend` - Holiday oracle, shift and employee directories, assignment store
/// * `config` - Batch sizes for duplicate checks and inserts
/// * `requests` - One request per employee (or per employee/shift pair)
///
/// # Errors
///
/// Returns an error, with nothing written, if:
/// - The configuration is invalid or `requests` is empty
/// - Any request has an inverted date range
/// - A shift does not exist, is archived, or belongs to another center
/// - An employee does not exist or works at another center
/// - A directory lookup, the holiday oracle or a duplicate check fails
pub fn bulk_assign_many<B>(
    backend: &mut B,
    config: &SchedulerConfig,
    requests: &[BulkAssignmentRequest],
) -> Result<BulkAssignOutcome, CoreError>
where
    B: HolidayOracle + ShiftDirectory + EmployeeDirectory + AssignmentStore + ?Sized,
{
    config.validate()?;
    if requests.is_empty() {
        return Err(DomainError::NoEmployeesSelected.into());
    }
    for request in requests {
        validate_bulk_request(request)?;
    }

    let patterns: BTreeMap<ShiftId, ShiftPattern> = resolve_patterns(backend, requests)?;
    for request in requests {
        let pattern: &ShiftPattern = patterns
            .get(&request.shift_id)
            .ok_or(CoreError::ShiftNotFound(request.shift_id))?;
        validate_shift_assignable(pattern, request.center_id)?;
    }

    let employees: BTreeMap<EmployeeId, Employee> = resolve_employees(backend, requests)?;
    for request in requests {
        let employee: &Employee = employees
            .get(&request.employee_id)
            .ok_or(CoreError::EmployeeNotFound(request.employee_id))?;
        validate_employee_at_center(employee, request.center_id)?;
    }

    let calendars: BTreeMap<CenterId, HolidayCalendar> = load_calendars(backend, requests)?;

    let mut outcome: BulkAssignOutcome = BulkAssignOutcome::default();
    let mut candidates: Vec<Assignment> = Vec::new();
    for request in requests {
        let pattern: &ShiftPattern = patterns
            .get(&request.shift_id)
            .ok_or(CoreError::ShiftNotFound(request.shift_id))?;
        let dates: Vec<Date> = expand_pattern(request, pattern);
        outcome.candidate_count += dates.len();

        let pruned: PrunedDates = match calendars.get(&request.center_id) {
            Some(calendar) => calendar.prune(dates),
            None => PrunedDates {
                kept: dates,
                skipped: Vec::new(),
            },
        };
        outcome.skipped_holiday += pruned.skipped.len();

        candidates.extend(pruned.kept.into_iter().map(|date| {
            Assignment::new(
                request.employee_id,
                request.shift_id,
                request.center_id,
                date,
            )
        }));
    }

    let filtered: FilteredCandidates =
        filter_duplicates(backend, candidates, config.duplicate_check_batch_size)?;
    outcome.skipped_duplicate = filtered.skipped_duplicate;

    let report: CommitReport =
        commit_in_chunks(backend, &filtered.survivors, config.insert_chunk_size);
    outcome.inserted_count = report.inserted_count;
    outcome.failed_at_chunk = report.failed_at_chunk;
    outcome.error = report.error;

    if outcome.is_complete() {
        info!(
            requests = requests.len(),
            candidates = outcome.candidate_count,
            inserted = outcome.inserted_count,
            skipped_holiday = outcome.skipped_holiday,
            skipped_duplicate = outcome.skipped_duplicate,
            "Bulk assignment committed"
        );
    } else {
        warn!(
            requests = requests.len(),
            inserted = outcome.inserted_count,
            failed_at_chunk = ?outcome.failed_at_chunk,
            "Bulk assignment partially committed"
        );
    }

    Ok(outcome)
}

fn resolve_patterns<B>(
    backend: &mut B,
    requests: &[BulkAssignmentRequest],
) -> Result<BTreeMap<ShiftId, ShiftPattern>, CoreError>
where
    B: ShiftDirectory + ?Sized,
{
    let ids: Vec<ShiftId> = requests
        .iter()
        .map(|request| request.shift_id)
        .collect::<BTreeSet<ShiftId>>()
        .into_iter()
        .collect();

    let patterns: Vec<ShiftPattern> = backend
        .shifts_by_ids(&ids)
        .map_err(CoreError::ShiftLookupFailed)?;

    Ok(patterns
        .into_iter()
        .map(|pattern| (pattern.shift_id, pattern))
        .collect())
}

fn resolve_employees<B>(
    backend: &mut B,
    requests: &[BulkAssignmentRequest],
) -> Result<BTreeMap<EmployeeId, Employee>, CoreError>
where
    B: EmployeeDirectory + ?Sized,
{
    let ids: Vec<EmployeeId> = requests
        .iter()
        .map(|request| request.employee_id)
        .collect::<BTreeSet<EmployeeId>>()
        .into_iter()
        .collect();

    let employees: Vec<Employee> = backend
        .employees_by_ids(&ids)
        .map_err(CoreError::EmployeeLookupFailed)?;

    Ok(employees
        .into_iter()
        .map(|employee| (employee.employee_id, employee))
        .collect())
}

/// Fetches one calendar per center covering every request for that center.
///
/// A failing oracle fails the whole operation: assigning into a date whose
/// holiday status is unknown could break the blackout invariant.
fn load_calendars<B>(
    backend: &mut B,
    requests: &[BulkAssignmentRequest],
) -> Result<BTreeMap<CenterId, HolidayCalendar>, CoreError>
where
    B: HolidayOracle + ?Sized,
{
    let mut ranges: BTreeMap<CenterId, (Date, Date)> = BTreeMap::new();
    for request in requests {
        ranges
            .entry(request.center_id)
            .and_modify(|(start, end)| {
                *start = (*start).min(request.start_date);
                *end = (*end).max(request.end_date);
            })
            .or_insert((request.start_date, request.end_date));
    }

    let mut calendars: BTreeMap<CenterId, HolidayCalendar> = BTreeMap::new();
    for (center_id, (start, end)) in ranges {
        let holidays = backend
            .holidays_between(center_id, start, end)
            .map_err(CoreError::HolidayLookupFailed)?;
        calendars.insert(center_id, HolidayCalendar::from_holidays(holidays));
    }
    Ok(calendars)
}
