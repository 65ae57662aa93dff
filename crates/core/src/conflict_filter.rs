// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Removal of candidates that already exist in the store.
//!
//! Existence checks are grouped by (employee, shift) and split into batches
//! of at most `batch_size` dates, so a year-long daily pattern never produces
//! an oversized query. Results from every batch are unioned before any
//! candidate is dropped; the order of rows returned by the store is
//! irrelevant.
//!
//! The filter only reads.

use crate::collaborators::{AssignmentFilter, AssignmentStore};
use crate::error::CoreError;
use gymshift_domain::{Assignment, AssignmentKey, EmployeeId, ShiftId};
use std::collections::{BTreeMap, HashSet};
use time::Date;
use tracing::debug;

/// Candidates that survived duplicate filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredCandidates {
    /// Candidates not yet persisted, in input order.
    pub survivors: Vec<Assignment>,
    /// Candidates dropped because the key already exists in the store or
    /// appeared earlier in the same input.
    pub skipped_duplicate: usize,
    /// Number of existence queries issued.
    pub queries_issued: usize,
}

/// Removes candidates whose (employee, shift, date) already exists.
///
/// # Arguments
///
/// * `store` - The assignment store to check against
/// * `candidates` - Candidate assignments, in the order they should be committed
/// * `batch_size` - Maximum dates per existence query
///
/// # Errors
///
/// Returns `CoreError::StoreFailure` if any existence query fails. No
/// partial result is returned in that case.
pub fn filter_duplicates<S>(
    store: &mut S,
    candidates: Vec<Assignment>,
    batch_size: usize,
) -> Result<FilteredCandidates, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    if candidates.is_empty() {
        return Ok(FilteredCandidates::default());
    }
    let batch_size: usize = batch_size.max(1);

    let mut seen: HashSet<AssignmentKey> = HashSet::with_capacity(candidates.len());
    let mut unique: Vec<Assignment> = Vec::with_capacity(candidates.len());
    let mut skipped_duplicate: usize = 0;
    for candidate in candidates {
        if seen.insert(candidate.key()) {
            unique.push(candidate);
        } else {
            skipped_duplicate += 1;
        }
    }

    let mut groups: BTreeMap<(EmployeeId, ShiftId), Vec<Date>> = BTreeMap::new();
    for candidate in &unique {
        groups
            .entry((candidate.employee_id, candidate.shift_id))
            .or_default()
            .push(candidate.date);
    }

    let mut existing: HashSet<AssignmentKey> = HashSet::new();
    let mut queries_issued: usize = 0;
    for ((employee_id, shift_id), dates) in groups {
        for batch in dates.chunks(batch_size) {
            let filter: AssignmentFilter =
                AssignmentFilter::for_slot_dates(employee_id, shift_id, batch.to_vec());
            let rows: Vec<Assignment> = store
                .select_assignments(&filter)
                .map_err(CoreError::StoreFailure)?;
            queries_issued += 1;
            debug!(
                employee_id = employee_id.value(),
                shift_id = shift_id.value(),
                batch_len = batch.len(),
                found = rows.len(),
                "Duplicate check batch"
            );
            existing.extend(rows.iter().map(Assignment::key));
        }
    }

    let before: usize = unique.len();
    let survivors: Vec<Assignment> = unique
        .into_iter()
        .filter(|candidate| !existing.contains(&candidate.key()))
        .collect();
    skipped_duplicate += before - survivors.len();

    Ok(FilteredCandidates {
        survivors,
        skipped_duplicate,
        queries_issued,
    })
}
