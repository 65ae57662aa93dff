// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chunked insertion with partial-success reporting.
//!
//! ## Invariants
//!
//! - Chunks are inserted sequentially, never concurrently
//! - The first failing chunk stops the commit; later chunks are not attempted
//! - Rows from chunks that succeeded before the failure stay committed
//! - The report always carries the count inserted so far

use crate::collaborators::AssignmentStore;
use crate::error::CoreError;
use gymshift_domain::Assignment;
use tracing::{debug, warn};

/// Result of a chunked commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Rows inserted across all successful chunks.
    pub inserted_count: usize,
    /// Number of insert calls that succeeded.
    pub chunks_committed: usize,
    /// Zero-based index of the chunk that failed, if any.
    pub failed_at_chunk: Option<usize>,
    /// The failure that stopped the commit, if any.
    pub error: Option<CoreError>,
}

impl CommitReport {
    /// Returns whether every chunk was committed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Inserts `rows` in chunks of `chunk_size`.
///
/// # Arguments
///
/// * `store` - The assignment store to write to
/// * `rows` - Rows to insert, already filtered for duplicates
/// * `chunk_size` - Maximum rows per insert call
#[must_use]
pub fn commit_in_chunks<S>(store: &mut S, rows: &[Assignment], chunk_size: usize) -> CommitReport
where
    S: AssignmentStore + ?Sized,
{
    let mut report: CommitReport = CommitReport::default();

    for (index, chunk) in rows.chunks(chunk_size.max(1)).enumerate() {
        match store.insert_assignments(chunk) {
            Ok(inserted) => {
                report.inserted_count += inserted;
                report.chunks_committed += 1;
                debug!(
                    chunk = index,
                    rows = chunk.len(),
                    inserted = inserted,
                    "Committed assignment chunk"
                );
            }
            Err(err) => {
                warn!(
                    chunk = index,
                    inserted_so_far = report.inserted_count,
                    error = %err,
                    "Assignment chunk failed; aborting remaining chunks"
                );
                report.failed_at_chunk = Some(index);
                report.error = Some(CoreError::StoreFailure(err));
                break;
            }
        }
    }

    report
}
