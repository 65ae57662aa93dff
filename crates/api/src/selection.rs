// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side selection of assignments for bulk delete.

use crate::error::{ApiError, translate_core_error};
use crate::request_response::DeleteAssignmentsResponse;
use gymshift::AssignmentStore;
use gymshift_domain::AssignmentId;
use std::collections::BTreeSet;

/// A set of assignment IDs picked on the calendar.
///
/// Selecting an ID twice has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSelection {
    ids: BTreeSet<AssignmentId>,
}

impl AssignmentSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Adds an assignment. Returns false if it was already selected.
    pub fn select(&mut self, id: AssignmentId) -> bool {
        self.ids.insert(id)
    }

    /// Removes an assignment. Returns false if it was not selected.
    pub fn deselect(&mut self, id: AssignmentId) -> bool {
        self.ids.remove(&id)
    }

    /// Flips an assignment in or out of the selection.
    ///
    /// Returns whether the assignment is selected afterwards.
    pub fn toggle(&mut self, id: AssignmentId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Returns whether the assignment is selected.
    #[must_use]
    pub fn contains(&self, id: AssignmentId) -> bool {
        self.ids.contains(&id)
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the selected IDs in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<AssignmentId> {
        self.ids.iter().copied().collect()
    }
}

impl FromIterator<AssignmentId> for AssignmentSelection {
    fn from_iter<I: IntoIterator<Item = AssignmentId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Deletes every selected assignment in one request.
///
/// The selection is cleared once the call returns, whether the delete
/// succeeded or not. An empty selection is rejected and left as is.
///
/// # Errors
///
/// Returns an error if the selection is empty or the store rejects the delete.
pub fn delete_selected<S>(
    store: &mut S,
    selection: &mut AssignmentSelection,
) -> Result<DeleteAssignmentsResponse, ApiError>
where
    S: AssignmentStore + ?Sized,
{
    let ids: Vec<AssignmentId> = selection.ids();
    let result: Result<usize, ApiError> =
        gymshift::delete_assignments(store, &ids).map_err(translate_core_error);
    if !ids.is_empty() {
        selection.clear();
    }

    let deleted: usize = result?;
    Ok(DeleteAssignmentsResponse {
        requested: ids.len(),
        deleted,
        message: format!("Deleted {deleted} of {} selected assignments", ids.len()),
    })
}
