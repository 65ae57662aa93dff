// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;

/// Maximum dates per existence query.
pub const DEFAULT_DUPLICATE_CHECK_BATCH_SIZE: usize = 200;

/// Maximum rows per insert call.
pub const DEFAULT_INSERT_CHUNK_SIZE: usize = 50;

/// Tunables passed to the scheduler on every call.
///
/// The caller owns the configuration; the scheduler reads it and keeps
/// nothing between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Dates per duplicate-check query, per (employee, shift) group.
    pub duplicate_check_batch_size: usize,
    /// Rows per insert call during commit.
    pub insert_chunk_size: usize,
}

impl SchedulerConfig {
    /// Creates a configuration with explicit batch sizes.
    #[must_use]
    pub const fn new(duplicate_check_batch_size: usize, insert_chunk_size: usize) -> Self {
        Self {
            duplicate_check_batch_size,
            insert_chunk_size,
        }
    }

    /// Validates that both batch sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if either size is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.duplicate_check_batch_size == 0 {
            return Err(CoreError::InvalidConfig(String::from(
                "duplicate_check_batch_size must be greater than 0",
            )));
        }
        if self.insert_chunk_size == 0 {
            return Err(CoreError::InvalidConfig(String::from(
                "insert_chunk_size must be greater than 0",
            )));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_DUPLICATE_CHECK_BATCH_SIZE,
            DEFAULT_INSERT_CHUNK_SIZE,
        )
    }
}
