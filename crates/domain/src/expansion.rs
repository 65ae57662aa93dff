// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expansion of a weekly shift pattern into calendar dates.
//!
//! ## Inclusion Rules
//!
//! For each date in the inclusive range, in ascending order:
//!
//! 1. A manual day selection with at least one day set decides inclusion on
//!    its own; the pattern's weekday flags are ignored.
//! 2. Otherwise the pattern's weekday flag for that day decides.
//! 3. Weekend exclusion drops Saturdays and Sundays regardless of 1 and 2.
//! 4. Explicitly excluded dates are dropped regardless of all of the above.
//!
//! ## Invariants
//!
//! - Output is strictly ascending, at most one entry per day
//! - Expansion is pure; the same inputs always yield the same dates
//! - An empty day selection yields no dates rather than an error
//! - `start_date <= end_date` is the caller's responsibility; an inverted
//!   range simply yields nothing

use crate::dates::{days_inclusive, is_weekend};
use crate::request::BulkAssignmentRequest;
use crate::types::{ShiftPattern, WeekdayFlags};
use time::Date;

/// Expands a bulk request against its shift pattern into candidate dates.
///
/// Holidays are not considered here; see `HolidayCalendar::prune`.
///
/// # Arguments
///
/// * `request` - The bulk request (range, exclusions, manual selection)
/// * `pattern` - The shift pattern supplying default weekday flags
///
/// # Example
///
/// ```text
/// pattern weekdays = Mon, Wed, Fri
/// range            = 2026-01-01 (Thu) .. 2026-01-14 (Wed)
///
/// candidates = 2026-01-02, 2026-01-05, 2026-01-07, 2026-01-09,
///              2026-01-12, 2026-01-14
/// ```
#[must_use]
pub fn expand_pattern(request: &BulkAssignmentRequest, pattern: &ShiftPattern) -> Vec<Date> {
    let selection: WeekdayFlags = request
        .effective_manual_selection()
        .unwrap_or(pattern.weekdays);

    days_inclusive(request.start_date, request.end_date)
        .filter(|date| is_candidate(*date, selection, request))
        .collect()
}

fn is_candidate(date: Date, selection: WeekdayFlags, request: &BulkAssignmentRequest) -> bool {
    let weekday = date.weekday();

    if !selection.contains(weekday) {
        return false;
    }

    if request.exclude_weekends && is_weekend(weekday) {
        return false;
    }

    !request.exclude_dates.contains(&date)
}
