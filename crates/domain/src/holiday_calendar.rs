// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blackout-date lookup for one center over one date range.
//!
//! A calendar is built per operation from the holidays the oracle reports
//! for the target center. It is never shared across operations.

use crate::types::Holiday;
use std::collections::BTreeMap;
use time::Date;

/// Blackout dates applicable to a single center.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    by_date: BTreeMap<Date, Holiday>,
}

/// Candidate dates split by holiday pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrunedDates {
    /// Dates that are not blackouts, in input order.
    pub kept: Vec<Date>,
    /// Dates dropped because they are blackouts, in input order.
    pub skipped: Vec<Date>,
}

impl HolidayCalendar {
    /// Builds a calendar from holidays that already apply to the center.
    ///
    /// When several holidays share a date the first one is kept for labeling.
    #[must_use]
    pub fn from_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut by_date: BTreeMap<Date, Holiday> = BTreeMap::new();
        for holiday in holidays {
            by_date.entry(holiday.date).or_insert(holiday);
        }
        Self { by_date }
    }

    /// Returns whether `date` is a blackout.
    #[must_use]
    pub fn is_blackout(&self, date: Date) -> bool {
        self.by_date.contains_key(&date)
    }

    /// Returns the holiday on `date`, if any.
    #[must_use]
    pub fn holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.by_date.get(&date)
    }

    /// Number of distinct blackout dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns whether the calendar has no blackout dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Splits candidate dates into kept and holiday-skipped.
    #[must_use]
    pub fn prune(&self, dates: Vec<Date>) -> PrunedDates {
        let (skipped, kept): (Vec<Date>, Vec<Date>) =
            dates.into_iter().partition(|date| self.is_blackout(*date));
        PrunedDates { kept, skipped }
    }
}
