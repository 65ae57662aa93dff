// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time, Weekday};

/// Generates a canonical numeric identifier newtype.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a canonical numeric identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifies a gym center.
    CenterId
);
id_type!(
    /// Identifies an employee.
    EmployeeId
);
id_type!(
    /// Identifies a shift pattern.
    ShiftId
);
id_type!(
    /// Identifies a persisted assignment.
    AssignmentId
);

/// A gym center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    /// The center's canonical ID.
    pub center_id: CenterId,
    /// Display name.
    pub name: String,
    /// Optional region code used to scope regional holidays.
    pub region: Option<String>,
}

impl Center {
    /// Creates a new `Center`.
    #[must_use]
    pub const fn new(center_id: CenterId, name: String, region: Option<String>) -> Self {
        Self {
            center_id,
            name,
            region,
        }
    }
}

/// An employee attached to a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's canonical ID.
    pub employee_id: EmployeeId,
    /// The center the employee works at.
    pub center_id: CenterId,
    /// Display name.
    pub name: String,
}

/// Lifecycle status of a shift pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PatternStatus {
    /// Being edited; not yet visible to staff.
    #[default]
    Draft,
    /// Live pattern.
    Published,
    /// Retired. No new assignments may reference it.
    Archived,
}

impl FromStr for PatternStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for PatternStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PatternStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Draft` → `Published`
    /// - `Published` → `Archived`
    /// - `Draft` → `Archived`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Published)
                | (Self::Published, Self::Archived)
                | (Self::Draft, Self::Archived)
        )
    }

    /// Returns whether new assignments may reference a pattern in this status.
    #[must_use]
    pub const fn accepts_assignments(&self) -> bool {
        !matches!(self, Self::Archived)
    }
}

/// A set of weekdays, stored as a bitmask with Monday in bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WeekdayFlags {
    bits: u8,
}

impl WeekdayFlags {
    /// The empty set.
    pub const NONE: Self = Self { bits: 0 };

    /// Monday through Friday.
    pub const WEEKDAYS: Self = Self { bits: 0b001_1111 };

    /// Builds a set from a list of weekdays.
    #[must_use]
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        days.iter().fold(Self::NONE, |flags, day| flags.with(*day))
    }

    /// Builds a set from seven flags ordered Monday..Sunday.
    #[must_use]
    pub fn from_array(flags: [bool; 7]) -> Self {
        let bits: u8 = flags
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .fold(0, |bits, (index, _)| bits | (1 << index));
        Self { bits }
    }

    /// Returns the seven flags ordered Monday..Sunday.
    #[must_use]
    pub fn to_array(self) -> [bool; 7] {
        let mut flags: [bool; 7] = [false; 7];
        for (index, flag) in flags.iter_mut().enumerate() {
            *flag = self.bits & (1 << index) != 0;
        }
        flags
    }

    /// Returns a copy of this set with `day` added.
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self {
            bits: self.bits | Self::bit(day),
        }
    }

    /// Returns whether `day` is in the set.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.bits & Self::bit(day) != 0
    }

    /// Returns whether no weekday is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    const fn bit(day: Weekday) -> u8 {
        1 << day.number_days_from_monday()
    }
}

/// A recurring weekly shift template owned by a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPattern {
    /// The shift's canonical ID.
    pub shift_id: ShiftId,
    /// The center that owns this shift.
    pub center_id: CenterId,
    /// Display name.
    pub name: String,
    /// Start time of day.
    pub start_time: Time,
    /// End time of day. May be earlier than `start_time` for overnight shifts.
    pub end_time: Time,
    /// Days of the week the shift runs on.
    pub weekdays: WeekdayFlags,
    /// Minimum headcount.
    pub min_staff: u16,
    /// Maximum headcount.
    pub max_staff: u16,
    /// Lifecycle status.
    pub status: PatternStatus,
}

impl ShiftPattern {
    /// Returns whether the pattern runs on the given weekday.
    #[must_use]
    pub const fn runs_on(&self, day: Weekday) -> bool {
        self.weekdays.contains(day)
    }
}

/// The uniqueness key of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssignmentKey {
    /// The assigned employee.
    pub employee_id: EmployeeId,
    /// The assigned shift.
    pub shift_id: ShiftId,
    /// The calendar date.
    pub date: Date,
}

/// One employee scheduled to one shift on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The canonical ID. `None` until persisted.
    pub assignment_id: Option<AssignmentId>,
    /// The assigned employee.
    pub employee_id: EmployeeId,
    /// The assigned shift.
    pub shift_id: ShiftId,
    /// The center the shift runs at.
    pub center_id: CenterId,
    /// The calendar date.
    pub date: Date,
}

impl Assignment {
    /// Creates a new, not yet persisted, assignment.
    #[must_use]
    pub const fn new(
        employee_id: EmployeeId,
        shift_id: ShiftId,
        center_id: CenterId,
        date: Date,
    ) -> Self {
        Self {
            assignment_id: None,
            employee_id,
            shift_id,
            center_id,
            date,
        }
    }

    /// Returns the uniqueness key of this assignment.
    #[must_use]
    pub const fn key(&self) -> AssignmentKey {
        AssignmentKey {
            employee_id: self.employee_id,
            shift_id: self.shift_id,
            date: self.date,
        }
    }
}

/// Which centers a holiday applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayScope {
    /// Every center.
    Global,
    /// Every center in the named region.
    Regional(String),
    /// A single center.
    Center(CenterId),
}

impl HolidayScope {
    /// Returns the scope kind as stored and transmitted.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Regional(_) => "regional",
            Self::Center(_) => "center",
        }
    }

    /// Rebuilds a scope from its kind and optional qualifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is unknown or its qualifier is missing.
    pub fn from_parts(
        kind: &str,
        region: Option<String>,
        center_id: Option<CenterId>,
    ) -> Result<Self, DomainError> {
        match (kind, region, center_id) {
            ("global", _, _) => Ok(Self::Global),
            ("regional", Some(region), _) if !region.trim().is_empty() => {
                Ok(Self::Regional(region))
            }
            ("center", _, Some(center_id)) => Ok(Self::Center(center_id)),
            _ => Err(DomainError::InvalidHolidayScope(kind.to_string())),
        }
    }

    /// Returns whether this scope covers the given center.
    #[must_use]
    pub fn covers(&self, center: &Center) -> bool {
        match self {
            Self::Global => true,
            Self::Regional(region) => center.region.as_deref() == Some(region.as_str()),
            Self::Center(center_id) => *center_id == center.center_id,
        }
    }
}

/// A blackout date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The blackout date.
    pub date: Date,
    /// Human-readable label, e.g. "New Year's Day".
    pub label: String,
    /// Which centers the holiday applies to.
    pub scope: HolidayScope,
}

impl Holiday {
    /// Creates a new `Holiday`.
    #[must_use]
    pub const fn new(date: Date, label: String, scope: HolidayScope) -> Self {
        Self { date, label, scope }
    }

    /// Returns whether this holiday blacks out `center`.
    #[must_use]
    pub fn applies_to(&self, center: &Center) -> bool {
        self.scope.covers(center)
    }
}
