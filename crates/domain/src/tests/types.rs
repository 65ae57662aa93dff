// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Assignment, AssignmentKey, Center, CenterId, DomainError, EmployeeId, Holiday, HolidayScope,
    PatternStatus, ShiftId, WeekdayFlags,
};
use std::str::FromStr;
use time::Weekday;
use time::macros::date;

#[test]
fn test_weekday_flags_round_trip_through_array() {
    let flags: WeekdayFlags =
        WeekdayFlags::from_array([true, false, true, false, true, false, false]);

    assert!(flags.contains(Weekday::Monday));
    assert!(!flags.contains(Weekday::Tuesday));
    assert!(flags.contains(Weekday::Friday));
    assert!(!flags.contains(Weekday::Sunday));
    assert_eq!(
        flags.to_array(),
        [true, false, true, false, true, false, false]
    );
}

#[test]
fn test_weekday_flags_sunday_is_last_bit() {
    let flags: WeekdayFlags = WeekdayFlags::NONE.with(Weekday::Sunday);
    assert_eq!(flags.to_array(), [false, false, false, false, false, false, true]);
    assert!(!flags.is_empty());
    assert!(WeekdayFlags::NONE.is_empty());
}

#[test]
fn test_weekday_constant_excludes_weekend() {
    assert!(WeekdayFlags::WEEKDAYS.contains(Weekday::Friday));
    assert!(!WeekdayFlags::WEEKDAYS.contains(Weekday::Saturday));
    assert!(!WeekdayFlags::WEEKDAYS.contains(Weekday::Sunday));
}

#[test]
fn test_pattern_status_transitions() {
    assert!(PatternStatus::Draft.can_transition_to(PatternStatus::Published));
    assert!(PatternStatus::Published.can_transition_to(PatternStatus::Archived));
    assert!(PatternStatus::Draft.can_transition_to(PatternStatus::Archived));
    assert!(!PatternStatus::Archived.can_transition_to(PatternStatus::Published));
    assert!(!PatternStatus::Published.can_transition_to(PatternStatus::Draft));
    assert!(!PatternStatus::Draft.can_transition_to(PatternStatus::Draft));
}

#[test]
fn test_pattern_status_parses_and_displays() {
    for status in [
        PatternStatus::Draft,
        PatternStatus::Published,
        PatternStatus::Archived,
    ] {
        assert_eq!(PatternStatus::from_str(status.as_str()), Ok(status));
    }
    assert_eq!(
        PatternStatus::from_str("Live"),
        Err(DomainError::InvalidLifecycleState(String::from("Live")))
    );
    assert!(!PatternStatus::Archived.accepts_assignments());
}

#[test]
fn test_holiday_scope_coverage() {
    let north: Center = Center::new(CenterId::new(1), String::from("North"), Some(String::from("CAT")));
    let south: Center = Center::new(CenterId::new(2), String::from("South"), None);

    let global: Holiday = Holiday::new(date!(2026 - 01 - 01), String::from("New Year"), HolidayScope::Global);
    let regional: Holiday = Holiday::new(
        date!(2026 - 09 - 11),
        String::from("Diada"),
        HolidayScope::Regional(String::from("CAT")),
    );
    let local: Holiday = Holiday::new(
        date!(2026 - 05 - 15),
        String::from("Refurbishment"),
        HolidayScope::Center(CenterId::new(2)),
    );

    assert!(global.applies_to(&north));
    assert!(global.applies_to(&south));
    assert!(regional.applies_to(&north));
    assert!(!regional.applies_to(&south));
    assert!(!local.applies_to(&north));
    assert!(local.applies_to(&south));
}

#[test]
fn test_holiday_scope_from_parts() {
    assert_eq!(HolidayScope::from_parts("global", None, None), Ok(HolidayScope::Global));
    assert_eq!(
        HolidayScope::from_parts("center", None, Some(CenterId::new(4))),
        Ok(HolidayScope::Center(CenterId::new(4)))
    );
    assert!(HolidayScope::from_parts("center", None, None).is_err());
    assert!(HolidayScope::from_parts("regional", Some(String::from("  ")), None).is_err());
    assert!(HolidayScope::from_parts("planet", None, None).is_err());
}

#[test]
fn test_assignment_key_ignores_id_and_center() {
    let mut persisted: Assignment = Assignment::new(
        EmployeeId::new(1),
        ShiftId::new(2),
        CenterId::new(3),
        date!(2026 - 02 - 10),
    );
    persisted.assignment_id = Some(crate::AssignmentId::new(99));
    let fresh: Assignment = Assignment::new(
        EmployeeId::new(1),
        ShiftId::new(2),
        CenterId::new(3),
        date!(2026 - 02 - 10),
    );

    let key: AssignmentKey = persisted.key();
    assert_eq!(key, fresh.key());
    assert_eq!(key.date, date!(2026 - 02 - 10));
}
