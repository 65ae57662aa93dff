// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use crate::Persistence;
use gymshift_domain::{
    Center, Employee, PatternStatus, ShiftId, ShiftPattern, WeekdayFlags,
};
use time::Weekday;
use time::macros::time;

/// A persisted center, employee and published Mon/Wed/Fri shift.
pub struct TestFixture {
    pub persistence: Persistence,
    pub center: Center,
    pub employee: Employee,
    pub shift: ShiftPattern,
}

pub fn create_test_pattern(center: &Center) -> ShiftPattern {
    ShiftPattern {
        shift_id: ShiftId::new(0),
        center_id: center.center_id,
        name: String::from("Morning floor"),
        start_time: time!(06:00),
        end_time: time!(14:00),
        weekdays: WeekdayFlags::from_weekdays(&[
            Weekday::Monday,
            Weekday::Wednesday,
            Weekday::Friday,
        ]),
        min_staff: 1,
        max_staff: 3,
        status: PatternStatus::Published,
    }
}

pub fn create_test_fixture() -> TestFixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let center: Center = persistence
        .create_center("Downtown", Some("north"))
        .unwrap();
    let employee: Employee = persistence
        .create_employee(center.center_id, "Alex Rivera")
        .unwrap();
    let shift: ShiftPattern = persistence
        .create_shift_pattern(&create_test_pattern(&center))
        .unwrap();
    TestFixture {
        persistence,
        center,
        employee,
        shift,
    }
}
