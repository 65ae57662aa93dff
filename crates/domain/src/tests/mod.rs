// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod types;

use crate::{
    BulkAssignmentRequest, CenterId, EmployeeId, PatternStatus, ShiftId, ShiftPattern,
    WeekdayFlags,
};
use time::macros::time;
use time::{Date, Weekday};

pub fn create_test_pattern(weekdays: WeekdayFlags) -> ShiftPattern {
    ShiftPattern {
        shift_id: ShiftId::new(10),
        center_id: CenterId::new(1),
        name: String::from("Morning floor"),
        start_time: time!(06:00),
        end_time: time!(14:00),
        weekdays,
        min_staff: 1,
        max_staff: 3,
        status: PatternStatus::Published,
    }
}

pub fn mon_wed_fri() -> WeekdayFlags {
    WeekdayFlags::from_weekdays(&[Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
}

pub fn create_test_request(start_date: Date, end_date: Date) -> BulkAssignmentRequest {
    BulkAssignmentRequest::new(
        EmployeeId::new(100),
        ShiftId::new(10),
        CenterId::new(1),
        start_date,
        end_date,
    )
}
