// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use gymshift_persistence::Persistence;

use crate::{
    BulkAssignRequest, CenterInfo, CreateCenterRequest, CreateEmployeeRequest,
    CreateShiftRequest, EmployeeInfo, ShiftInfo, WeekdaySelection, create_center,
    create_employee, create_shift,
};

/// A center in region "north" with one employee and a published
/// Mon/Wed/Fri morning shift.
pub struct TestContext {
    pub persistence: Persistence,
    pub center: CenterInfo,
    pub employee: EmployeeInfo,
    pub shift: ShiftInfo,
}

pub fn mon_wed_fri() -> WeekdaySelection {
    WeekdaySelection {
        monday: true,
        wednesday: true,
        friday: true,
        ..WeekdaySelection::default()
    }
}

pub fn create_test_shift_request(center_id: i64) -> CreateShiftRequest {
    CreateShiftRequest {
        center_id,
        name: String::from("Morning floor"),
        start_time: String::from("06:00"),
        end_time: String::from("14:00"),
        weekdays: mon_wed_fri(),
        min_staff: 1,
        max_staff: 3,
        status: Some(String::from("published")),
    }
}

pub fn create_test_context() -> TestContext {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let center: CenterInfo = create_center(
        &mut persistence,
        &CreateCenterRequest {
            name: String::from("Downtown"),
            region: Some(String::from("north")),
        },
    )
    .unwrap();
    let employee: EmployeeInfo = create_employee(
        &mut persistence,
        &CreateEmployeeRequest {
            center_id: center.center_id,
            name: String::from("Alex Rivera"),
        },
    )
    .unwrap();
    let shift: ShiftInfo =
        create_shift(&mut persistence, &create_test_shift_request(center.center_id)).unwrap();
    TestContext {
        persistence,
        center,
        employee,
        shift,
    }
}

pub fn add_employee(context: &mut TestContext, name: &str) -> EmployeeInfo {
    create_employee(
        &mut context.persistence,
        &CreateEmployeeRequest {
            center_id: context.center.center_id,
            name: String::from(name),
        },
    )
    .unwrap()
}

/// Bulk request for the context's employee over 2026-01-01..2026-01-14.
pub fn create_bulk_request(context: &TestContext) -> BulkAssignRequest {
    BulkAssignRequest {
        center_id: context.center.center_id,
        shift_id: context.shift.shift_id,
        employee_ids: vec![context.employee.employee_id],
        start_date: String::from("2026-01-01"),
        end_date: String::from("2026-01-14"),
        exclude_weekends: false,
        exclude_dates: Vec::new(),
        manual_days: None,
    }
}
