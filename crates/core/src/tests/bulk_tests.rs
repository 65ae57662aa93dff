// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    CENTER, COWORKER, EMPLOYEE, FakeBackend, SHIFT, create_test_employee, create_test_pattern,
    create_test_request, every_day, mon_wed_fri,
};
use crate::{BulkAssignOutcome, CoreError, SchedulerConfig, bulk_assign, bulk_assign_many};
use gymshift_domain::{
    BulkAssignmentRequest, CenterId, DomainError, EmployeeId, Holiday, HolidayScope,
    PatternStatus, ShiftPattern, WeekdayFlags, days_inclusive,
};
use time::Date;
use time::macros::date;

#[test]
fn test_bulk_assign_mon_wed_fri_scenario() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    let request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14));

    let outcome: BulkAssignOutcome =
        bulk_assign(&mut backend, &SchedulerConfig::default(), &request).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.candidate_count, 6);
    assert_eq!(outcome.inserted_count, 6);
    assert_eq!(outcome.skipped_holiday, 0);
    assert_eq!(outcome.skipped_duplicate, 0);
    let mut dates: Vec<Date> = backend.rows.iter().map(|row| row.date).collect();
    dates.sort();
    assert_eq!(
        dates,
        vec![
            date!(2026 - 01 - 02),
            date!(2026 - 01 - 05),
            date!(2026 - 01 - 07),
            date!(2026 - 01 - 09),
            date!(2026 - 01 - 12),
            date!(2026 - 01 - 14),
        ]
    );
}

#[test]
fn test_bulk_assign_skips_holiday_and_reports_count() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    backend.add_holiday(date!(2026 - 01 - 09), "Local festivity");
    let request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14));

    let outcome: BulkAssignOutcome =
        bulk_assign(&mut backend, &SchedulerConfig::default(), &request).unwrap();

    assert_eq!(outcome.inserted_count, 5);
    assert_eq!(outcome.skipped_holiday, 1);
    assert!(backend.rows.iter().all(|row| row.date != date!(2026 - 01 - 09)));
    assert_eq!(backend.holiday_calls, 1);
}

#[test]
fn test_bulk_assign_ignores_other_centers_holidays() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    backend.holidays.push(Holiday::new(
        date!(2026 - 01 - 09),
        String::from("Elsewhere"),
        HolidayScope::Center(CenterId::new(99)),
    ));
    let request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14));

    let outcome: BulkAssignOutcome =
        bulk_assign(&mut backend, &SchedulerConfig::default(), &request).unwrap();

    assert_eq!(outcome.inserted_count, 6);
    assert_eq!(outcome.skipped_holiday, 0);
}

#[test]
fn test_bulk_assign_rerun_inserts_nothing() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    let request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 03 - 31));
    let config: SchedulerConfig = SchedulerConfig::default();

    let first: BulkAssignOutcome = bulk_assign(&mut backend, &config, &request).unwrap();
    let second: BulkAssignOutcome = bulk_assign(&mut backend, &config, &request).unwrap();

    assert!(first.inserted_count > 0);
    assert_eq!(second.inserted_count, 0);
    assert_eq!(second.skipped_duplicate, first.inserted_count);
    assert_eq!(backend.rows.len(), first.inserted_count);
    assert!(!backend.has_duplicate_keys());
}

#[test]
fn test_bulk_assign_120_candidates_60_existing_commits_in_two_chunks() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(every_day()));
    let start: Date = date!(2026 - 01 - 01);
    let end: Date = date!(2026 - 04 - 30);
    for (index, date) in days_inclusive(start, end).enumerate() {
        if index % 2 == 0 {
            backend.seed(EMPLOYEE, SHIFT, date);
        }
    }
    assert_eq!(backend.rows.len(), 60);

    let outcome: BulkAssignOutcome = bulk_assign(
        &mut backend,
        &SchedulerConfig::new(200, 50),
        &create_test_request(start, end),
    )
    .unwrap();

    assert_eq!(outcome.candidate_count, 120);
    assert_eq!(outcome.skipped_duplicate, 60);
    assert_eq!(outcome.inserted_count, 60);
    assert_eq!(backend.insert_calls, vec![50, 10]);
    assert_eq!(backend.rows.len(), 120);
    assert!(!backend.has_duplicate_keys());
}

#[test]
fn test_bulk_assign_chunk_failure_keeps_prior_chunks() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(every_day()));
    backend.fail_insert_on_call = Some(1);
    let request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 04 - 30));

    let outcome: BulkAssignOutcome =
        bulk_assign(&mut backend, &SchedulerConfig::new(200, 50), &request).unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.inserted_count, 50);
    assert_eq!(outcome.failed_at_chunk, Some(1));
    assert!(matches!(outcome.error, Some(CoreError::StoreFailure(_))));
    // The third chunk is never attempted.
    assert_eq!(backend.insert_calls, vec![50, 50]);
    assert_eq!(backend.rows.len(), 50);
}

#[test]
fn test_bulk_assign_rerun_after_partial_failure_completes_the_rest() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(every_day()));
    backend.fail_insert_on_call = Some(1);
    let request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 04 - 30));
    let config: SchedulerConfig = SchedulerConfig::new(200, 50);

    let first: BulkAssignOutcome = bulk_assign(&mut backend, &config, &request).unwrap();
    backend.fail_insert_on_call = None;
    let second: BulkAssignOutcome = bulk_assign(&mut backend, &config, &request).unwrap();

    assert_eq!(first.inserted_count, 50);
    assert_eq!(second.skipped_duplicate, 50);
    assert_eq!(second.inserted_count, 70);
    assert_eq!(backend.rows.len(), 120);
}

#[test]
fn test_bulk_assign_holiday_lookup_failure_writes_nothing() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    backend.fail_holidays = true;

    let result: Result<BulkAssignOutcome, CoreError> = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14)),
    );

    assert!(matches!(result, Err(CoreError::HolidayLookupFailed(_))));
    assert!(backend.insert_calls.is_empty());
    assert_eq!(backend.select_calls, 0);
}

#[test]
fn test_bulk_assign_duplicate_check_failure_writes_nothing() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    backend.fail_select = true;

    let result: Result<BulkAssignOutcome, CoreError> = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14)),
    );

    assert!(matches!(result, Err(CoreError::StoreFailure(_))));
    assert!(backend.insert_calls.is_empty());
}

#[test]
fn test_bulk_assign_rejects_inverted_range_before_io() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));

    let result: Result<BulkAssignOutcome, CoreError> = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 14), date!(2026 - 01 - 01)),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDateRange { .. }))
    ));
    assert_eq!(backend.holiday_calls, 0);
    assert_eq!(backend.select_calls, 0);
}

#[test]
fn test_bulk_assign_unknown_shift() {
    let mut backend: FakeBackend = FakeBackend::default();

    let result: Result<BulkAssignOutcome, CoreError> = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14)),
    );

    assert_eq!(result, Err(CoreError::ShiftNotFound(SHIFT)));
}

#[test]
fn test_bulk_assign_archived_shift() {
    let mut pattern: ShiftPattern = create_test_pattern(mon_wed_fri());
    pattern.status = PatternStatus::Archived;
    let mut backend: FakeBackend = FakeBackend::with_shift(pattern);

    let result: Result<BulkAssignOutcome, CoreError> = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14)),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::ShiftArchived { .. }))
    ));
    assert!(backend.rows.is_empty());
}

#[test]
fn test_bulk_assign_empty_selection_is_not_an_error() {
    let mut backend: FakeBackend =
        FakeBackend::with_shift(create_test_pattern(WeekdayFlags::NONE));

    let outcome: BulkAssignOutcome = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 01), date!(2026 - 12 - 31)),
    )
    .unwrap();

    assert_eq!(outcome.candidate_count, 0);
    assert_eq!(outcome.inserted_count, 0);
    assert!(backend.insert_calls.is_empty());
}

#[test]
fn test_bulk_assign_many_pools_employees() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    let mut second: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14));
    second.employee_id = COWORKER;
    let requests: Vec<BulkAssignmentRequest> = vec![
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14)),
        second,
    ];

    let outcome: BulkAssignOutcome =
        bulk_assign_many(&mut backend, &SchedulerConfig::default(), &requests).unwrap();

    assert_eq!(outcome.inserted_count, 12);
    // Both employees share one insert call.
    assert_eq!(backend.insert_calls, vec![12]);
    assert_eq!(backend.holiday_calls, 1);
}

#[test]
fn test_bulk_assign_many_collapses_overlapping_requests() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    let requests: Vec<BulkAssignmentRequest> = vec![
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 09)),
        create_test_request(date!(2026 - 01 - 05), date!(2026 - 01 - 14)),
    ];

    let outcome: BulkAssignOutcome =
        bulk_assign_many(&mut backend, &SchedulerConfig::default(), &requests).unwrap();

    assert_eq!(outcome.candidate_count, 9);
    assert_eq!(outcome.inserted_count, 6);
    assert_eq!(outcome.skipped_duplicate, 3);
    assert!(!backend.has_duplicate_keys());
}

#[test]
fn test_bulk_assign_many_rejects_empty_request_list() {
    let mut backend: FakeBackend = FakeBackend::default();

    let result: Result<BulkAssignOutcome, CoreError> =
        bulk_assign_many(&mut backend, &SchedulerConfig::default(), &[]);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoEmployeesSelected))
    );
}

#[test]
fn test_bulk_assign_rejects_shift_from_another_center() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    let mut request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14));
    request.center_id = CenterId::new(2);

    let result: Result<BulkAssignOutcome, CoreError> =
        bulk_assign(&mut backend, &SchedulerConfig::default(), &request);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::ShiftCenterMismatch { .. }
        ))
    ));
}

#[test]
fn test_bulk_assign_unknown_employee_writes_nothing() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(every_day()));
    let mut stranger: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 03 - 31));
    stranger.employee_id = EmployeeId::new(9999);
    let requests: Vec<BulkAssignmentRequest> = vec![
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 03 - 31)),
        stranger,
    ];

    let result: Result<BulkAssignOutcome, CoreError> =
        bulk_assign_many(&mut backend, &SchedulerConfig::new(200, 50), &requests);

    assert_eq!(
        result,
        Err(CoreError::EmployeeNotFound(EmployeeId::new(9999)))
    );
    assert!(backend.insert_calls.is_empty());
    assert_eq!(backend.holiday_calls, 0);
    assert!(backend.rows.is_empty());
}

#[test]
fn test_bulk_assign_rejects_employee_from_another_center() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    let transfer: EmployeeId = EmployeeId::new(300);
    backend
        .employees
        .push(create_test_employee(transfer, CenterId::new(2)));
    let mut request: BulkAssignmentRequest =
        create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14));
    request.employee_id = transfer;

    let result: Result<BulkAssignOutcome, CoreError> =
        bulk_assign(&mut backend, &SchedulerConfig::default(), &request);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::EmployeeCenterMismatch {
                employee_id: 300,
                employee_center_id: 2,
                requested_center_id: CENTER.value(),
            }
        ))
    );
    assert!(backend.insert_calls.is_empty());
}

#[test]
fn test_bulk_assign_employee_lookup_failure_writes_nothing() {
    let mut backend: FakeBackend = FakeBackend::with_shift(create_test_pattern(mon_wed_fri()));
    backend.fail_employees = true;

    let result: Result<BulkAssignOutcome, CoreError> = bulk_assign(
        &mut backend,
        &SchedulerConfig::default(),
        &create_test_request(date!(2026 - 01 - 01), date!(2026 - 01 - 14)),
    );

    assert!(matches!(result, Err(CoreError::EmployeeLookupFailed(_))));
    assert!(backend.insert_calls.is_empty());
}

#[test]
fn test_outcome_summary_reports_every_category() {
    let outcome: BulkAssignOutcome = BulkAssignOutcome {
        candidate_count: 10,
        inserted_count: 4,
        skipped_holiday: 1,
        skipped_duplicate: 5,
        failed_at_chunk: None,
        error: None,
    };

    assert_eq!(
        outcome.summary(),
        "4 assignments created; 1 dates skipped: holiday; 5 dates skipped: already assigned"
    );
}
