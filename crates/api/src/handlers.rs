// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler parses a string-typed request, validates it, calls into the
//! scheduler or the persistence layer, and translates failures into
//! `ApiError`. Reference-data handlers take the concrete `Persistence`;
//! scheduler handlers are generic over the collaborator traits so they run
//! against any store.

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::input::{InputError, parse_date_field, parse_date_set, parse_time_field};
use crate::request_response::{
    AssignmentInfo, BulkAssignRequest, BulkAssignResponse, CenterInfo, CreateCenterRequest,
    CreateEmployeeRequest, CreateHolidayRequest, CreateShiftRequest, DeleteAssignmentsRequest,
    DeleteAssignmentsResponse, EmployeeInfo, HolidayInfo, ListAssignmentsRequest,
    ListAssignmentsResponse, ListHolidaysRequest, ListHolidaysResponse, MoveAssignmentRequest,
    MoveAssignmentResponse, QuickAssignRequest, ShiftInfo, UpdateShiftStatusRequest,
};
use gymshift::{
    AssignmentStore, BulkAssignOutcome, EmployeeDirectory, HolidayOracle, MoveOutcome,
    SchedulerConfig, ShiftDirectory,
};
use gymshift_domain::{
    Assignment, AssignmentId, BulkAssignmentRequest, Center, CenterId, Employee, EmployeeId,
    Holiday, HolidayScope, PatternStatus, ShiftId, ShiftPattern, WeekdayFlags, format_date,
    validate_date_range, validate_employees_selected, validate_name, validate_shift_pattern,
    validate_status_transition,
};
use gymshift_persistence::Persistence;
use std::collections::BTreeSet;
use time::Date;
use tracing::info;

// ============================================================================
// Reference data
// ============================================================================

/// Creates a center.
///
/// A blank region is stored as no region.
///
/// # Errors
///
/// Returns an error if the name is empty or the center cannot be stored.
pub fn create_center(
    persistence: &mut Persistence,
    request: &CreateCenterRequest,
) -> Result<CenterInfo, ApiError> {
    validate_name(&request.name).map_err(translate_domain_error)?;
    let region: Option<&str> = request
        .region
        .as_deref()
        .map(str::trim)
        .filter(|region| !region.is_empty());

    let center: Center = persistence
        .create_center(request.name.trim(), region)
        .map_err(translate_persistence_error)?;

    info!(center_id = center.center_id.value(), name = %center.name, "Created center");
    Ok(CenterInfo::from(&center))
}

/// Creates an employee at an existing center.
///
/// # Errors
///
/// Returns an error if the name is empty or the center does not exist.
pub fn create_employee(
    persistence: &mut Persistence,
    request: &CreateEmployeeRequest,
) -> Result<EmployeeInfo, ApiError> {
    validate_name(&request.name).map_err(translate_domain_error)?;
    let center: Center = require_center(persistence, CenterId::new(request.center_id))?;

    let employee: Employee = persistence
        .create_employee(center.center_id, request.name.trim())
        .map_err(translate_persistence_error)?;

    info!(
        employee_id = employee.employee_id.value(),
        center_id = center.center_id.value(),
        "Created employee"
    );
    Ok(EmployeeInfo::from(&employee))
}

/// Creates a shift pattern.
///
/// New patterns start as `draft` unless the request names another status.
///
/// # Errors
///
/// Returns an error if:
/// - The center does not exist
/// - A time does not parse or the status is unknown
/// - The name is empty or the headcount bounds are inconsistent
pub fn create_shift(
    persistence: &mut Persistence,
    request: &CreateShiftRequest,
) -> Result<ShiftInfo, ApiError> {
    let center: Center = require_center(persistence, CenterId::new(request.center_id))?;

    let status: PatternStatus = match request.status.as_deref() {
        Some(status) => status.trim().parse().map_err(translate_domain_error)?,
        None => PatternStatus::Draft,
    };

    let pattern: ShiftPattern = ShiftPattern {
        shift_id: ShiftId::new(0),
        center_id: center.center_id,
        name: request.name.trim().to_string(),
        start_time: parse_time_field("start_time", &request.start_time)?,
        end_time: parse_time_field("end_time", &request.end_time)?,
        weekdays: WeekdayFlags::from(request.weekdays),
        min_staff: request.min_staff,
        max_staff: request.max_staff,
        status,
    };
    validate_shift_pattern(&pattern).map_err(translate_domain_error)?;

    let created: ShiftPattern = persistence
        .create_shift_pattern(&pattern)
        .map_err(translate_persistence_error)?;

    info!(
        shift_id = created.shift_id.value(),
        center_id = created.center_id.value(),
        status = %created.status,
        "Created shift pattern"
    );
    Ok(ShiftInfo::from(&created))
}

/// Moves a shift pattern to a new lifecycle status.
///
/// # Errors
///
/// Returns an error if the shift does not exist, the status is unknown, or
/// the transition is not permitted.
pub fn update_shift_status(
    persistence: &mut Persistence,
    shift_id: i64,
    request: &UpdateShiftStatusRequest,
) -> Result<ShiftInfo, ApiError> {
    let shift_id: ShiftId = ShiftId::new(shift_id);
    let mut pattern: ShiftPattern = persistence
        .get_shift_pattern(shift_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Shift pattern"),
            message: format!("Shift pattern {shift_id} does not exist"),
        })?;

    let target: PatternStatus = request
        .status
        .trim()
        .parse()
        .map_err(translate_domain_error)?;
    validate_status_transition(pattern.status, target).map_err(translate_domain_error)?;

    persistence
        .update_shift_status(shift_id, target)
        .map_err(translate_persistence_error)?;

    info!(
        shift_id = shift_id.value(),
        from = %pattern.status,
        to = %target,
        "Updated shift pattern status"
    );
    pattern.status = target;
    Ok(ShiftInfo::from(&pattern))
}

/// Records a holiday.
///
/// # Errors
///
/// Returns an error if:
/// - The date does not parse or the label is empty
/// - The scope is unknown or missing its region / center qualifier
/// - A center-scoped holiday names a center that does not exist
pub fn create_holiday(
    persistence: &mut Persistence,
    request: &CreateHolidayRequest,
) -> Result<HolidayInfo, ApiError> {
    let date: Date = parse_date_field("date", &request.date)?;
    if request.label.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("label"),
            message: String::from("Holiday label cannot be empty"),
        });
    }

    let scope_kind: &str = request.scope.trim();
    let region: Option<String> = request
        .region
        .as_deref()
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .map(str::to_string);
    match scope_kind {
        "regional" if region.is_none() => {
            return Err(InputError::MissingScopeQualifier {
                field: "region",
                scope: "regional",
            }
            .into());
        }
        "center" => match request.center_id {
            Some(center_id) => {
                require_center(persistence, CenterId::new(center_id))?;
            }
            None => {
                return Err(InputError::MissingScopeQualifier {
                    field: "center_id",
                    scope: "center",
                }
                .into());
            }
        },
        _ => {}
    }

    let scope: HolidayScope =
        HolidayScope::from_parts(scope_kind, region, request.center_id.map(CenterId::new))
            .map_err(translate_domain_error)?;
    let holiday: Holiday = Holiday::new(date, request.label.trim().to_string(), scope);

    persistence
        .add_holiday(&holiday)
        .map_err(translate_persistence_error)?;

    info!(date = %holiday.date, scope = holiday.scope.kind(), "Created holiday");
    Ok(HolidayInfo::from(&holiday))
}

/// Lists the holidays that black out a center over a date range.
///
/// # Errors
///
/// Returns an error if a date does not parse, the range is inverted, or the
/// center does not exist.
pub fn list_holidays(
    persistence: &mut Persistence,
    request: &ListHolidaysRequest,
) -> Result<ListHolidaysResponse, ApiError> {
    let from: Date = parse_date_field("from", &request.from)?;
    let to: Date = parse_date_field("to", &request.to)?;
    validate_date_range(from, to).map_err(translate_domain_error)?;

    let holidays: Vec<Holiday> = persistence
        .list_holidays_for_center(CenterId::new(request.center_id), from, to)
        .map_err(translate_persistence_error)?;

    Ok(ListHolidaysResponse {
        center_id: request.center_id,
        holidays: holidays.iter().map(HolidayInfo::from).collect(),
    })
}

// ============================================================================
// Assignments
// ============================================================================

/// Expands a shift pattern over a date range for every listed employee and
/// commits the result.
///
/// Holidays and existing assignments are skipped and counted. A failing
/// insert chunk does not turn into an error: the response reports it with
/// `complete: false` and the rows inserted before it.
///
/// # Errors
///
/// Returns an error, with nothing written, if:
/// - No employees are listed or a date does not parse
/// - The range is inverted
/// - The shift does not exist, is archived, or belongs to another center
/// - An employee does not exist or works at another center
/// - A lookup or duplicate check fails
pub fn bulk_assign<B>(
    backend: &mut B,
    config: &SchedulerConfig,
    request: &BulkAssignRequest,
) -> Result<BulkAssignResponse, ApiError>
where
    B: HolidayOracle + ShiftDirectory + EmployeeDirectory + AssignmentStore + ?Sized,
{
    let employee_ids: Vec<EmployeeId> = request
        .employee_ids
        .iter()
        .copied()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .map(EmployeeId::new)
        .collect();
    validate_employees_selected(&employee_ids).map_err(translate_domain_error)?;

    let start_date: Date = parse_date_field("start_date", &request.start_date)?;
    let end_date: Date = parse_date_field("end_date", &request.end_date)?;
    let exclude_dates: BTreeSet<Date> = parse_date_set("exclude_dates", &request.exclude_dates)?;
    let manual_day_selection: Option<WeekdayFlags> = request.manual_days.map(WeekdayFlags::from);

    let requests: Vec<BulkAssignmentRequest> = employee_ids
        .iter()
        .map(|employee_id| BulkAssignmentRequest {
            employee_id: *employee_id,
            shift_id: ShiftId::new(request.shift_id),
            center_id: CenterId::new(request.center_id),
            start_date,
            end_date,
            exclude_weekends: request.exclude_weekends,
            exclude_dates: exclude_dates.clone(),
            manual_day_selection,
        })
        .collect();

    let outcome: BulkAssignOutcome =
        gymshift::bulk_assign_many(backend, config, &requests).map_err(translate_core_error)?;

    info!(
        center_id = request.center_id,
        shift_id = request.shift_id,
        employees = employee_ids.len(),
        inserted = outcome.inserted_count,
        complete = outcome.is_complete(),
        "Handled bulk assignment"
    );
    Ok(BulkAssignResponse::from(&outcome))
}

/// Assigns one shift on one date.
///
/// # Errors
///
/// Returns an error, with nothing written, if the date does not parse, the
/// shift cannot take assignments, the employee is unknown or works at
/// another center, the date is a holiday for the center, or the employee
/// already holds the shift that day.
pub fn quick_assign<B>(
    backend: &mut B,
    request: &QuickAssignRequest,
) -> Result<AssignmentInfo, ApiError>
where
    B: HolidayOracle + ShiftDirectory + EmployeeDirectory + AssignmentStore + ?Sized,
{
    let date: Date = parse_date_field("date", &request.date)?;
    let slot: Assignment = Assignment::new(
        EmployeeId::new(request.employee_id),
        ShiftId::new(request.shift_id),
        CenterId::new(request.center_id),
        date,
    );

    let created: Assignment = gymshift::quick_assign(backend, &slot).map_err(translate_core_error)?;
    Ok(AssignmentInfo::from(&created))
}

/// Drags an assignment to another date.
///
/// Moving onto the current date succeeds with `moved: false`.
///
/// # Errors
///
/// Returns an error, leaving the assignment untouched, if the date does not
/// parse, the assignment does not exist, the destination is a holiday, or
/// the destination slot is already taken.
pub fn move_assignment<B>(
    backend: &mut B,
    assignment_id: i64,
    request: &MoveAssignmentRequest,
) -> Result<MoveAssignmentResponse, ApiError>
where
    B: HolidayOracle + AssignmentStore + ?Sized,
{
    let to_date: Date = parse_date_field("to_date", &request.to_date)?;
    let outcome: MoveOutcome =
        gymshift::move_assignment(backend, AssignmentId::new(assignment_id), to_date)
            .map_err(translate_core_error)?;

    Ok(match outcome {
        MoveOutcome::Unchanged(assignment) => MoveAssignmentResponse {
            from_date: format_date(assignment.date),
            message: format!("Assignment already on {}", format_date(assignment.date)),
            assignment: AssignmentInfo::from(&assignment),
            moved: false,
        },
        MoveOutcome::Moved { from, assignment } => MoveAssignmentResponse {
            from_date: format_date(from),
            message: format!(
                "Moved assignment from {} to {}",
                format_date(from),
                format_date(assignment.date)
            ),
            assignment: AssignmentInfo::from(&assignment),
            moved: true,
        },
    })
}

/// Deletes assignments by ID in one request.
///
/// # Errors
///
/// Returns an error if no IDs are given or the store rejects the delete.
pub fn delete_assignments<S>(
    store: &mut S,
    request: &DeleteAssignmentsRequest,
) -> Result<DeleteAssignmentsResponse, ApiError>
where
    S: AssignmentStore + ?Sized,
{
    let ids: Vec<AssignmentId> = request
        .assignment_ids
        .iter()
        .copied()
        .map(AssignmentId::new)
        .collect();
    let requested: usize = ids.iter().collect::<BTreeSet<&AssignmentId>>().len();

    let deleted: usize = gymshift::delete_assignments(store, &ids).map_err(translate_core_error)?;

    Ok(DeleteAssignmentsResponse {
        requested,
        deleted,
        message: format!("Deleted {deleted} of {requested} selected assignments"),
    })
}

/// Lists a center's assignments over a visible window.
///
/// # Errors
///
/// Returns an error if a date does not parse, the window is inverted, or the
/// store cannot be queried.
pub fn list_assignments<S>(
    store: &mut S,
    request: &ListAssignmentsRequest,
) -> Result<ListAssignmentsResponse, ApiError>
where
    S: AssignmentStore + ?Sized,
{
    let from: Date = parse_date_field("from", &request.from)?;
    let to: Date = parse_date_field("to", &request.to)?;

    let assignments: Vec<Assignment> =
        gymshift::list_assignments(store, CenterId::new(request.center_id), from, to)
            .map_err(translate_core_error)?;

    Ok(ListAssignmentsResponse {
        center_id: request.center_id,
        from: format_date(from),
        to: format_date(to),
        assignments: assignments.iter().map(AssignmentInfo::from).collect(),
    })
}

fn require_center(persistence: &mut Persistence, center_id: CenterId) -> Result<Center, ApiError> {
    persistence
        .get_center(center_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Center"),
            message: format!("Center {center_id} does not exist"),
        })
}
