// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use gymshift::{DEFAULT_DUPLICATE_CHECK_BATCH_SIZE, DEFAULT_INSERT_CHUNK_SIZE, SchedulerConfig};
use gymshift_api::{
    ApiError, AssignmentInfo, BulkAssignRequest, BulkAssignResponse, CenterInfo,
    CreateCenterRequest, CreateEmployeeRequest, CreateHolidayRequest, CreateShiftRequest,
    DeleteAssignmentsRequest, DeleteAssignmentsResponse, EmployeeInfo, HolidayInfo,
    ListAssignmentsRequest, ListAssignmentsResponse, ListHolidaysRequest, ListHolidaysResponse,
    MoveAssignmentRequest, MoveAssignmentResponse, QuickAssignRequest, ShiftInfo,
    UpdateShiftStatusRequest, bulk_assign, create_center, create_employee, create_holiday,
    create_shift, delete_assignments, list_assignments, list_holidays, move_assignment,
    quick_assign, update_shift_status,
};
use gymshift_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Gymshift Server - HTTP server for the gym shift scheduler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// `SQLite` file holding centers, shifts, holidays and assignments.
    /// Omit to run against a fresh in-memory store.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to listen on (loopback only)
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Maximum dates per duplicate-check query
    #[arg(long, default_value_t = DEFAULT_DUPLICATE_CHECK_BATCH_SIZE)]
    duplicate_check_batch_size: usize,

    /// Maximum rows per insert call when committing a bulk assignment
    #[arg(long, default_value_t = DEFAULT_INSERT_CHUNK_SIZE)]
    insert_chunk_size: usize,
}

/// Application state shared across handlers.
///
/// Each request holds the persistence lock for one scheduler call.
#[derive(Clone)]
struct AppState {
    /// The store for reference data and assignments.
    persistence: Arc<Mutex<Persistence>>,
    /// Batch sizes handed to every bulk assignment.
    config: SchedulerConfig,
}

/// JSON body sent with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always true; lets clients tell errors from payloads.
    error: bool,
    message: String,
}

/// An `ApiError` paired with the status it maps to.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed inside the scheduler");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/centers` endpoint.
async fn handle_create_center(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCenterRequest>,
) -> Result<Json<CenterInfo>, HttpError> {
    info!(name = %req.name, "Handling create_center request");

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<CenterInfo, ApiError> = create_center(&mut persistence, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/employees` endpoint.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    info!(center_id = req.center_id, "Handling create_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<EmployeeInfo, ApiError> = create_employee(&mut persistence, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/shifts` endpoint.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Json<ShiftInfo>, HttpError> {
    info!(
        center_id = req.center_id,
        name = %req.name,
        "Handling create_shift request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<ShiftInfo, ApiError> = create_shift(&mut persistence, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/shifts/{shift_id}/status` endpoint.
///
/// Moves a shift pattern through draft, published and archived.
async fn handle_update_shift_status(
    AxumState(app_state): AxumState<AppState>,
    Path(shift_id): Path<i64>,
    Json(req): Json<UpdateShiftStatusRequest>,
) -> Result<Json<ShiftInfo>, HttpError> {
    info!(
        shift_id = shift_id,
        status = %req.status,
        "Handling update_shift_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<ShiftInfo, ApiError> =
        update_shift_status(&mut persistence, shift_id, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/holidays` endpoint.
async fn handle_create_holiday(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateHolidayRequest>,
) -> Result<Json<HolidayInfo>, HttpError> {
    info!(
        date = %req.date,
        scope = %req.scope,
        "Handling create_holiday request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<HolidayInfo, ApiError> = create_holiday(&mut persistence, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for GET `/holidays` endpoint.
///
/// Lists the holidays that black out a center over a date range.
async fn handle_list_holidays(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListHolidaysRequest>,
) -> Result<Json<ListHolidaysResponse>, HttpError> {
    info!(
        center_id = query.center_id,
        from = %query.from,
        to = %query.to,
        "Handling list_holidays request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<ListHolidaysResponse, ApiError> = list_holidays(&mut persistence, &query);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/assignments/bulk` endpoint.
///
/// A failed insert chunk still answers 200: the body carries
/// `complete: false`, the chunk index and the rows already inserted.
async fn handle_bulk_assign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BulkAssignRequest>,
) -> Result<Json<BulkAssignResponse>, HttpError> {
    info!(
        center_id = req.center_id,
        shift_id = req.shift_id,
        employees = req.employee_ids.len(),
        start_date = %req.start_date,
        end_date = %req.end_date,
        "Handling bulk_assign request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<BulkAssignResponse, ApiError> =
        bulk_assign(&mut *persistence, &app_state.config, &req);
    drop(persistence);

    let response: BulkAssignResponse = result?;
    if !response.complete {
        warn!(
            inserted = response.inserted_count,
            failed_at_chunk = ?response.failed_at_chunk,
            "Bulk assignment stopped early"
        );
    }
    Ok(Json(response))
}

/// Handler for POST `/assignments/quick` endpoint.
async fn handle_quick_assign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<QuickAssignRequest>,
) -> Result<Json<AssignmentInfo>, HttpError> {
    info!(
        employee_id = req.employee_id,
        shift_id = req.shift_id,
        date = %req.date,
        "Handling quick_assign request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<AssignmentInfo, ApiError> = quick_assign(&mut *persistence, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/assignments/{assignment_id}/move` endpoint.
async fn handle_move_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<i64>,
    Json(req): Json<MoveAssignmentRequest>,
) -> Result<Json<MoveAssignmentResponse>, HttpError> {
    info!(
        assignment_id = assignment_id,
        to_date = %req.to_date,
        "Handling move_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<MoveAssignmentResponse, ApiError> =
        move_assignment(&mut *persistence, assignment_id, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/assignments/delete` endpoint.
async fn handle_delete_assignments(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DeleteAssignmentsRequest>,
) -> Result<Json<DeleteAssignmentsResponse>, HttpError> {
    info!(
        count = req.assignment_ids.len(),
        "Handling delete_assignments request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<DeleteAssignmentsResponse, ApiError> =
        delete_assignments(&mut *persistence, &req);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for GET `/assignments` endpoint.
///
/// Lists a center's assignments over a visible window.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListAssignmentsRequest>,
) -> Result<Json<ListAssignmentsResponse>, HttpError> {
    info!(
        center_id = query.center_id,
        from = %query.from,
        to = %query.to,
        "Handling list_assignments request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<ListAssignmentsResponse, ApiError> =
        list_assignments(&mut *persistence, &query);
    drop(persistence);

    Ok(Json(result?))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/centers", post(handle_create_center))
        .route("/employees", post(handle_create_employee))
        .route("/shifts", post(handle_create_shift))
        .route("/shifts/{shift_id}/status", post(handle_update_shift_status))
        .route("/holidays", post(handle_create_holiday))
        .route("/holidays", get(handle_list_holidays))
        .route("/assignments", get(handle_list_assignments))
        .route("/assignments/bulk", post(handle_bulk_assign))
        .route("/assignments/quick", post(handle_quick_assign))
        .route(
            "/assignments/{assignment_id}/move",
            post(handle_move_assignment),
        )
        .route("/assignments/delete", post(handle_delete_assignments))
        .with_state(app_state)
}

/// Opens the file store named on the command line, or a throwaway
/// in-memory store when none is given.
fn open_store(database: Option<&str>) -> Result<Persistence, PersistenceError> {
    match database {
        Some(path) => {
            info!(path, "Opening scheduler database file");
            Persistence::new_with_file(path)
        }
        None => {
            warn!("No --database given; assignments will be lost on exit");
            Persistence::new_in_memory()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config: SchedulerConfig =
        SchedulerConfig::new(args.duplicate_check_batch_size, args.insert_chunk_size);
    config.validate()?;

    let app: Router = build_router(AppState {
        persistence: Arc::new(Mutex::new(open_store(args.database.as_deref())?)),
        config,
    });

    let addr: std::net::SocketAddr = std::net::SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        duplicate_check_batch_size = config.duplicate_check_batch_size,
        insert_chunk_size = config.insert_chunk_size,
        "Gymshift server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
