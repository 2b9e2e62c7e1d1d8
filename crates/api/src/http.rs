//! REST surface: one handler per service operation. Every response is
//! HTTP 200 with the envelope as body; outcomes live in the envelope
//! status only.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;
use utoipa::{IntoParams, OpenApi};

use crate::{
    docs::ApiDoc,
    dto::EmployeeDto,
    error::ServiceError,
    response::{
        CountEnvelope, EmployeeEnvelope, EmployeeListEnvelope, EmployeePageEnvelope, Envelope,
        IdEnvelope,
    },
    service::EmployeeService,
};

#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .nest("/api/v1/employee", employee_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(save))
        .route("/get-all", get(get_all))
        .route("/pageable", get(pageable))
        .route("/get-by-id/{id}", get(get_by_id))
        .route("/update/{id}", put(update))
        .route("/delete/{id}", delete(delete_by_id))
        .route("/loop-insert/{number}", post(loop_insert))
        .route("/range", get(range))
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct PageParams {
    /// Zero-based page index.
    page: i64,
    /// Rows per page.
    size: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct RangeParams {
    /// Inclusive lower id bound.
    start: i64,
    /// Inclusive upper id bound.
    end: i64,
}

/// Maps the failure side of a service call onto the envelope taxonomy:
/// a missing id is NOT_FOUND with the id echoed back, anything from the
/// store is ERROR with a description. Nothing unwinds past here.
fn failure(err: ServiceError) -> Response {
    match err {
        ServiceError::NotFound(id) => Envelope::not_found("id is not valid", id).into_response(),
        ServiceError::Db(err) => {
            error!(error = %err, "store operation failed");
            Envelope::error("error occurred", err.to_string()).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/employee/save",
    tag = "employee",
    request_body = EmployeeDto,
    responses((status = 200, description = "CREATED envelope carrying the stored record", body = EmployeeEnvelope)),
)]
pub(crate) async fn save(
    State(state): State<AppState>,
    Json(dto): Json<EmployeeDto>,
) -> Response {
    match state.employees.create(dto).await {
        Ok(created) => Envelope::created("employee created", created).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employee/get-all",
    tag = "employee",
    responses((status = 200, description = "SUCCESS envelope with every record, unfiltered", body = EmployeeListEnvelope)),
)]
pub(crate) async fn get_all(State(state): State<AppState>) -> Response {
    match state.employees.get_all().await {
        Ok(employees) => Envelope::success("employees retrieved", employees).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employee/pageable",
    tag = "employee",
    params(PageParams),
    responses((status = 200, description = "SUCCESS envelope with one page of records", body = EmployeePageEnvelope)),
)]
pub(crate) async fn pageable(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Response {
    match state.employees.get_page(params.page, params.size).await {
        Ok(page) => Envelope::success("page retrieved", page).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employee/get-by-id/{id}",
    tag = "employee",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses((status = 200, description = "SUCCESS envelope with the record; NOT_FOUND echoes the id", body = EmployeeEnvelope)),
)]
pub(crate) async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.employees.get_by_id(id).await {
        Ok(employee) => Envelope::success("employee retrieved", employee).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/employee/update/{id}",
    tag = "employee",
    params(("id" = i64, Path, description = "Employee identifier")),
    request_body = EmployeeDto,
    responses((status = 200, description = "UPDATED envelope with the replaced record; NOT_FOUND echoes the id", body = EmployeeEnvelope)),
)]
pub(crate) async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<EmployeeDto>,
) -> Response {
    match state.employees.update(id, dto).await {
        Ok(updated) => Envelope::updated("employee updated", updated).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/employee/delete/{id}",
    tag = "employee",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses((status = 200, description = "DELETED envelope echoing the removed id; NOT_FOUND if absent", body = IdEnvelope)),
)]
pub(crate) async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.employees.delete(id).await {
        Ok(id) => Envelope::deleted("employee deleted", id).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/employee/loop-insert/{number}",
    tag = "employee",
    params(("number" = u64, Path, description = "How many derived copies to insert")),
    request_body = EmployeeDto,
    responses((status = 200, description = "SUCCESS envelope with the inserted count", body = CountEnvelope)),
)]
pub(crate) async fn loop_insert(
    State(state): State<AppState>,
    Path(number): Path<u64>,
    Json(dto): Json<EmployeeDto>,
) -> Response {
    match state.employees.bulk_insert(dto, number).await {
        Ok(count) => Envelope::success("employees inserted", count).into_response(),
        Err(err) => failure(err),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employee/range",
    tag = "employee",
    params(RangeParams),
    responses((status = 200, description = "SUCCESS envelope with records whose id lies in [start, end]", body = EmployeeListEnvelope)),
)]
pub(crate) async fn range(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Response {
    match state.employees.get_range(params.start, params.end).await {
        Ok(employees) => Envelope::success("employees retrieved", employees).into_response(),
        Err(err) => failure(err),
    }
}
