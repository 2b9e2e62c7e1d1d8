use utoipa::OpenApi;

use crate::{dto, http, response};

/// OpenAPI description of the REST surface, served by the router at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "employee-service",
        description = "CRUD microservice for employee records"
    ),
    paths(
        http::save,
        http::get_all,
        http::pageable,
        http::get_by_id,
        http::update,
        http::delete_by_id,
        http::loop_insert,
        http::range,
    ),
    components(schemas(
        dto::EmployeeDto,
        dto::Gender,
        dto::EmployeePage,
        response::Status,
        response::EmployeeEnvelope,
        response::EmployeeListEnvelope,
        response::EmployeePageEnvelope,
        response::IdEnvelope,
        response::CountEnvelope,
        response::ErrorEnvelope,
    )),
    tags((name = "employee", description = "Employee record management"))
)]
pub struct ApiDoc;
