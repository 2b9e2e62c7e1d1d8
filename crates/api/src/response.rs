//! The uniform response envelope: every operation answers HTTP 200 with
//! `{status, message, data}` and encodes its outcome in `status` alone.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{EmployeeDto, Page};

/// Terminal classification of one operation's outcome. Each operation
/// produces exactly one of these.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Created,
    Success,
    Updated,
    Deleted,
    NotFound,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[aliases(
    EmployeeEnvelope = Envelope<EmployeeDto>,
    EmployeeListEnvelope = Envelope<Vec<EmployeeDto>>,
    EmployeePageEnvelope = Envelope<Page<EmployeeDto>>,
    IdEnvelope = Envelope<i64>,
    CountEnvelope = Envelope<u64>,
    ErrorEnvelope = Envelope<String>
)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    fn new(status: Status, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    /// SUCCESS carries whichever read payload the operation produced: a
    /// record, a list, a page, or an inserted count.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(Status::Success, message, data)
    }
}

impl Envelope<EmployeeDto> {
    pub fn created(message: impl Into<String>, data: EmployeeDto) -> Self {
        Self::new(Status::Created, message, data)
    }

    pub fn updated(message: impl Into<String>, data: EmployeeDto) -> Self {
        Self::new(Status::Updated, message, data)
    }
}

impl Envelope<i64> {
    pub fn deleted(message: impl Into<String>, id: i64) -> Self {
        Self::new(Status::Deleted, message, id)
    }

    /// NOT_FOUND echoes the missing id back as the payload.
    pub fn not_found(message: impl Into<String>, id: i64) -> Self {
        Self::new(Status::NotFound, message, id)
    }
}

impl Envelope<String> {
    /// ERROR always carries a failure description, never domain data.
    pub fn error(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Status::Error, message, description.into())
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
