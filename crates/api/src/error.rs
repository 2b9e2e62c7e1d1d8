use thiserror::Error;

/// Failure classes a service call can produce. Absence of the requested
/// id is a domain outcome, distinct from a store fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no employee with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
