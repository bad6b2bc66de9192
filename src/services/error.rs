//! Service layer error
use validator::ValidationErrors;

use remote::error::Error as RemoteError;

#[derive(Debug, Fail)]
pub enum ServiceError {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Validation error: {}", _0)]
    Validate(ValidationErrors),
    #[fail(display = "Remote filter error: {}", _0)]
    RemoteFilter(String),
    #[fail(display = "Unknown error: {}", _0)]
    Unknown(String),
}

impl From<RemoteError> for ServiceError {
    fn from(err: RemoteError) -> Self {
        ServiceError::RemoteFilter(format!("{}", err))
    }
}
