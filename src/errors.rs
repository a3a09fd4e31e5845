use astra::Response;
use thiserror::Error;

use crate::store::StoreError;

/// Errors originating from either the server logic
/// (routing, missing resources, bad input) or downstream layers (DB, store).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ServerError::NotFound,
            other => ServerError::BadRequest(other.to_string()),
        }
    }
}
