use crate::errors::internal::{CredentialError, InternalError, RecordError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for administrative endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Administrative (CRUD) operation error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// Request data is invalid or conflicts with existing records
    #[oai(status = 400)]
    BadRequest(Json<AdminErrorResponse>),

    /// Missing, invalid or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<AdminErrorResponse>),

    /// Caller account is not active
    #[oai(status = 403)]
    Forbidden(Json<AdminErrorResponse>),

    /// Requested record does not exist
    #[oai(status = 404)]
    NotFound(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    fn response(error: &str, message: String, status_code: u16) -> Json<AdminErrorResponse> {
        Json(AdminErrorResponse {
            error: error.to_string(),
            message,
            status_code,
        })
    }

    /// Create a BadRequest error
    pub fn bad_request(message: String) -> Self {
        AdminError::BadRequest(Self::response("bad_request", message, 400))
    }

    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        AdminError::Unauthorized(Self::response(
            "unauthorized",
            "Could not validate credentials".to_string(),
            401,
        ))
    }

    /// Create a Forbidden error
    pub fn forbidden(message: String) -> Self {
        AdminError::Forbidden(Self::response("forbidden", message, 403))
    }

    /// Create a NotFound error
    pub fn not_found(message: String) -> Self {
        AdminError::NotFound(Self::response("not_found", message, 404))
    }

    /// Convert InternalError to AdminError
    ///
    /// Infrastructure failures are logged and hidden behind a generic 500.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::Record(RecordError::NotFound { .. }) => Self::not_found(err.to_string()),
            InternalError::Record(RecordError::Duplicate { .. })
            | InternalError::Record(RecordError::InvalidReference(_)) => {
                tracing::debug!("Rejected administrative request: {}", err);
                Self::bad_request(err.to_string())
            }
            InternalError::Credential(CredentialError::InvalidToken { .. })
            | InternalError::Credential(CredentialError::ExpiredToken(_))
            | InternalError::Credential(CredentialError::UserIdNotFound { .. }) => {
                tracing::debug!("Rejected bearer token: {}", err);
                Self::unauthorized()
            }
            InternalError::Credential(CredentialError::UserNotActive { .. }) => {
                Self::forbidden("User inactive or locked".to_string())
            }
            _ => {
                tracing::error!("Unexpected error in admin operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        AdminError::InternalError(Self::response(
            "internal_error",
            "An internal error occurred".to_string(),
            500,
        ))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AdminError::BadRequest(json)
            | AdminError::Unauthorized(json)
            | AdminError::Forbidden(json)
            | AdminError::NotFound(json)
            | AdminError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AdminError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
