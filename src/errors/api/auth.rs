use crate::errors::internal::{CredentialError, InternalError, LoginError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// Too many failed attempts
    #[oai(status = 403)]
    AccountLocked(Json<AuthErrorResponse>),

    /// Account has been deactivated
    #[oai(status = 403)]
    AccountInactive(Json<AuthErrorResponse>),

    /// Current password is incorrect (for password change)
    #[oai(status = 400)]
    IncorrectPassword(Json<AuthErrorResponse>),

    /// User referenced by the request does not exist
    #[oai(status = 404)]
    UserNotFound(Json<AuthErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<AuthErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    fn response(error: &str, message: String, status_code: u16) -> Json<AuthErrorResponse> {
        Json(AuthErrorResponse {
            error: error.to_string(),
            message,
            status_code,
        })
    }

    /// Create an InvalidCredentials error with an explicit message
    pub fn invalid_credentials(message: String) -> Self {
        AuthError::InvalidCredentials(Self::response("invalid_credentials", message, 401))
    }

    /// Create an AccountLocked error
    pub fn account_locked(message: String) -> Self {
        AuthError::AccountLocked(Self::response("account_locked", message, 403))
    }

    /// Create an AccountInactive error
    pub fn account_inactive(message: String) -> Self {
        AuthError::AccountInactive(Self::response("account_inactive", message, 403))
    }

    /// Create an IncorrectPassword error
    pub fn incorrect_password() -> Self {
        AuthError::IncorrectPassword(Self::response(
            "incorrect_password",
            "Current password is incorrect".to_string(),
            400,
        ))
    }

    /// Create a UserNotFound error
    pub fn user_not_found() -> Self {
        AuthError::UserNotFound(Self::response("user_not_found", "User not found".to_string(), 404))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Self::response(
            "invalid_token",
            "Could not validate credentials".to_string(),
            401,
        ))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Self::response("expired_token", "JWT has expired".to_string(), 401))
    }

    /// Convert InternalError to AuthError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(db_err) => {
                tracing::error!("Database error in auth operation: {}", db_err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
            InternalError::Crypto { operation, .. } => {
                tracing::error!("Crypto error in {}: {}", operation, err);
                Self::internal_server_error()
            }

            // Login rejections carry their client-facing text
            InternalError::Login(login_err) => match login_err {
                LoginError::InvalidCredentials { .. } => {
                    tracing::debug!("Invalid credentials attempt");
                    Self::invalid_credentials(login_err.to_string())
                }
                LoginError::Locked { .. } => Self::account_locked(login_err.to_string()),
                LoginError::Inactive => Self::account_inactive(login_err.to_string()),
            },

            InternalError::Credential(CredentialError::IncorrectPassword) => {
                tracing::debug!("Incorrect password for password change");
                Self::incorrect_password()
            }
            InternalError::Credential(CredentialError::UserIdNotFound { user_id }) => {
                tracing::debug!("User id not found: {}", user_id);
                Self::user_not_found()
            }
            InternalError::Credential(CredentialError::UserNotActive { .. }) => {
                Self::account_inactive("User inactive or locked".to_string())
            }
            InternalError::Credential(CredentialError::InvalidToken { token_type, reason }) => {
                tracing::debug!("Invalid token: {} - {}", token_type, reason);
                Self::invalid_token()
            }
            InternalError::Credential(CredentialError::ExpiredToken(token_type)) => {
                tracing::debug!("Expired token: {}", token_type);
                Self::expired_token()
            }

            // Other domain errors that shouldn't appear in auth context
            _ => {
                tracing::error!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        AuthError::InternalError(Self::response(
            "internal_error",
            "An internal error occurred".to_string(),
            500,
        ))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json)
            | AuthError::AccountLocked(json)
            | AuthError::AccountInactive(json)
            | AuthError::IncorrectPassword(json)
            | AuthError::UserNotFound(json)
            | AuthError::InvalidToken(json)
            | AuthError::ExpiredToken(json)
            | AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
