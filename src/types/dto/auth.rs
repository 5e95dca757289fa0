use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::auth::IssuedToken;

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Form-encoded login, as sent by OAuth2 password-flow clients
#[derive(Object, Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response model containing the access token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(token: IssuedToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: "bearer".to_string(),
            expires_in: token.expires_in,
        }
    }
}

/// The authenticated caller's own account
#[derive(Object, Debug)]
pub struct MeResponse {
    pub user_id: i32,
    pub username: String,
    pub profile_id: Option<i32>,
    pub status_id: i32,
    pub employee_id: Option<i32>,

    /// Consecutive failed logins since the last success
    pub failed_attempts: i32,

    pub employee_name: Option<String>,
    pub profile_description: Option<String>,
}

#[derive(Object, Debug)]
pub struct ChangePasswordRequest {
    pub current_password: String,

    #[oai(validator(min_length = 1))]
    pub new_password: String,
}
