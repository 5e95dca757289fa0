use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    /// Current password did not verify during a password change
    #[error("Current password is incorrect")]
    IncorrectPassword,
    
    #[error("User ID not found: {user_id}")]
    UserIdNotFound { user_id: i32 },

    /// Token subject resolved to a user that is not active
    #[error("User inactive or locked: {user_id}")]
    UserNotActive { user_id: i32 },

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),
    
    #[error("Invalid token: {token_type} - {reason}")]
    InvalidToken {
        token_type: String,
        reason: String,
    },
    
    #[error("Expired token: {0}")]
    ExpiredToken(String),
}

impl CredentialError {
    /// Create an invalid token error
    pub fn invalid_token(token_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token_type: token_type.into(),
            reason: reason.into(),
        }
    }
}
