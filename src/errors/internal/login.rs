use thiserror::Error;

/// Reasons a login attempt is refused
///
/// The display strings are part of the API contract: clients read the
/// remaining-attempts count and the lockout text to decide whether to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Unknown username or wrong password; the two are never distinguished
    #[error("{}", invalid_credentials_message(.remaining_attempts))]
    InvalidCredentials { remaining_attempts: Option<u32> },

    #[error("User locked. Maximum {max_attempts} failed attempts")]
    Locked { max_attempts: u32 },

    #[error("User inactive")]
    Inactive,
}

fn invalid_credentials_message(remaining_attempts: &Option<u32>) -> String {
    match remaining_attempts {
        Some(remaining) => format!("Invalid username or password. Remaining attempts: {}", remaining),
        None => "Invalid username or password".to_string(),
    }
}
