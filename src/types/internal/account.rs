use crate::errors::InternalError;
use crate::types::db::{user, RecordStatus};

/// Identity record as seen by the authentication engine
///
/// Loaded from the credential store on every login; the engine keeps no
/// copy between calls and never writes it back whole.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub profile_id: Option<i32>,
    pub status: RecordStatus,
    pub failed_attempts: u32,
    pub employee_id: Option<i32>,
}

impl TryFrom<user::Model> for UserAccount {
    type Error = InternalError;

    fn try_from(u: user::Model) -> Result<Self, Self::Error> {
        let failed_attempts = u32::try_from(u.failed_attempts).map_err(|e| {
            tracing::warn!(user_id = u.id, failed_attempts = u.failed_attempts, "Corrupt failed-attempt counter");
            InternalError::parse("failed_attempts", e.to_string())
        })?;

        Ok(Self {
            id: u.id,
            username: u.username,
            password_hash: u.password_hash,
            profile_id: u.profile_id,
            status: u.status_id,
            failed_attempts,
            employee_id: u.employee_id,
        })
    }
}
