use poem_openapi::Object;

use crate::types::db::user;

use super::rfc3339;

#[derive(Object, Debug)]
pub struct CreateUserRequest {
    #[oai(validator(min_length = 1))]
    pub username: String,

    #[oai(validator(min_length = 1))]
    pub password: String,

    pub profile_id: Option<i32>,
    pub status_id: i32,
    pub employee_id: Option<i32>,
}

/// Partial update; passwords change only through `/auth/change-password`
#[derive(Object, Debug, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub profile_id: Option<i32>,
    pub status_id: Option<i32>,
    pub employee_id: Option<i32>,
}

/// User account without its password hash
#[derive(Object, Debug)]
pub struct UserResponse {
    pub user_id: i32,
    pub username: String,
    pub profile_id: Option<i32>,
    pub status_id: i32,
    pub employee_id: Option<i32>,
    pub failed_attempts: i32,
    pub created_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            user_id: u.id,
            username: u.username,
            profile_id: u.profile_id,
            status_id: u.status_id.id(),
            employee_id: u.employee_id,
            failed_attempts: u.failed_attempts,
            created_at: rfc3339(u.created_at),
        }
    }
}
