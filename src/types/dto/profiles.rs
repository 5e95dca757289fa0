use poem_openapi::Object;

use crate::types::db::profile;

use super::rfc3339;

#[derive(Object, Debug)]
pub struct CreateProfileRequest {
    #[oai(validator(min_length = 1))]
    pub description: String,
    pub status_id: i32,
}

#[derive(Object, Debug, Default)]
pub struct UpdateProfileRequest {
    pub description: Option<String>,
    pub status_id: Option<i32>,
}

#[derive(Object, Debug)]
pub struct ProfileResponse {
    pub profile_id: i32,
    pub description: String,
    pub status_id: i32,
    pub created_at: String,
}

impl From<profile::Model> for ProfileResponse {
    fn from(p: profile::Model) -> Self {
        Self {
            profile_id: p.id,
            description: p.description,
            status_id: p.status_id.id(),
            created_at: rfc3339(p.created_at),
        }
    }
}

/// Replacement set of menus for a profile
#[derive(Object, Debug)]
pub struct AssignMenusRequest {
    pub menu_ids: Vec<i32>,
}
