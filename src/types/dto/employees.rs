use poem_openapi::Object;

use crate::stores::LinkedUser;
use crate::types::db::employee;

use super::rfc3339;

/// Request to create an employee, optionally with a login account
#[derive(Object, Debug)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub status_id: i32,

    /// Also create a user account linked to this employee
    #[oai(default)]
    pub create_user: bool,

    /// Required when `create_user` is set
    pub username: Option<String>,

    /// Required when `create_user` is set
    pub password: Option<String>,

    /// Required when `create_user` is set
    pub profile_id: Option<i32>,
}

/// Partial update; omitted fields are left unchanged
#[derive(Object, Debug, Default)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,

    /// Also applied to the linked user account
    pub status_id: Option<i32>,
}

#[derive(Object, Debug)]
pub struct EmployeeResponse {
    pub employee_id: i32,
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub status_id: i32,
    pub created_at: String,
}

impl From<employee::Model> for EmployeeResponse {
    fn from(e: employee::Model) -> Self {
        Self {
            employee_id: e.id,
            name: e.name,
            national_id: e.national_id,
            phone: e.phone,
            mobile: e.mobile,
            address: e.address,
            nationality: e.nationality,
            status_id: e.status_id.id(),
            created_at: rfc3339(e.created_at),
        }
    }
}

/// Employee plus a summary of its linked user account
#[derive(Object, Debug)]
pub struct EmployeeWithUserResponse {
    pub employee_id: i32,
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub status_id: i32,
    pub created_at: String,
    pub has_user: bool,
    pub user_id: Option<i32>,
    pub username: Option<String>,

    /// Description of the linked user's status
    pub user_status: Option<String>,
}

impl EmployeeWithUserResponse {
    pub fn new(e: employee::Model, linked: Option<LinkedUser>) -> Self {
        Self {
            employee_id: e.id,
            name: e.name,
            national_id: e.national_id,
            phone: e.phone,
            mobile: e.mobile,
            address: e.address,
            nationality: e.nationality,
            status_id: e.status_id.id(),
            created_at: rfc3339(e.created_at),
            has_user: linked.is_some(),
            user_id: linked.as_ref().map(|u| u.user_id),
            username: linked.as_ref().map(|u| u.username.clone()),
            user_status: linked.map(|u| u.status_description),
        }
    }
}
