// API request/response models
pub mod auth;
pub mod common;
pub mod employees;
pub mod menu;
pub mod profiles;
pub mod users;

pub(crate) fn rfc3339(timestamp: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .to_rfc3339()
}
