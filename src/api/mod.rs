// API layer - HTTP endpoints
pub mod auth;
pub mod employees;
pub mod health;
pub mod helpers;
pub mod menu;
pub mod profiles;
pub mod users;

pub use auth::AuthApi;
pub use employees::EmployeesApi;
pub use health::HealthApi;
pub use menu::MenuApi;
pub use profiles::ProfilesApi;
pub use users::UsersApi;
