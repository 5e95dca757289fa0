// Database entities - SeaORM models
pub mod employee;
pub mod menu;
pub mod profile;
pub mod profile_menu;
pub mod status;
pub mod user;

pub use status::RecordStatus;
