// Stores layer - Data access and repository pattern
pub mod credential_store;
pub mod employee_store;
pub mod menu_store;
pub mod profile_store;
pub mod user_store;

pub use credential_store::{CredentialStore, DbCredentialStore};
pub use employee_store::{EmployeeChanges, EmployeeStore, LinkedUser, NewEmployee};
pub use menu_store::{MenuChanges, MenuStore, NewMenu};
pub use profile_store::ProfileStore;
pub use user_store::{NewUser, UserChanges, UserStore};
