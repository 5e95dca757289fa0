// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider and store operations for specific API
// endpoints and own transaction boundaries. They contain no business rules.

pub mod auth_coordinator;
pub mod employee_coordinator;
pub mod menu_coordinator;
pub mod profile_coordinator;
pub mod user_coordinator;

pub use auth_coordinator::AuthCoordinator;
pub use employee_coordinator::EmployeeCoordinator;
pub use menu_coordinator::MenuCoordinator;
pub use profile_coordinator::ProfileCoordinator;
pub use user_coordinator::UserCoordinator;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::InternalError;

pub(crate) async fn begin(db: &DatabaseConnection) -> Result<DatabaseTransaction, InternalError> {
    db.begin().await.map_err(InternalError::transaction_begin)
}

pub(crate) async fn commit(txn: DatabaseTransaction) -> Result<(), InternalError> {
    txn.commit().await.map_err(InternalError::transaction_commit)
}
