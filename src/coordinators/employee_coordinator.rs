use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::coordinators::{begin, commit};
use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::providers::CredentialHasher;
use crate::stores::{EmployeeChanges, EmployeeStore, NewEmployee, NewUser, UserStore};
use crate::types::db::RecordStatus;
use crate::types::dto::employees::{
    CreateEmployeeRequest, EmployeeResponse, EmployeeWithUserResponse, UpdateEmployeeRequest,
};
use crate::types::internal::context::RequestContext;

/// Employee maintenance, including the optional linked user account
pub struct EmployeeCoordinator {
    db: DatabaseConnection,
    employee_store: Arc<EmployeeStore>,
    user_store: Arc<UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl EmployeeCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            employee_store: app_data.employee_store.clone(),
            user_store: app_data.user_store.clone(),
            hasher: app_data.hasher.clone(),
        }
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<EmployeeResponse>, InternalError> {
        let employees = self.employee_store.list(&self.db, skip, limit).await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    pub async fn get_with_user(&self, employee_id: i32) -> Result<EmployeeWithUserResponse, InternalError> {
        let employee = self.employee_store.get_by_id(&self.db, employee_id).await?;
        let linked = self.employee_store.linked_user(&self.db, employee_id).await?;
        Ok(EmployeeWithUserResponse::new(employee, linked))
    }

    pub async fn get_by_national_id(&self, national_id: &str) -> Result<EmployeeResponse, InternalError> {
        self.employee_store
            .find_by_national_id(&self.db, national_id)
            .await?
            .map(EmployeeResponse::from)
            .ok_or_else(|| RecordError::not_found("employee", national_id).into())
    }

    /// Create the employee and, when asked, its user account in one transaction
    ///
    /// The account starts with the employee's status.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: CreateEmployeeRequest,
    ) -> Result<EmployeeResponse, InternalError> {
        let status = RecordStatus::from_id(request.status_id)?;

        // Hash before opening the transaction; argon2 is slow
        let account = if request.create_user {
            match (request.username, request.password, request.profile_id) {
                (Some(username), Some(password), Some(profile_id)) if !username.is_empty() && !password.is_empty() => {
                    Some((username, self.hasher.hash(&password).await?, profile_id))
                }
                _ => {
                    return Err(RecordError::InvalidReference(
                        "Creating a user requires username, password and profile_id".to_string(),
                    )
                    .into());
                }
            }
        } else {
            None
        };

        let txn = begin(&self.db).await?;

        let employee = self
            .employee_store
            .create(
                &txn,
                NewEmployee {
                    name: request.name,
                    national_id: request.national_id,
                    phone: request.phone,
                    mobile: request.mobile,
                    address: request.address,
                    nationality: request.nationality,
                    status,
                },
            )
            .await?;

        if let Some((username, password_hash, profile_id)) = account {
            let user = self
                .user_store
                .create(
                    &txn,
                    NewUser {
                        username,
                        password_hash,
                        profile_id: Some(profile_id),
                        status,
                        employee_id: Some(employee.id),
                    },
                )
                .await?;
            tracing::info!(request_id = %ctx.request_id, user_id = user.id, "User created for employee");
        }

        commit(txn).await?;

        tracing::info!(request_id = %ctx.request_id, employee_id = employee.id, "Employee created");
        Ok(employee.into())
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        employee_id: i32,
        request: UpdateEmployeeRequest,
    ) -> Result<EmployeeResponse, InternalError> {
        let changes = EmployeeChanges {
            name: request.name,
            national_id: request.national_id,
            phone: request.phone,
            mobile: request.mobile,
            address: request.address,
            nationality: request.nationality,
            status: request.status_id.map(RecordStatus::from_id).transpose()?,
        };

        let txn = begin(&self.db).await?;
        let updated = self.employee_store.update(&txn, employee_id, changes).await?;
        commit(txn).await?;

        tracing::info!(request_id = %ctx.request_id, employee_id, "Employee updated");
        Ok(updated.into())
    }

    /// Deactivate the employee together with its linked user
    pub async fn deactivate(&self, ctx: &RequestContext, employee_id: i32) -> Result<(), InternalError> {
        let txn = begin(&self.db).await?;
        self.employee_store.deactivate(&txn, employee_id).await?;
        commit(txn).await?;

        tracing::info!(request_id = %ctx.request_id, employee_id, "Employee deactivated");
        Ok(())
    }
}
