use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::providers::CredentialHasher;
use crate::stores::{NewUser, UserChanges, UserStore};
use crate::types::db::RecordStatus;
use crate::types::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::types::internal::context::RequestContext;

/// Administrative user account maintenance
pub struct UserCoordinator {
    db: DatabaseConnection,
    user_store: Arc<UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            user_store: app_data.user_store.clone(),
            hasher: app_data.hasher.clone(),
        }
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<UserResponse>, InternalError> {
        let users = self.user_store.list(&self.db, skip, limit).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, user_id: i32) -> Result<UserResponse, InternalError> {
        Ok(self.user_store.get_by_id(&self.db, user_id).await?.into())
    }

    pub async fn create(&self, ctx: &RequestContext, request: CreateUserRequest) -> Result<UserResponse, InternalError> {
        let status = RecordStatus::from_id(request.status_id)?;
        let password_hash = self.hasher.hash(&request.password).await?;

        let created = self
            .user_store
            .create(
                &self.db,
                NewUser {
                    username: request.username,
                    password_hash,
                    profile_id: request.profile_id,
                    status,
                    employee_id: request.employee_id,
                },
            )
            .await?;

        tracing::info!(request_id = %ctx.request_id, user_id = created.id, "User created");
        Ok(created.into())
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        user_id: i32,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, InternalError> {
        let changes = UserChanges {
            username: request.username,
            profile_id: request.profile_id,
            status: request.status_id.map(RecordStatus::from_id).transpose()?,
            employee_id: request.employee_id,
        };

        let updated = self.user_store.update(&self.db, user_id, changes).await?;
        tracing::info!(request_id = %ctx.request_id, user_id, "User updated");
        Ok(updated.into())
    }

    pub async fn deactivate(&self, ctx: &RequestContext, user_id: i32) -> Result<(), InternalError> {
        self.user_store.deactivate(&self.db, user_id).await?;
        tracing::info!(request_id = %ctx.request_id, user_id, "User deactivated");
        Ok(())
    }
}
