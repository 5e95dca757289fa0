use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::coordinators::{begin, commit};
use crate::errors::InternalError;
use crate::stores::ProfileStore;
use crate::types::db::RecordStatus;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::profiles::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use crate::types::internal::context::RequestContext;

/// Profile maintenance and menu assignment
pub struct ProfileCoordinator {
    db: DatabaseConnection,
    profile_store: Arc<ProfileStore>,
}

impl ProfileCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            profile_store: app_data.profile_store.clone(),
        }
    }

    pub async fn list(&self) -> Result<Vec<ProfileResponse>, InternalError> {
        let profiles = self.profile_store.list(&self.db).await?;
        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    pub async fn get(&self, profile_id: i32) -> Result<ProfileResponse, InternalError> {
        Ok(self.profile_store.get_by_id(&self.db, profile_id).await?.into())
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: CreateProfileRequest,
    ) -> Result<ProfileResponse, InternalError> {
        let status = RecordStatus::from_id(request.status_id)?;
        let created = self.profile_store.create(&self.db, request.description, status).await?;

        tracing::info!(request_id = %ctx.request_id, profile_id = created.id, "Profile created");
        Ok(created.into())
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        profile_id: i32,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, InternalError> {
        let status = request.status_id.map(RecordStatus::from_id).transpose()?;
        let updated = self
            .profile_store
            .update(&self.db, profile_id, request.description, status)
            .await?;

        tracing::info!(request_id = %ctx.request_id, profile_id, "Profile updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, ctx: &RequestContext, profile_id: i32) -> Result<(), InternalError> {
        let txn = begin(&self.db).await?;
        self.profile_store.delete(&txn, profile_id).await?;
        commit(txn).await?;

        tracing::info!(request_id = %ctx.request_id, profile_id, "Profile deleted");
        Ok(())
    }

    pub async fn assign_menus(
        &self,
        ctx: &RequestContext,
        profile_id: i32,
        menu_ids: &[i32],
    ) -> Result<MessageResponse, InternalError> {
        let txn = begin(&self.db).await?;
        let assigned = self.profile_store.assign_menus(&txn, profile_id, menu_ids).await?;
        commit(txn).await?;

        tracing::info!(request_id = %ctx.request_id, profile_id, assigned, "Profile menus replaced");
        Ok(MessageResponse::new(format!("{} menus assigned to profile", assigned)))
    }
}
