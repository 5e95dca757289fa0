use std::sync::Arc;

use poem::Request;
use poem_openapi::param::Path;
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, OpenApi};

use crate::api::helpers::{ApiTags, BearerAuth, Deleted, authorize};
use crate::coordinators::{AuthCoordinator, ProfileCoordinator};
use crate::errors::AdminError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::profiles::{AssignMenusRequest, CreateProfileRequest, ProfileResponse, UpdateProfileRequest};

/// Profile endpoints
pub struct ProfilesApi {
    auth_coordinator: Arc<AuthCoordinator>,
    profile_coordinator: Arc<ProfileCoordinator>,
}

impl ProfilesApi {
    pub fn new(auth_coordinator: Arc<AuthCoordinator>, profile_coordinator: Arc<ProfileCoordinator>) -> Self {
        Self {
            auth_coordinator,
            profile_coordinator,
        }
    }
}

#[derive(ApiResponse)]
enum ProfileCreated {
    #[oai(status = 201)]
    Created(Json<ProfileResponse>),
}

#[OpenApi]
impl ProfilesApi {
    #[oai(path = "/profiles", method = "get", tag = "ApiTags::Profiles")]
    async fn list(&self, req: &Request, auth: BearerAuth) -> Result<Json<Vec<ProfileResponse>>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.profile_coordinator.list().await?))
    }

    #[oai(path = "/profiles/:profile_id", method = "get", tag = "ApiTags::Profiles")]
    async fn get(
        &self,
        req: &Request,
        auth: BearerAuth,
        profile_id: Path<i32>,
    ) -> Result<Json<ProfileResponse>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.profile_coordinator.get(profile_id.0).await?))
    }

    #[oai(path = "/profiles", method = "post", tag = "ApiTags::Profiles")]
    async fn create(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<CreateProfileRequest>,
    ) -> Result<ProfileCreated, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        let created = self.profile_coordinator.create(&ctx, body.0).await?;
        Ok(ProfileCreated::Created(Json(created)))
    }

    #[oai(path = "/profiles/:profile_id", method = "put", tag = "ApiTags::Profiles")]
    async fn update(
        &self,
        req: &Request,
        auth: BearerAuth,
        profile_id: Path<i32>,
        body: Json<UpdateProfileRequest>,
    ) -> Result<Json<ProfileResponse>, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.profile_coordinator.update(&ctx, profile_id.0, body.0).await?))
    }

    /// Delete a profile and its menu assignments
    #[oai(path = "/profiles/:profile_id", method = "delete", tag = "ApiTags::Profiles")]
    async fn delete(&self, req: &Request, auth: BearerAuth, profile_id: Path<i32>) -> Result<Deleted, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        self.profile_coordinator.delete(&ctx, profile_id.0).await?;
        Ok(Deleted::NoContent)
    }

    /// Replace the set of menus assigned to a profile
    #[oai(path = "/profiles/:profile_id/menus", method = "post", tag = "ApiTags::Profiles")]
    async fn assign_menus(
        &self,
        req: &Request,
        auth: BearerAuth,
        profile_id: Path<i32>,
        body: Json<AssignMenusRequest>,
    ) -> Result<Json<MessageResponse>, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        let message = self
            .profile_coordinator
            .assign_menus(&ctx, profile_id.0, &body.menu_ids)
            .await?;
        Ok(Json(message))
    }
}
