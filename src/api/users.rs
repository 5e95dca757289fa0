use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, OpenApi};

use crate::api::helpers::{ApiTags, BearerAuth, DEFAULT_PAGE_SIZE, Deleted, authorize};
use crate::coordinators::{AuthCoordinator, UserCoordinator};
use crate::errors::AdminError;
use crate::types::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// User account endpoints
pub struct UsersApi {
    auth_coordinator: Arc<AuthCoordinator>,
    user_coordinator: Arc<UserCoordinator>,
}

impl UsersApi {
    pub fn new(auth_coordinator: Arc<AuthCoordinator>, user_coordinator: Arc<UserCoordinator>) -> Self {
        Self {
            auth_coordinator,
            user_coordinator,
        }
    }
}

#[derive(ApiResponse)]
enum UserCreated {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
}

#[OpenApi]
impl UsersApi {
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn list(
        &self,
        req: &Request,
        auth: BearerAuth,
        skip: Query<Option<u64>>,
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<UserResponse>>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        let users = self
            .user_coordinator
            .list(skip.0.unwrap_or(0), limit.0.unwrap_or(DEFAULT_PAGE_SIZE))
            .await?;
        Ok(Json(users))
    }

    #[oai(path = "/users/:user_id", method = "get", tag = "ApiTags::Users")]
    async fn get(&self, req: &Request, auth: BearerAuth, user_id: Path<i32>) -> Result<Json<UserResponse>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.user_coordinator.get(user_id.0).await?))
    }

    /// Create a user; the password is stored hashed and the counter starts at zero
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn create(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<CreateUserRequest>,
    ) -> Result<UserCreated, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        let created = self.user_coordinator.create(&ctx, body.0).await?;
        Ok(UserCreated::Created(Json(created)))
    }

    #[oai(path = "/users/:user_id", method = "put", tag = "ApiTags::Users")]
    async fn update(
        &self,
        req: &Request,
        auth: BearerAuth,
        user_id: Path<i32>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<UserResponse>, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.user_coordinator.update(&ctx, user_id.0, body.0).await?))
    }

    /// Deactivate a user account
    #[oai(path = "/users/:user_id", method = "delete", tag = "ApiTags::Users")]
    async fn delete(&self, req: &Request, auth: BearerAuth, user_id: Path<i32>) -> Result<Deleted, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        self.user_coordinator.deactivate(&ctx, user_id.0).await?;
        Ok(Deleted::NoContent)
    }
}
