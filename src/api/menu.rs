use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, OpenApi};

use crate::api::helpers::{ApiTags, BearerAuth, Deleted, authorize};
use crate::coordinators::{AuthCoordinator, MenuCoordinator};
use crate::errors::AdminError;
use crate::types::dto::menu::{CreateMenuRequest, MenuResponse, MenuTreeResponse, UpdateMenuRequest};

/// Navigation menu endpoints
pub struct MenuApi {
    auth_coordinator: Arc<AuthCoordinator>,
    menu_coordinator: Arc<MenuCoordinator>,
}

impl MenuApi {
    pub fn new(auth_coordinator: Arc<AuthCoordinator>, menu_coordinator: Arc<MenuCoordinator>) -> Self {
        Self {
            auth_coordinator,
            menu_coordinator,
        }
    }
}

#[derive(ApiResponse)]
enum MenuCreated {
    #[oai(status = 201)]
    Created(Json<MenuResponse>),
}

#[OpenApi]
impl MenuApi {
    /// The caller's navigation tree, built from the menus assigned to their profile
    #[oai(path = "/menu/tree", method = "get", tag = "ApiTags::Menu")]
    async fn tree(&self, req: &Request, auth: BearerAuth) -> Result<Json<Vec<MenuTreeResponse>>, AdminError> {
        let (ctx, account) = authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.menu_coordinator.tree_for(&ctx, &account).await?))
    }

    /// Flat listing ordered by level then sort order
    #[oai(path = "/menu", method = "get", tag = "ApiTags::Menu")]
    async fn list(
        &self,
        req: &Request,
        auth: BearerAuth,
        include_inactive: Query<Option<bool>>,
    ) -> Result<Json<Vec<MenuResponse>>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        let menus = self
            .menu_coordinator
            .list(include_inactive.0.unwrap_or(false))
            .await?;
        Ok(Json(menus))
    }

    #[oai(path = "/menu/:menu_id", method = "get", tag = "ApiTags::Menu")]
    async fn get(&self, req: &Request, auth: BearerAuth, menu_id: Path<i32>) -> Result<Json<MenuResponse>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.menu_coordinator.get(menu_id.0).await?))
    }

    #[oai(path = "/menu", method = "post", tag = "ApiTags::Menu")]
    async fn create(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<CreateMenuRequest>,
    ) -> Result<MenuCreated, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        let created = self.menu_coordinator.create(&ctx, body.0).await?;
        Ok(MenuCreated::Created(Json(created)))
    }

    /// Partially update a menu; `null` clears `url` or `parent_id`
    #[oai(path = "/menu/:menu_id", method = "put", tag = "ApiTags::Menu")]
    async fn update(
        &self,
        req: &Request,
        auth: BearerAuth,
        menu_id: Path<i32>,
        body: Json<UpdateMenuRequest>,
    ) -> Result<Json<MenuResponse>, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.menu_coordinator.update(&ctx, menu_id.0, body.0).await?))
    }

    /// Delete a menu; its children move to the top level
    #[oai(path = "/menu/:menu_id", method = "delete", tag = "ApiTags::Menu")]
    async fn delete(&self, req: &Request, auth: BearerAuth, menu_id: Path<i32>) -> Result<Deleted, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        self.menu_coordinator.delete(&ctx, menu_id.0).await?;
        Ok(Deleted::NoContent)
    }
}
