use std::sync::Arc;

use poem_openapi::types::MaybeUndefined;
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::coordinators::{begin, commit};
use crate::errors::InternalError;
use crate::providers::MenuProvider;
use crate::stores::{MenuChanges, MenuStore, NewMenu};
use crate::types::db::RecordStatus;
use crate::types::dto::menu::{CreateMenuRequest, MenuResponse, MenuTreeResponse, UpdateMenuRequest};
use crate::types::internal::context::RequestContext;
use crate::types::internal::UserAccount;

/// Menu tree for the caller plus administrative menu maintenance
pub struct MenuCoordinator {
    db: DatabaseConnection,
    menu_provider: MenuProvider,
    menu_store: Arc<MenuStore>,
}

impl MenuCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            menu_provider: MenuProvider::new(app_data.credential_store.clone()),
            menu_store: app_data.menu_store.clone(),
        }
    }

    pub async fn tree_for(&self, ctx: &RequestContext, account: &UserAccount) -> Result<Vec<MenuTreeResponse>, InternalError> {
        let tree = self.menu_provider.menu_tree_for_profile(ctx, account.profile_id).await?;
        Ok(tree.into_iter().map(MenuTreeResponse::from).collect())
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<MenuResponse>, InternalError> {
        let menus = self.menu_store.list(&self.db, include_inactive).await?;
        Ok(menus.into_iter().map(MenuResponse::from).collect())
    }

    pub async fn get(&self, menu_id: i32) -> Result<MenuResponse, InternalError> {
        Ok(self.menu_store.get_by_id(&self.db, menu_id).await?.into())
    }

    pub async fn create(&self, ctx: &RequestContext, request: CreateMenuRequest) -> Result<MenuResponse, InternalError> {
        let new = NewMenu {
            description: request.description,
            url: request.url,
            parent_id: request.parent_id,
            level: request.level,
            sort_order: request.sort_order,
            status: RecordStatus::from_id(request.status_id)?,
        };

        let created = self.menu_store.create(&self.db, new).await?;
        tracing::info!(request_id = %ctx.request_id, menu_id = created.id, "Menu created");
        Ok(created.into())
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        menu_id: i32,
        request: UpdateMenuRequest,
    ) -> Result<MenuResponse, InternalError> {
        let changes = MenuChanges {
            description: request.description,
            url: patch(request.url),
            parent_id: patch(request.parent_id),
            level: request.level,
            sort_order: request.sort_order,
            status: request.status_id.map(RecordStatus::from_id).transpose()?,
        };

        let updated = self.menu_store.update(&self.db, menu_id, changes).await?;
        tracing::info!(request_id = %ctx.request_id, menu_id, "Menu updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, ctx: &RequestContext, menu_id: i32) -> Result<(), InternalError> {
        let txn = begin(&self.db).await?;
        self.menu_store.delete(&txn, menu_id).await?;
        commit(txn).await?;

        tracing::info!(request_id = %ctx.request_id, menu_id, "Menu deleted");
        Ok(())
    }
}

/// Undefined leaves the column alone, null clears it
fn patch<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}
