use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::types::db::{menu, profile_menu, RecordStatus};
use crate::types::internal::MenuNode;

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub description: String,
    pub url: Option<String>,
    pub parent_id: Option<i32>,
    pub level: i32,
    pub sort_order: i32,
    pub status: RecordStatus,
}

/// Partial update; the outer `None` leaves a column unchanged and
/// `Some(None)` clears a nullable one
#[derive(Debug, Clone, Default)]
pub struct MenuChanges {
    pub description: Option<String>,
    pub url: Option<Option<String>>,
    pub parent_id: Option<Option<i32>>,
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
    pub status: Option<RecordStatus>,
}

/// MenuStore manages the flat menu table
pub struct MenuStore;

impl MenuStore {
    pub fn new() -> Self {
        Self
    }

    /// Administrative listing ordered by level, then sort order
    pub async fn list(&self, conn: &impl ConnectionTrait, include_inactive: bool) -> Result<Vec<MenuNode>, InternalError> {
        let mut query = menu::Entity::find();
        if !include_inactive {
            query = query.filter(menu::Column::StatusId.eq(RecordStatus::Active));
        }

        let menus = query
            .order_by_asc(menu::Column::Level)
            .order_by_asc(menu::Column::SortOrder)
            .order_by_asc(menu::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_menus", e))?;

        Ok(menus.into_iter().map(MenuNode::from).collect())
    }

    pub async fn get_by_id(&self, conn: &impl ConnectionTrait, menu_id: i32) -> Result<MenuNode, InternalError> {
        Ok(self.get_model(conn, menu_id).await?.into())
    }

    async fn get_model(&self, conn: &impl ConnectionTrait, menu_id: i32) -> Result<menu::Model, InternalError> {
        menu::Entity::find_by_id(menu_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_menu_by_id", e))?
            .ok_or_else(|| RecordError::not_found("menu", menu_id).into())
    }

    async fn ensure_parent_exists(&self, conn: &impl ConnectionTrait, parent_id: i32) -> Result<(), InternalError> {
        let parent = menu::Entity::find_by_id(parent_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_parent_menu", e))?;

        if parent.is_none() {
            return Err(RecordError::InvalidReference(format!("Parent menu {} does not exist", parent_id)).into());
        }
        Ok(())
    }

    pub async fn create(&self, conn: &impl ConnectionTrait, new: NewMenu) -> Result<MenuNode, InternalError> {
        if let Some(parent_id) = new.parent_id {
            self.ensure_parent_exists(conn, parent_id).await?;
        }

        let created = menu::ActiveModel {
            description: Set(new.description),
            url: Set(new.url),
            parent_id: Set(new.parent_id),
            level: Set(new.level),
            sort_order: Set(new.sort_order),
            status_id: Set(new.status),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_menu", e))?;

        Ok(created.into())
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        menu_id: i32,
        changes: MenuChanges,
    ) -> Result<MenuNode, InternalError> {
        let existing = self.get_model(conn, menu_id).await?;

        if let Some(Some(parent_id)) = changes.parent_id {
            if parent_id == menu_id {
                return Err(RecordError::InvalidReference("A menu cannot be its own parent".to_string()).into());
            }
            self.ensure_parent_exists(conn, parent_id).await?;
        }

        let mut model: menu::ActiveModel = existing.into();
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if let Some(url) = changes.url {
            model.url = Set(url);
        }
        if let Some(parent_id) = changes.parent_id {
            model.parent_id = Set(parent_id);
        }
        if let Some(level) = changes.level {
            model.level = Set(level);
        }
        if let Some(sort_order) = changes.sort_order {
            model.sort_order = Set(sort_order);
        }
        if let Some(status) = changes.status {
            model.status_id = Set(status);
        }

        let updated = model.update(conn).await.map_err(|e| InternalError::database("update_menu", e))?;
        Ok(updated.into())
    }

    /// Hard delete; children become roots and profile assignments go away
    pub async fn delete(&self, conn: &impl ConnectionTrait, menu_id: i32) -> Result<(), InternalError> {
        self.get_model(conn, menu_id).await?;

        profile_menu::Entity::delete_many()
            .filter(profile_menu::Column::MenuId.eq(menu_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_menu_assignments", e))?;

        menu::Entity::update_many()
            .col_expr(menu::Column::ParentId, Expr::value(Option::<i32>::None))
            .filter(menu::Column::ParentId.eq(menu_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("detach_menu_children", e))?;

        menu::Entity::delete_by_id(menu_id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_menu", e))?;
        Ok(())
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}
