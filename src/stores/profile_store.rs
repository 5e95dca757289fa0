use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::types::db::{menu, profile, profile_menu, RecordStatus};

/// ProfileStore manages profiles and their menu assignments
pub struct ProfileStore;

impl ProfileStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self, conn: &impl ConnectionTrait) -> Result<Vec<profile::Model>, InternalError> {
        profile::Entity::find()
            .order_by_asc(profile::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_profiles", e))
    }

    pub async fn get_by_id(&self, conn: &impl ConnectionTrait, profile_id: i32) -> Result<profile::Model, InternalError> {
        profile::Entity::find_by_id(profile_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_profile_by_id", e))?
            .ok_or_else(|| RecordError::not_found("profile", profile_id).into())
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        description: String,
        status: RecordStatus,
    ) -> Result<profile::Model, InternalError> {
        profile::ActiveModel {
            description: Set(description),
            status_id: Set(status),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_profile", e))
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        profile_id: i32,
        description: Option<String>,
        status: Option<RecordStatus>,
    ) -> Result<profile::Model, InternalError> {
        let mut model: profile::ActiveModel = self.get_by_id(conn, profile_id).await?.into();
        if let Some(description) = description {
            model.description = Set(description);
        }
        if let Some(status) = status {
            model.status_id = Set(status);
        }
        model.update(conn).await.map_err(|e| InternalError::database("update_profile", e))
    }

    /// Remove the profile and its menu assignments
    ///
    /// Users keep existing with no profile.
    pub async fn delete(&self, conn: &impl ConnectionTrait, profile_id: i32) -> Result<(), InternalError> {
        self.get_by_id(conn, profile_id).await?;

        profile_menu::Entity::delete_many()
            .filter(profile_menu::Column::ProfileId.eq(profile_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_profile_menus", e))?;

        profile::Entity::delete_by_id(profile_id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_profile", e))?;
        Ok(())
    }

    /// Replace the profile's menu set; returns the number of menus assigned
    ///
    /// Duplicate ids in the request count once. Any unknown id rejects the
    /// whole request without touching the current assignments.
    pub async fn assign_menus(
        &self,
        conn: &impl ConnectionTrait,
        profile_id: i32,
        menu_ids: &[i32],
    ) -> Result<usize, InternalError> {
        self.get_by_id(conn, profile_id).await?;

        let wanted: BTreeSet<i32> = menu_ids.iter().copied().collect();
        let existing = menu::Entity::find()
            .filter(menu::Column::Id.is_in(wanted.iter().copied()))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("check_menus_exist", e))?;

        if existing != wanted.len() as u64 {
            return Err(RecordError::InvalidReference("Some menus do not exist".to_string()).into());
        }

        profile_menu::Entity::delete_many()
            .filter(profile_menu::Column::ProfileId.eq(profile_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("clear_profile_menus", e))?;

        if !wanted.is_empty() {
            let rows = wanted.iter().map(|&menu_id| profile_menu::ActiveModel {
                profile_id: Set(profile_id),
                menu_id: Set(menu_id),
            });
            profile_menu::Entity::insert_many(rows)
                .exec(conn)
                .await
                .map_err(|e| InternalError::database("insert_profile_menus", e))?;
        }

        Ok(wanted.len())
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
