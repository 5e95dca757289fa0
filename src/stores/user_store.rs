use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::types::db::{employee, profile, user, RecordStatus};

/// Fields for a new account; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub profile_id: Option<i32>,
    pub status: RecordStatus,
    pub employee_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub profile_id: Option<i32>,
    pub status: Option<RecordStatus>,
    pub employee_id: Option<i32>,
}

/// UserStore handles administrative reads and writes of user accounts
pub struct UserStore;

impl UserStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self, conn: &impl ConnectionTrait, skip: u64, limit: u64) -> Result<Vec<user::Model>, InternalError> {
        user::Entity::find()
            .order_by_asc(user::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    pub async fn get_by_id(&self, conn: &impl ConnectionTrait, user_id: i32) -> Result<user::Model, InternalError> {
        user::Entity::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))?
            .ok_or_else(|| RecordError::not_found("user", user_id).into())
    }

    async fn ensure_username_free(&self, conn: &impl ConnectionTrait, username: &str) -> Result<(), InternalError> {
        let taken = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("check_username", e))?;

        if taken > 0 {
            return Err(RecordError::duplicate("user", "username", username).into());
        }
        Ok(())
    }

    /// Insert a new account with a zero failed-attempt counter
    pub async fn create(&self, conn: &impl ConnectionTrait, new: NewUser) -> Result<user::Model, InternalError> {
        self.ensure_username_free(conn, &new.username).await?;

        user::ActiveModel {
            username: Set(new.username),
            password_hash: Set(new.password_hash),
            profile_id: Set(new.profile_id),
            status_id: Set(new.status),
            employee_id: Set(new.employee_id),
            failed_attempts: Set(0),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_user", e))
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<user::Model, InternalError> {
        let existing = self.get_by_id(conn, user_id).await?;

        if let Some(username) = &changes.username {
            if *username != existing.username {
                self.ensure_username_free(conn, username).await?;
            }
        }

        let mut model: user::ActiveModel = existing.into();
        if let Some(username) = changes.username {
            model.username = Set(username);
        }
        if let Some(profile_id) = changes.profile_id {
            model.profile_id = Set(Some(profile_id));
        }
        if let Some(status) = changes.status {
            model.status_id = Set(status);
        }
        if let Some(employee_id) = changes.employee_id {
            model.employee_id = Set(Some(employee_id));
        }

        model.update(conn).await.map_err(|e| InternalError::database("update_user", e))
    }

    /// Accounts are never removed, only set Inactive
    pub async fn deactivate(&self, conn: &impl ConnectionTrait, user_id: i32) -> Result<(), InternalError> {
        let mut model: user::ActiveModel = self.get_by_id(conn, user_id).await?.into();
        model.status_id = Set(RecordStatus::Inactive);
        model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("deactivate_user", e))?;
        Ok(())
    }

    /// Employee name and profile description shown on the caller's own record
    pub async fn display_names(
        &self,
        conn: &impl ConnectionTrait,
        account: &user::Model,
    ) -> Result<(Option<String>, Option<String>), InternalError> {
        let employee_name = match account.employee_id {
            Some(id) => employee::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(|e| InternalError::database("find_user_employee", e))?
                .map(|e| e.name),
            None => None,
        };

        let profile_description = match account.profile_id {
            Some(id) => profile::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(|e| InternalError::database("find_user_profile", e))?
                .map(|p| p.description),
            None => None,
        };

        Ok((employee_name, profile_description))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
