use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionTrait,
};

use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::types::db::{menu, profile_menu, user};
use crate::types::internal::{MenuNode, UserAccount};

/// Storage seam for the authentication engine and the menu tree
///
/// Writes touch only the column they change, so they never overwrite a
/// status set by an administrator. `record_failed_attempt` must be atomic
/// and must never push the counter past the threshold.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_name(&self, username: &str) -> Result<Option<UserAccount>, InternalError>;

    async fn find_user_by_id(&self, user_id: i32) -> Result<Option<UserAccount>, InternalError>;

    /// Set the failed-attempt counter to zero; unknown ids are ignored
    async fn reset_failed_attempts(&self, user_id: i32) -> Result<(), InternalError>;

    /// Replace the stored password hash and nothing else
    async fn set_password_hash(&self, user_id: i32, password_hash: String) -> Result<(), InternalError>;

    /// Add one failure unless the counter already reached `max_attempts`,
    /// then return the stored value
    async fn record_failed_attempt(&self, user_id: i32, max_attempts: u32) -> Result<u32, InternalError>;

    /// Every menu assigned to the profile, regardless of status
    async fn assigned_menus(&self, profile_id: i32) -> Result<Vec<MenuNode>, InternalError>;
}

/// SeaORM-backed [`CredentialStore`]
pub struct DbCredentialStore {
    db: DatabaseConnection,
}

impl DbCredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for DbCredentialStore {
    async fn find_user_by_name(&self, username: &str) -> Result<Option<UserAccount>, InternalError> {
        let found = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_name", e))?;

        found.map(UserAccount::try_from).transpose()
    }

    async fn find_user_by_id(&self, user_id: i32) -> Result<Option<UserAccount>, InternalError> {
        let found = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))?;

        found.map(UserAccount::try_from).transpose()
    }

    async fn reset_failed_attempts(&self, user_id: i32) -> Result<(), InternalError> {
        user::Entity::update_many()
            .col_expr(user::Column::FailedAttempts, Expr::value(0))
            .filter(user::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("reset_failed_attempts", e))?;

        Ok(())
    }

    async fn set_password_hash(&self, user_id: i32, password_hash: String) -> Result<(), InternalError> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::PasswordHash, Expr::value(password_hash))
            .filter(user::Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("set_password_hash", e))?;

        if result.rows_affected == 0 {
            return Err(RecordError::not_found("user", user_id).into());
        }

        Ok(())
    }

    async fn record_failed_attempt(&self, user_id: i32, max_attempts: u32) -> Result<u32, InternalError> {
        let max_attempts = i32::try_from(max_attempts)
            .map_err(|e| InternalError::parse("max_attempts", e.to_string()))?;

        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        // Counter stops at the threshold; a refused increment means already locked
        user::Entity::update_many()
            .col_expr(
                user::Column::FailedAttempts,
                Expr::col(user::Column::FailedAttempts).add(1),
            )
            .filter(user::Column::Id.eq(user_id))
            .filter(user::Column::FailedAttempts.lt(max_attempts))
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("increment_failed_attempts", e))?;

        let updated = user::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("read_failed_attempts", e))?
            .ok_or_else(|| InternalError::from(RecordError::not_found("user", user_id)))?;

        txn.commit().await.map_err(InternalError::transaction_commit)?;

        u32::try_from(updated.failed_attempts).map_err(|e| InternalError::parse("failed_attempts", e.to_string()))
    }

    async fn assigned_menus(&self, profile_id: i32) -> Result<Vec<MenuNode>, InternalError> {
        let menus = menu::Entity::find()
            .join(JoinType::InnerJoin, menu::Relation::ProfileMenu.def())
            .filter(profile_menu::Column::ProfileId.eq(profile_id))
            .order_by_asc(menu::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("assigned_menus", e))?;

        Ok(menus.into_iter().map(MenuNode::from).collect())
    }
}
