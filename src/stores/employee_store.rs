use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::types::db::{employee, status, user, RecordStatus};

/// Fields for a new employee row
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub status: RecordStatus,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub status: Option<RecordStatus>,
}

/// Summary of the account linked to an employee
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedUser {
    pub user_id: i32,
    pub username: String,
    pub status_description: String,
}

/// EmployeeStore manages employee rows and their link to user accounts
///
/// Methods take the connection so coordinators can run several of them
/// inside one transaction.
pub struct EmployeeStore;

impl EmployeeStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<employee::Model>, InternalError> {
        employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_employees", e))
    }

    pub async fn find_by_id(
        &self,
        conn: &impl ConnectionTrait,
        employee_id: i32,
    ) -> Result<Option<employee::Model>, InternalError> {
        employee::Entity::find_by_id(employee_id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_employee_by_id", e))
    }

    pub async fn get_by_id(
        &self,
        conn: &impl ConnectionTrait,
        employee_id: i32,
    ) -> Result<employee::Model, InternalError> {
        self.find_by_id(conn, employee_id)
            .await?
            .ok_or_else(|| RecordError::not_found("employee", employee_id).into())
    }

    pub async fn find_by_national_id(
        &self,
        conn: &impl ConnectionTrait,
        national_id: &str,
    ) -> Result<Option<employee::Model>, InternalError> {
        employee::Entity::find()
            .filter(employee::Column::NationalId.eq(national_id))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_employee_by_national_id", e))
    }

    async fn ensure_national_id_free(&self, conn: &impl ConnectionTrait, national_id: &str) -> Result<(), InternalError> {
        let taken = employee::Entity::find()
            .filter(employee::Column::NationalId.eq(national_id))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("check_national_id", e))?;

        if taken > 0 {
            return Err(RecordError::duplicate("employee", "national_id", national_id).into());
        }
        Ok(())
    }

    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new: NewEmployee,
    ) -> Result<employee::Model, InternalError> {
        self.ensure_national_id_free(conn, &new.national_id).await?;

        employee::ActiveModel {
            name: Set(new.name),
            national_id: Set(new.national_id),
            phone: Set(new.phone),
            mobile: Set(new.mobile),
            address: Set(new.address),
            nationality: Set(new.nationality),
            status_id: Set(new.status),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_employee", e))
    }

    /// Apply a partial update; a status change is copied to the linked user
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        employee_id: i32,
        changes: EmployeeChanges,
    ) -> Result<employee::Model, InternalError> {
        let existing = self.get_by_id(conn, employee_id).await?;

        if let Some(national_id) = &changes.national_id {
            if *national_id != existing.national_id {
                self.ensure_national_id_free(conn, national_id).await?;
            }
        }

        let mut model: employee::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(national_id) = changes.national_id {
            model.national_id = Set(national_id);
        }
        if let Some(phone) = changes.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(mobile) = changes.mobile {
            model.mobile = Set(Some(mobile));
        }
        if let Some(address) = changes.address {
            model.address = Set(Some(address));
        }
        if let Some(nationality) = changes.nationality {
            model.nationality = Set(Some(nationality));
        }
        if let Some(status) = changes.status {
            model.status_id = Set(status);
        }

        let updated = model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_employee", e))?;

        if let Some(status) = changes.status {
            self.set_linked_user_status(conn, employee_id, status).await?;
        }

        Ok(updated)
    }

    /// Mark the employee and its linked user Inactive
    pub async fn deactivate(&self, conn: &impl ConnectionTrait, employee_id: i32) -> Result<(), InternalError> {
        let existing = self.get_by_id(conn, employee_id).await?;

        let mut model: employee::ActiveModel = existing.into();
        model.status_id = Set(RecordStatus::Inactive);
        model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("deactivate_employee", e))?;

        self.set_linked_user_status(conn, employee_id, RecordStatus::Inactive).await
    }

    async fn set_linked_user_status(
        &self,
        conn: &impl ConnectionTrait,
        employee_id: i32,
        status: RecordStatus,
    ) -> Result<(), InternalError> {
        user::Entity::update_many()
            .col_expr(user::Column::StatusId, Expr::value(status.id()))
            .filter(user::Column::EmployeeId.eq(employee_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("cascade_user_status", e))?;
        Ok(())
    }

    pub async fn linked_user(
        &self,
        conn: &impl ConnectionTrait,
        employee_id: i32,
    ) -> Result<Option<LinkedUser>, InternalError> {
        let Some(account) = user::Entity::find()
            .filter(user::Column::EmployeeId.eq(employee_id))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_linked_user", e))?
        else {
            return Ok(None);
        };

        let status_description = status::Entity::find_by_id(account.status_id.id())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_status_description", e))?
            .map(|s| s.description)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(Some(LinkedUser {
            user_id: account.id,
            username: account.username,
            status_description,
        }))
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}
