use sea_orm::entity::prelude::*;

use crate::errors::internal::RecordError;
use crate::errors::InternalError;

/// Lifecycle status shared by every entity, stored as the `status_id` column
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum RecordStatus {
    #[sea_orm(num_value = 1)]
    Active,
    #[sea_orm(num_value = 2)]
    Inactive,
    #[sea_orm(num_value = 3)]
    Locked,
}

impl RecordStatus {
    /// Numeric id as exposed over the API
    pub fn id(&self) -> i32 {
        self.to_value()
    }

    /// Parse a numeric status id received from a client
    pub fn from_id(id: i32) -> Result<Self, InternalError> {
        Self::try_from_value(&id)
            .map_err(|_| RecordError::InvalidReference(format!("Unknown status id: {}", id)).into())
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

/// Reference table holding a human-readable description per status id
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
