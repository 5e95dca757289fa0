use sea_orm::entity::prelude::*;

use super::status::RecordStatus;

/// Navigation entry; `parent_id` references another row of this table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub url: Option<String>,
    #[sea_orm(indexed)]
    pub parent_id: Option<i32>,
    pub level: i32,
    pub sort_order: i32,
    pub status_id: RecordStatus,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_delete = "SetNull"
    )]
    Parent,
    #[sea_orm(has_many = "super::profile_menu::Entity")]
    ProfileMenu,
}

impl Related<super::profile_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileMenu.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        super::profile_menu::Relation::Profile.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::profile_menu::Relation::Menu.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
