use sea_orm::entity::prelude::*;

use super::status::RecordStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub status_id: RecordStatus,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::profile_menu::Entity")]
    ProfileMenu,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::profile_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileMenu.def()
    }
}

/// Profiles reach their menus through the `profile_menus` association
impl Related<super::menu::Entity> for Entity {
    fn to() -> RelationDef {
        super::profile_menu::Relation::Menu.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::profile_menu::Relation::Profile.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
