use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create status reference table
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Status::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Status::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create employees table
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Employees::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::NationalId).string().not_null().unique_key())
                    .col(ColumnDef::new(Employees::Phone).string())
                    .col(ColumnDef::new(Employees::Mobile).string())
                    .col(ColumnDef::new(Employees::Address).string())
                    .col(ColumnDef::new(Employees::Nationality).string())
                    .col(ColumnDef::new(Employees::StatusId).integer().not_null())
                    .col(ColumnDef::new(Employees::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_status_id")
                            .from(Employees::Table, Employees::StatusId)
                            .to(Status::Table, Status::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // Create profiles table
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Profiles::Description).string().not_null())
                    .col(ColumnDef::new(Profiles::StatusId).integer().not_null())
                    .col(ColumnDef::new(Profiles::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_status_id")
                            .from(Profiles::Table, Profiles::StatusId)
                            .to(Status::Table, Status::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // Create menus table (self-referencing hierarchy)
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Menus::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Menus::Description).string().not_null())
                    .col(ColumnDef::new(Menus::Url).string())
                    .col(ColumnDef::new(Menus::ParentId).integer())
                    .col(ColumnDef::new(Menus::Level).integer().not_null().default(0))
                    .col(ColumnDef::new(Menus::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Menus::StatusId).integer().not_null())
                    .col(ColumnDef::new(Menus::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menus_parent_id")
                            .from(Menus::Table, Menus::ParentId)
                            .to(Menus::Table, Menus::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menus_status_id")
                            .from(Menus::Table, Menus::StatusId)
                            .to(Status::Table, Status::Id)
                    )
                    .to_owned(),
            )
            .await?;

        // Create profile_menus association table
        manager
            .create_table(
                Table::create()
                    .table(ProfileMenus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProfileMenus::ProfileId).integer().not_null())
                    .col(ColumnDef::new(ProfileMenus::MenuId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ProfileMenus::ProfileId)
                            .col(ProfileMenus::MenuId)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_menus_profile_id")
                            .from(ProfileMenus::Table, ProfileMenus::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_menus_menu_id")
                            .from(ProfileMenus::Table, ProfileMenus::MenuId)
                            .to(Menus::Table, Menus::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::ProfileId).integer())
                    .col(ColumnDef::new(Users::StatusId).integer().not_null())
                    .col(ColumnDef::new(Users::EmployeeId).integer())
                    .col(ColumnDef::new(Users::FailedAttempts).integer().not_null().default(0))
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_profile_id")
                            .from(Users::Table, Users::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_status_id")
                            .from(Users::Table, Users::StatusId)
                            .to(Status::Table, Status::Id)
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_employee_id")
                            .from(Users::Table, Users::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_employee_id")
                    .table(Users::Table)
                    .col(Users::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menus_parent_id")
                    .table(Menus::Table)
                    .col(Menus::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileMenus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Status {
    Table,
    Id,
    Description,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    Name,
    NationalId,
    Phone,
    Mobile,
    Address,
    Nationality,
    StatusId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Description,
    StatusId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Menus {
    Table,
    Id,
    Description,
    Url,
    ParentId,
    Level,
    SortOrder,
    StatusId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProfileMenus {
    Table,
    ProfileId,
    MenuId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    ProfileId,
    StatusId,
    EmployeeId,
    FailedAttempts,
    CreatedAt,
}
