use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_security_schema::Status;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Fixed status rows referenced by id from every other table
const STATUS_ROWS: [(i32, &str); 3] = [
    (1, "Active"),
    (2, "Inactive"),
    (3, "Locked"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Status::Table)
            .columns([Status::Id, Status::Description]);

        for (id, description) in STATUS_ROWS {
            insert
                .values([id.into(), description.into()])
                .map_err(|e| DbErr::Migration(format!("Invalid status row {}: {}", id, e)))?;
        }

        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Status::Table)
            .and_where(Expr::col(Status::Id).is_in(STATUS_ROWS.map(|(id, _)| id)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
