//! Migration: Create the telephones table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Telephones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Telephones::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Telephones::Number).string_len(20).not_null())
                    .col(ColumnDef::new(Telephones::UserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_telephones_user_id")
                            .from(Telephones::Table, Telephones::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_telephones_user_id")
                    .table(Telephones::Table)
                    .col(Telephones::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_telephones_user_id")
                    .table(Telephones::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Telephones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Telephones {
    Table,
    Id,
    Number,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
