use sea_orm_migration::prelude::*;

use super::m20260301_000001_reference::WriteTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string_len(30)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::ParentType)
                            .string_len(20)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-categories-parent_type")
                            .from(Categories::Table, Categories::ParentType)
                            .to(WriteTypes::Table, WriteTypes::WriteType)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-categories-parent_type")
                    .table(Categories::Table)
                    .col(Categories::ParentType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subcategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subcategories::Name)
                            .string_len(30)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subcategories::ParentCategory)
                            .string_len(30)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-subcategories-parent_category")
                            .from(Subcategories::Table, Subcategories::ParentCategory)
                            .to(Categories::Table, Categories::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-subcategories-parent_category")
                    .table(Subcategories::Table)
                    .col(Subcategories::ParentCategory)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subcategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Categories {
    Table,
    Name,
    ParentType,
}

#[derive(Iden)]
pub enum Subcategories {
    Table,
    Name,
    ParentCategory,
}
