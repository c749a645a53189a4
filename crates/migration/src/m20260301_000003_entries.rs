use sea_orm_migration::prelude::*;

use super::{
    m20260301_000001_reference::{Statuses, WriteTypes},
    m20260301_000002_hierarchy::{Categories, Subcategories},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(Entries::Date).date().not_null())
                    .col(ColumnDef::new(Entries::Status).string_len(15).not_null())
                    .col(ColumnDef::new(Entries::WriteType).string_len(20).not_null())
                    .col(ColumnDef::new(Entries::Category).string_len(30).not_null())
                    .col(ColumnDef::new(Entries::Subcategory).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Entries::AmountMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Entries::Comment).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-status")
                            .from(Entries::Table, Entries::Status)
                            .to(Statuses::Table, Statuses::Status)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-write_type")
                            .from(Entries::Table, Entries::WriteType)
                            .to(WriteTypes::Table, WriteTypes::WriteType)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-category")
                            .from(Entries::Table, Entries::Category)
                            .to(Categories::Table, Categories::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-subcategory")
                            .from(Entries::Table, Entries::Subcategory)
                            .to(Subcategories::Table, Subcategories::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-date")
                    .table(Entries::Table)
                    .col(Entries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Entries {
    Table,
    Id,
    Date,
    Status,
    WriteType,
    Category,
    Subcategory,
    AmountMinor,
    Comment,
}
