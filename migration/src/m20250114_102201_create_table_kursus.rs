/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kursus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Kursus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Kursus::Title).string().not_null())
                    .col(ColumnDef::new(Kursus::Description).text().not_null())
                    .col(ColumnDef::new(Kursus::Instructor).string().not_null())
                    .col(ColumnDef::new(Kursus::Duration).integer().not_null())
                    .col(
                        ColumnDef::new(Kursus::LessonCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Kursus::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Kursus::Thumbnail).string())
                    .col(ColumnDef::new(Kursus::CategoryId).uuid())
                    .col(ColumnDef::new(Kursus::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-kursus-category_id")
                            .from(Kursus::Table, Kursus::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kursus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Kursus {
    Table,
    Id,
    Title,
    Description,
    Instructor,
    Duration,
    LessonCount,
    Rating,
    Thumbnail,
    CategoryId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
}
