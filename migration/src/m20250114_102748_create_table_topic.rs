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
                    .table(Topic::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Topic::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Topic::KursusId).uuid().not_null())
                    .col(ColumnDef::new(Topic::Title).string().not_null())
                    .col(ColumnDef::new(Topic::Content).text().not_null())
                    .col(ColumnDef::new(Topic::VideoUrl).string())
                    .col(ColumnDef::new(Topic::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-topic-kursus_id")
                            .from(Topic::Table, Topic::KursusId)
                            .to(Kursus::Table, Kursus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Topic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topic {
    Table,
    Id,
    KursusId,
    Title,
    Content,
    VideoUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Kursus {
    Table,
    Id,
}
