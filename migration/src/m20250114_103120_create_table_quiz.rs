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
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Quiz::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Quiz::TopicId).uuid().not_null())
                    .col(ColumnDef::new(Quiz::Title).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quiz-topic_id")
                            .from(Quiz::Table, Quiz::TopicId)
                            .to(Topic::Table, Topic::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Quiz {
    Table,
    Id,
    TopicId,
    Title,
}

#[derive(DeriveIden)]
enum Topic {
    Table,
    Id,
}
