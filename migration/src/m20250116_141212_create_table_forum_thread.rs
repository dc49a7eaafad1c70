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
                    .table(ForumThread::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForumThread::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ForumThread::Title).string().not_null())
                    .col(ColumnDef::new(ForumThread::Content).text().not_null())
                    .col(ColumnDef::new(ForumThread::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(ForumThread::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-forum_thread-author_id")
                            .from(ForumThread::Table, ForumThread::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumThread::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ForumThread {
    Table,
    Id,
    Title,
    Content,
    AuthorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
