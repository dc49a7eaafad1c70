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
                    .table(Kandidat::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Kandidat::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Kandidat::UserId).uuid().not_null())
                    .col(ColumnDef::new(Kandidat::JobId).uuid().not_null())
                    .col(ColumnDef::new(Kandidat::ResumeUrl).string().not_null())
                    .col(
                        ColumnDef::new(Kandidat::Status)
                            .string()
                            .not_null()
                            .default("Applied"),
                    )
                    .col(ColumnDef::new(Kandidat::CoverLetter).text())
                    .col(ColumnDef::new(Kandidat::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-kandidat-user_id")
                            .from(Kandidat::Table, Kandidat::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-kandidat-job_id")
                            .from(Kandidat::Table, Kandidat::JobId)
                            .to(Lowongan::Table, Lowongan::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per user per posting; the index is the real
        // guard against concurrent duplicate submissions.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-kandidat-user_id-job_id")
                    .table(Kandidat::Table)
                    .col(Kandidat::UserId)
                    .col(Kandidat::JobId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kandidat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Kandidat {
    Table,
    Id,
    UserId,
    JobId,
    ResumeUrl,
    Status,
    CoverLetter,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Lowongan {
    Table,
    Id,
}
