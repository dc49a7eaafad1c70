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
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificate::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certificate::UserId).uuid().not_null())
                    .col(ColumnDef::new(Certificate::KursusId).uuid().not_null())
                    .col(ColumnDef::new(Certificate::IssuedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-certificate-user_id")
                            .from(Certificate::Table, Certificate::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-certificate-kursus_id")
                            .from(Certificate::Table, Certificate::KursusId)
                            .to(Kursus::Table, Kursus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Repeat passes must not mint a second certificate.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-certificate-user_id-kursus_id")
                    .table(Certificate::Table)
                    .col(Certificate::UserId)
                    .col(Certificate::KursusId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certificate {
    Table,
    Id,
    UserId,
    KursusId,
    IssuedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Kursus {
    Table,
    Id,
}
