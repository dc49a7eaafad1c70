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
                    .table(Lowongan::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lowongan::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lowongan::Title).string().not_null())
                    .col(ColumnDef::new(Lowongan::Description).text().not_null())
                    .col(ColumnDef::new(Lowongan::Location).string().not_null())
                    .col(ColumnDef::new(Lowongan::JobType).string().not_null())
                    .col(ColumnDef::new(Lowongan::SalaryRange).string())
                    .col(ColumnDef::new(Lowongan::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Lowongan::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lowongan-company_id")
                            .from(Lowongan::Table, Lowongan::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lowongan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Lowongan {
    Table,
    Id,
    Title,
    Description,
    Location,
    JobType,
    SalaryRange,
    CompanyId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
}
