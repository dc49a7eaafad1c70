/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250114_100312_create_table_company;
mod m20250114_101045_create_table_user;
mod m20250114_101518_create_table_category;
mod m20250114_102201_create_table_kursus;
mod m20250114_102748_create_table_topic;
mod m20250114_103120_create_table_quiz;
mod m20250114_103455_create_table_question;
mod m20250114_103809_create_table_answer;
mod m20250115_090214_create_table_lowongan;
mod m20250115_090842_create_table_kandidat;
mod m20250115_091506_create_table_enrollment;
mod m20250115_092033_create_table_certificate;
mod m20250116_140655_create_table_community;
mod m20250116_141212_create_table_forum_thread;
mod m20250116_141740_create_table_forum_post;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250114_100312_create_table_company::Migration),
            Box::new(m20250114_101045_create_table_user::Migration),
            Box::new(m20250114_101518_create_table_category::Migration),
            Box::new(m20250114_102201_create_table_kursus::Migration),
            Box::new(m20250114_102748_create_table_topic::Migration),
            Box::new(m20250114_103120_create_table_quiz::Migration),
            Box::new(m20250114_103455_create_table_question::Migration),
            Box::new(m20250114_103809_create_table_answer::Migration),
            Box::new(m20250115_090214_create_table_lowongan::Migration),
            Box::new(m20250115_090842_create_table_kandidat::Migration),
            Box::new(m20250115_091506_create_table_enrollment::Migration),
            Box::new(m20250115_092033_create_table_certificate::Migration),
            Box::new(m20250116_140655_create_table_community::Migration),
            Box::new(m20250116_141212_create_table_forum_thread::Migration),
            Box::new(m20250116_141740_create_table_forum_post::Migration),
        ]
    }
}
