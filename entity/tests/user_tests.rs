/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::NaiveDate;
use entity::user::UserRole;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: user_id,
            email: "test@example.com".to_owned(),
            name: "Test User".to_owned(),
            password: "hashed_password".to_owned(),
            role: UserRole::User,
            company_id: None,
            created_at: naive_date,
        }]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.role, UserRole::User);
    assert!(user.company_id.is_none());

    Ok(())
}

#[tokio::test]
async fn test_hr_user_belongs_to_company() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let company_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: user_id,
            email: "hr@company.example".to_owned(),
            name: "HR User".to_owned(),
            password: "hashed_password".to_owned(),
            role: UserRole::Hr,
            company_id: Some(company_id),
            created_at: naive_date,
        }]])
        .into_connection();

    let user = user::Entity::find_by_id(user_id).one(&db).await?.unwrap();

    assert_eq!(user.role, UserRole::Hr);
    assert_eq!(user.company_id, Some(company_id));

    Ok(())
}
