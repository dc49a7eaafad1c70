/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::user::UserRole;
use sea_orm::ActiveEnum;

#[test]
fn test_user_role_db_values() {
    assert_eq!(UserRole::User.to_value(), "user");
    assert_eq!(UserRole::Hr.to_value(), "hr");
    assert_eq!(UserRole::Admin.to_value(), "admin");
}

#[test]
fn test_user_role_from_db_value() {
    assert_eq!(
        UserRole::try_from_value(&"user".to_string()).unwrap(),
        UserRole::User
    );
    assert_eq!(
        UserRole::try_from_value(&"hr".to_string()).unwrap(),
        UserRole::Hr
    );
    assert_eq!(
        UserRole::try_from_value(&"admin".to_string()).unwrap(),
        UserRole::Admin
    );
    assert!(UserRole::try_from_value(&"superuser".to_string()).is_err());
}

#[test]
fn test_user_role_serde() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(
        serde_json::from_str::<UserRole>("\"hr\"").unwrap(),
        UserRole::Hr
    );
}
