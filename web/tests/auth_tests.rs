/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use entity::user::UserRole;
use uuid::Uuid;
use web::endpoints::auth::*;
use web::endpoints::users::UserResponse;

#[test]
fn test_register_request_serialization() {
    let request = RegisterRequest {
        email: Some("test@example.com".to_string()),
        name: Some("Test User".to_string()),
        password: Some("password123".to_string()),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("test@example.com"));
    assert!(json.contains("Test User"));
    assert!(json.contains("password123"));
}

#[test]
fn test_register_request_with_missing_fields_deserializes() {
    let request: RegisterRequest = serde_json::from_str("{}").unwrap();

    assert!(request.email.is_none());
    assert!(request.name.is_none());
    assert!(request.password.is_none());
}

#[test]
fn test_login_request_serialization() {
    let request = LoginRequest {
        email: Some("test@example.com".to_string()),
        password: Some("password123".to_string()),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("test@example.com"));
    assert!(json.contains("password123"));
}

#[test]
fn test_user_response_hides_password() {
    let response = UserResponse {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        role: UserRole::User,
        company_id: None,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("test@example.com"));
    assert!(!json.contains("password"));
    assert!(json.contains("\"role\":\"user\""));
}

#[test]
fn test_auth_response_serialization() {
    let response = AuthResponse {
        token: "header.payload.signature".to_string(),
        user: UserResponse {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role: UserRole::Admin,
            company_id: Some(Uuid::new_v4()),
        },
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("header.payload.signature"));
    assert!(json.contains("\"role\":\"admin\""));
}
