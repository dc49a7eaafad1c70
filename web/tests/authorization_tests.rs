/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the authorization gate and role check, driven through the
//! full router against a mock database.

mod common;

use axum_test::TestServer;
use chrono::{Duration, NaiveDate, Utc};
use common::{create_mock_state, create_mock_state_with_users};
use entity::user;
use entity::user::UserRole;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;
use web::authorization::{Claims, encode_jwt};
use web::create_router;

fn mock_user(role: UserRole) -> user::Model {
    let naive_date = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    user::Model {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        password: "hashed_password".to_string(),
        role,
        company_id: None,
        created_at: naive_date,
    }
}

#[tokio::test]
async fn test_health_is_open() {
    let server = TestServer::new(create_router(create_mock_state())).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = TestServer::new(create_router(create_mock_state())).unwrap();

    let response = server.get("/does-not-exist").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_missing_authorization_header_is_rejected() {
    let server = TestServer::new(create_router(create_mock_state())).unwrap();

    let response = server.get("/users").await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_malformed_authorization_header_is_rejected() {
    let server = TestServer::new(create_router(create_mock_state())).unwrap();

    let response = server
        .get("/users")
        .add_header("authorization", "Token abcdef")
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let server = TestServer::new(create_router(create_mock_state())).unwrap();

    let response = server
        .get("/users")
        .add_header("authorization", "Bearer not-a-token")
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let state = create_mock_state();
    let server = TestServer::new(create_router(state.clone())).unwrap();

    let issued = Utc::now() - Duration::hours(3);
    let expired = Utc::now() - Duration::hours(2);
    let claims = Claims {
        iat: issued.timestamp() as usize,
        exp: expired.timestamp() as usize,
        id: Uuid::new_v4(),
        role: UserRole::Admin,
    };

    // Same (empty) secret the server reads from the missing secret file.
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret("".as_ref()),
    )
    .unwrap();

    let response = server
        .get("/users")
        .add_header("authorization", format!("Bearer {}", token))
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_role_mismatch_is_rejected() {
    let user = mock_user(UserRole::User);
    let state = create_mock_state_with_users(vec![vec![user.clone()]]);
    let server = TestServer::new(create_router(state.clone())).unwrap();

    let token = encode_jwt(&state, &user).unwrap();

    // A plain user hitting the admin-only user listing.
    let response = server
        .get("/users")
        .add_header("authorization", format!("Bearer {}", token))
        .await;
    response.assert_status_forbidden();
}

#[tokio::test]
async fn test_admin_passes_role_check() {
    let admin = mock_user(UserRole::Admin);
    let state = create_mock_state_with_users(vec![vec![admin.clone()], vec![]]);
    let server = TestServer::new(create_router(state.clone())).unwrap();

    let token = encode_jwt(&state, &admin).unwrap();

    let response = server
        .get("/users")
        .add_header("authorization", format!("Bearer {}", token))
        .await;
    response.assert_status_ok();
}
