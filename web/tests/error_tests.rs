/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the central error-to-status mapping

use axum::response::IntoResponse;
use http::StatusCode;
use sea_orm::DbErr;
use web::error::WebError;

fn status_of(error: WebError) -> StatusCode {
    error.into_response().status()
}

#[test]
fn test_error_status_mapping() {
    assert_eq!(
        status_of(WebError::missing_field("email")),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_of(WebError::invalid_credentials()),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(status_of(WebError::access_denied()), StatusCode::FORBIDDEN);
    assert_eq!(
        status_of(WebError::not_found("Kursus")),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(WebError::already_exists("Email")),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_of(WebError::rate_limited()),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        status_of(WebError::failed_to_generate_token()),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_database_errors_are_opaque() {
    let response =
        WebError::Database(DbErr::Custom("connection reset".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_message_names_the_field() {
    let error = WebError::missing_field("password");
    assert_eq!(error.to_string(), "Bad Request: password is required");
}
