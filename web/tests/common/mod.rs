/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use app_core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        debug: true,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "/nonexistent/jwt_secret".to_string(),
        upload_url: None,
        upload_api_key_file: None,
        disable_registration: false,
        rate_limit_max: 60,
        rate_limit_window: 3600,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    Arc::new(ServerState {
        db,
        cli,
        rate_limiter: RateLimiter::default(),
    })
}

pub fn create_mock_state_with_users(users: Vec<Vec<user::Model>>) -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(users)
        .into_connection();

    Arc::new(ServerState {
        db,
        cli,
        rate_limiter: RateLimiter::default(),
    })
}
