/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod categories;
pub mod certificates;
pub mod communities;
pub mod companies;
pub mod enrollments;
pub mod forum;
pub mod kandidat;
pub mod kursus;
pub mod lowongan;
pub mod questions;
pub mod quiz;
pub mod topics;
pub mod users;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use app_core::types::BaseResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
