/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::encode_jwt;
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use app_core::types::*;
use email_address::EmailAddress;
use entity::user::UserRole;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::users::UserResponse;

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<RegisterRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<AuthResponse>>)> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    let email = body.email.ok_or_else(|| WebError::missing_field("email"))?;
    let name = body.name.ok_or_else(|| WebError::missing_field("name"))?;
    let password = body
        .password
        .ok_or_else(|| WebError::missing_field("password"))?;

    if !EmailAddress::is_valid(email.as_str()) {
        return Err(WebError::invalid_email());
    }

    let existing_user = EUser::find()
        .filter(CUser::Email.eq(email.clone()))
        .one(&state.db)
        .await?;

    if existing_user.is_some() {
        return Err(WebError::already_exists("Email"));
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        name: Set(name),
        password: Set(generate_hash(password)),
        role: Set(UserRole::User),
        company_id: Set(None),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&state.db).await?;

    let token =
        encode_jwt(&state.0, &user).map_err(|_| WebError::failed_to_generate_token())?;

    let res = BaseResponse {
        error: false,
        message: AuthResponse {
            token,
            user: user.into(),
        },
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<LoginRequest>,
) -> WebResult<Json<BaseResponse<AuthResponse>>> {
    let email = body.email.ok_or_else(|| WebError::missing_field("email"))?;
    let password = body
        .password
        .ok_or_else(|| WebError::missing_field("password"))?;

    let user = EUser::find()
        .filter(CUser::Email.eq(email))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(password, &user.password).map_err(|_| WebError::invalid_credentials())?;

    let token =
        encode_jwt(&state.0, &user).map_err(|_| WebError::failed_to_generate_token())?;

    let res = BaseResponse {
        error: false,
        message: AuthResponse {
            token,
            user: user.into(),
        },
    };

    Ok(Json(res))
}
