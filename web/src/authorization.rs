/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use app_core::consts::TOKEN_TTL_HOURS;
use app_core::input::load_secret;
use app_core::types::*;
use entity::user::UserRole;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebError;

#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
    pub role: UserRole,
}

/// Resolves the caller from the `Authorization` header and attaches the
/// loaded user to the request. Runs before every protected route.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, WebError> {
    let auth_header = match req.headers().get(axum::http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            WebError::Unauthorized("Invalid Authorization header".to_string())
        })?,
        None => {
            return Err(WebError::Unauthorized(
                "Authorization header not found".to_string(),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let (bearer, token) = (header.next(), header.next());

    let token = match (bearer, token) {
        (Some("Bearer"), Some(token)) => token.to_string(),
        _ => {
            return Err(WebError::Unauthorized(
                "Invalid Authorization header".to_string(),
            ));
        }
    };

    let token_data = decode_jwt(&state.0, &token)?;

    let current_user = EUser::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Per-route role allow-list. Must be called with a user attached by
/// [`authorize`], so an unauthenticated request can never reach it.
pub fn require_role(user: &MUser, allowed: &[UserRole]) -> Result<(), WebError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(WebError::Forbidden(
            "You do not have access to this resource".to_string(),
        ))
    }
}

pub fn encode_jwt(state: &ServerState, user: &MUser) -> Result<String> {
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(TOKEN_TTL_HOURS);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims {
        iat,
        exp,
        id: user.id,
        role: user.role,
    };
    let secret = load_secret(&state.cli.jwt_secret_file);

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .context("Failed to encode token")
}

pub fn decode_jwt(state: &ServerState, jwt: &str) -> Result<TokenData<Claims>, WebError> {
    let secret = load_secret(&state.cli.jwt_secret_file);

    decode(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| WebError::Unauthorized("Invalid or expired token".to_string()))
}
