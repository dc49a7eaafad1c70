/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use app_core::types::*;
use std::sync::Arc;

use crate::error::WebError;

/// Fixed-window limiter keyed by the authenticated caller. Layered on the
/// heavy create routes, after [`crate::authorization::authorize`].
pub async fn rate_limit(
    state: State<Arc<ServerState>>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, WebError> {
    let user = req
        .extensions()
        .get::<MUser>()
        .ok_or_else(|| WebError::Unauthorized("Not authenticated".to_string()))?;

    let allowed = state.rate_limiter.allow(
        user.id,
        Utc::now().timestamp(),
        state.cli.rate_limit_max,
        state.cli.rate_limit_window,
    );

    if !allowed {
        return Err(WebError::rate_limited());
    }

    Ok(next.run(req).await)
}
