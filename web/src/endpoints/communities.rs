/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_role;
use crate::error::{WebError, WebResult};
use crate::upload::{UploadForm, upload_file};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use app_core::input::check_display_name;
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<ListResponse<MCommunity>>> {
    let communities = ECommunity::find().all(&state.db).await?;

    Ok(Json(ListResponse::new(communities)))
}

pub async fn get_community(
    state: State<Arc<ServerState>>,
    Path(community_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MCommunity>>> {
    let community = ECommunity::find_by_id(community_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Community"))?;

    let res = BaseResponse {
        error: false,
        message: community,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<(StatusCode, Json<BaseResponse<MCommunity>>)> {
    require_role(&user, &[UserRole::Admin])?;

    let mut form = UploadForm::read(multipart).await?;

    let name = form.require("name")?;
    let description = form.require("description")?;

    if check_display_name(name.as_str()).is_err() {
        return Err(WebError::invalid_name("Community Name"));
    }

    let existing_community = ECommunity::find()
        .filter(CCommunity::Name.eq(name.clone()))
        .one(&state.db)
        .await?;

    if existing_community.is_some() {
        return Err(WebError::already_exists("Community Name"));
    }

    let cover_image_url = match form.file.take() {
        Some(file) => Some(
            upload_file(&state.0, "community_covers", file)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to upload community cover: {}", e);
                    WebError::upload_failed()
                })?,
        ),
        None => None,
    };

    let community = ACommunity {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(description),
        cover_image_url: Set(cover_image_url),
        created_at: Set(Utc::now().naive_utc()),
    };

    let community = community.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: community,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_community(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(community_id): Path<Uuid>,
    multipart: Multipart,
) -> WebResult<Json<BaseResponse<MCommunity>>> {
    require_role(&user, &[UserRole::Admin])?;

    let mut form = UploadForm::read(multipart).await?;

    let community = ECommunity::find_by_id(community_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Community"))?;

    let mut acommunity: ACommunity = community.into();

    if let Some(name) = form.text("name") {
        if check_display_name(name.as_str()).is_err() {
            return Err(WebError::invalid_name("Community Name"));
        }

        let existing_community = ECommunity::find()
            .filter(CCommunity::Name.eq(name.clone()))
            .one(&state.db)
            .await?;

        if existing_community.is_some_and(|c| c.id != community_id) {
            return Err(WebError::already_exists("Community Name"));
        }

        acommunity.name = Set(name);
    }

    if let Some(description) = form.text("description") {
        acommunity.description = Set(description);
    }

    if let Some(file) = form.file.take() {
        let cover_image_url = upload_file(&state.0, "community_covers", file)
            .await
            .map_err(|e| {
                tracing::error!("Failed to upload community cover: {}", e);
                WebError::upload_failed()
            })?;
        acommunity.cover_image_url = Set(Some(cover_image_url));
    }

    let community = acommunity.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: community,
    };

    Ok(Json(res))
}

pub async fn delete_community(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(community_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let community = ECommunity::find_by_id(community_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Community"))?;

    community.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Community deleted".to_string(),
    };

    Ok(Json(res))
}
