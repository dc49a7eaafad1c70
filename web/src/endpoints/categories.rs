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
use app_core::input::check_display_name;
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryAggregateResponse {
    pub id: Uuid,
    pub name: String,
    pub thumbnail: Option<String>,
    pub total_enrolled_users: u64,
    pub total_lesson_count: i64,
    pub average_rating: f64,
    pub course_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchCategoryRequest {
    pub name: Option<String>,
}

/// Category list with per-category aggregates over its courses.
pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<ListResponse<CategoryAggregateResponse>>> {
    let categories = ECategory::find().all(&state.db).await?;

    let mut responses = Vec::new();
    for category in categories {
        let courses = EKursus::find()
            .filter(CKursus::CategoryId.eq(category.id))
            .all(&state.db)
            .await?;

        let mut total_enrolled_users = 0;
        let mut total_lesson_count = 0;
        let mut total_rating = 0.0;
        let course_count = courses.len();

        for course in &courses {
            total_enrolled_users += EEnrollment::find()
                .filter(CEnrollment::KursusId.eq(course.id))
                .count(&state.db)
                .await?;
            total_lesson_count += course.lesson_count as i64;
            total_rating += course.rating;
        }

        let average_rating = if course_count > 0 {
            total_rating / course_count as f64
        } else {
            0.0
        };

        responses.push(CategoryAggregateResponse {
            id: category.id,
            name: category.name,
            thumbnail: category.thumbnail,
            total_enrolled_users,
            total_lesson_count,
            average_rating: (average_rating * 10.0).round() / 10.0,
            course_count,
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn get_category(
    state: State<Arc<ServerState>>,
    Path(category_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MCategory>>> {
    let category = ECategory::find_by_id(category_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Category"))?;

    let res = BaseResponse {
        error: false,
        message: category,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<(StatusCode, Json<BaseResponse<MCategory>>)> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let mut form = UploadForm::read(multipart).await?;

    let name = form.require("name")?;

    if check_display_name(name.as_str()).is_err() {
        return Err(WebError::invalid_name("Category Name"));
    }

    let existing_category = ECategory::find()
        .filter(CCategory::Name.eq(name.clone()))
        .one(&state.db)
        .await?;

    if existing_category.is_some() {
        return Err(WebError::already_exists("Category Name"));
    }

    let thumbnail = match form.file.take() {
        Some(file) => Some(
            upload_file(&state.0, "category_thumbnails", file)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to upload category thumbnail: {}", e);
                    WebError::upload_failed()
                })?,
        ),
        None => None,
    };

    let category = ACategory {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        thumbnail: Set(thumbnail),
    };

    let category = category.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: category,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_category(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(category_id): Path<Uuid>,
    Json(body): Json<PatchCategoryRequest>,
) -> WebResult<Json<BaseResponse<MCategory>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let category = ECategory::find_by_id(category_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Category"))?;

    let mut acategory: ACategory = category.into();

    if let Some(name) = body.name {
        if check_display_name(name.as_str()).is_err() {
            return Err(WebError::invalid_name("Category Name"));
        }

        let existing_category = ECategory::find()
            .filter(CCategory::Name.eq(name.clone()))
            .one(&state.db)
            .await?;

        if existing_category.is_some_and(|c| c.id != category_id) {
            return Err(WebError::already_exists("Category Name"));
        }

        acategory.name = Set(name);
    }

    let category = acategory.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: category,
    };

    Ok(Json(res))
}

pub async fn delete_category(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(category_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let category = ECategory::find_by_id(category_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Category"))?;

    category.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Category deleted".to_string(),
    };

    Ok(Json(res))
}
