/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_role;
use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::NaiveDateTime;
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MyEnrollmentResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub kursus_id: Uuid,
    pub kursus_title: String,
    pub kursus_thumbnail: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EnrolleeResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
}

pub async fn get_my(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<ListResponse<MyEnrollmentResponse>>> {
    let enrollments = EEnrollment::find()
        .filter(CEnrollment::UserId.eq(user.id))
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for enrollment in enrollments {
        let kursus = EKursus::find_by_id(enrollment.kursus_id)
            .one(&state.db)
            .await?;

        let category_name = match kursus.as_ref().and_then(|k| k.category_id) {
            Some(category_id) => ECategory::find_by_id(category_id)
                .one(&state.db)
                .await?
                .map(|c| c.name),
            None => None,
        };

        responses.push(MyEnrollmentResponse {
            id: enrollment.id,
            created_at: enrollment.created_at,
            kursus_id: enrollment.kursus_id,
            kursus_title: kursus.as_ref().map(|k| k.title.clone()).unwrap_or_default(),
            kursus_thumbnail: kursus.and_then(|k| k.thumbnail),
            category_name,
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn get_for_kursus(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kursus_id): Path<Uuid>,
) -> WebResult<Json<ListResponse<EnrolleeResponse>>> {
    require_role(&user, &[UserRole::Admin])?;

    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let enrollments = EEnrollment::find()
        .filter(CEnrollment::KursusId.eq(kursus.id))
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for enrollment in enrollments {
        let enrollee = EUser::find_by_id(enrollment.user_id).one(&state.db).await?;

        responses.push(EnrolleeResponse {
            id: enrollment.id,
            created_at: enrollment.created_at,
            user_id: enrollment.user_id,
            user_name: enrollee.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            user_email: enrollee.map(|u| u.email).unwrap_or_default(),
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn delete_enrollment(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(enrollment_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let enrollment = EEnrollment::find_by_id(enrollment_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Enrollment"))?;

    enrollment.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Enrollment deleted".to_string(),
    };

    Ok(Json(res))
}
