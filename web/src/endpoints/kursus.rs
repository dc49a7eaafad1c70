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
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct KursusResponse {
    #[serde(flatten)]
    pub kursus: MKursus,
    pub enrollments: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuizSummary {
    pub id: Uuid,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TopicWithQuiz {
    #[serde(flatten)]
    pub topic: MTopic,
    pub quiz: Option<QuizSummary>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct KursusDetailResponse {
    #[serde(flatten)]
    pub kursus: MKursus,
    pub topics: Vec<TopicWithQuiz>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EnrollmentResponse {
    #[serde(flatten)]
    pub enrollment: MEnrollment,
    pub kursus_title: String,
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, WebError> {
    value
        .parse()
        .map_err(|_| WebError::BadRequest(format!("{} must be a number", name)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<ListResponse<KursusResponse>>> {
    let kursuses = EKursus::find().all(&state.db).await?;

    let mut responses = Vec::new();
    for kursus in kursuses {
        let enrollments = EEnrollment::find()
            .filter(CEnrollment::KursusId.eq(kursus.id))
            .count(&state.db)
            .await?;

        responses.push(KursusResponse {
            kursus,
            enrollments,
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn get_kursus(
    state: State<Arc<ServerState>>,
    Path(kursus_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MKursus>>> {
    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let res = BaseResponse {
        error: false,
        message: kursus,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<(StatusCode, Json<BaseResponse<MKursus>>)> {
    require_role(&user, &[UserRole::Admin])?;

    let mut form = UploadForm::read(multipart).await?;

    let title = form.require("title")?;
    let description = form.require("description")?;
    let instructor = form.require("instructor")?;
    let duration: i32 = parse_number(form.require("duration")?.as_str(), "duration")?;

    let lesson_count = match form.text("lesson_count") {
        Some(value) => parse_number(value.as_str(), "lesson_count")?,
        None => 0,
    };

    let category_id = match form.text("category_id") {
        Some(value) => {
            let category_id: Uuid = value
                .parse()
                .map_err(|_| WebError::invalid_name("Category ID"))?;

            ECategory::find_by_id(category_id)
                .one(&state.db)
                .await?
                .ok_or_else(|| WebError::not_found("Category"))?;

            Some(category_id)
        }
        None => None,
    };

    let thumbnail = match form.file.take() {
        Some(file) => Some(
            upload_file(&state.0, "kursus_thumbnails", file)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to upload kursus thumbnail: {}", e);
                    WebError::upload_failed()
                })?,
        ),
        None => None,
    };

    let kursus = AKursus {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        description: Set(description),
        instructor: Set(instructor),
        duration: Set(duration),
        lesson_count: Set(lesson_count),
        rating: Set(0.0),
        thumbnail: Set(thumbnail),
        category_id: Set(category_id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let kursus = kursus.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: kursus,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_kursus(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kursus_id): Path<Uuid>,
    multipart: Multipart,
) -> WebResult<Json<BaseResponse<MKursus>>> {
    require_role(&user, &[UserRole::Admin])?;

    let mut form = UploadForm::read(multipart).await?;

    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let mut akursus: AKursus = kursus.into();

    if let Some(title) = form.text("title") {
        akursus.title = Set(title);
    }

    if let Some(description) = form.text("description") {
        akursus.description = Set(description);
    }

    if let Some(instructor) = form.text("instructor") {
        akursus.instructor = Set(instructor);
    }

    if let Some(duration) = form.text("duration") {
        akursus.duration = Set(parse_number(duration.as_str(), "duration")?);
    }

    if let Some(lesson_count) = form.text("lesson_count") {
        akursus.lesson_count = Set(parse_number(lesson_count.as_str(), "lesson_count")?);
    }

    if let Some(rating) = form.text("rating") {
        akursus.rating = Set(parse_number(rating.as_str(), "rating")?);
    }

    if let Some(category_id) = form.text("category_id") {
        let category_id: Uuid = category_id
            .parse()
            .map_err(|_| WebError::invalid_name("Category ID"))?;

        ECategory::find_by_id(category_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| WebError::not_found("Category"))?;

        akursus.category_id = Set(Some(category_id));
    }

    if let Some(file) = form.file.take() {
        let thumbnail = upload_file(&state.0, "kursus_thumbnails", file)
            .await
            .map_err(|e| {
                tracing::error!("Failed to upload kursus thumbnail: {}", e);
                WebError::upload_failed()
            })?;
        akursus.thumbnail = Set(Some(thumbnail));
    }

    let kursus = akursus.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: kursus,
    };

    Ok(Json(res))
}

pub async fn delete_kursus(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kursus_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    kursus.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Kursus deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_enroll(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kursus_id): Path<Uuid>,
) -> WebResult<(StatusCode, Json<BaseResponse<EnrollmentResponse>>)> {
    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let existing_enrollment = EEnrollment::find()
        .filter(
            Condition::all()
                .add(CEnrollment::UserId.eq(user.id))
                .add(CEnrollment::KursusId.eq(kursus.id)),
        )
        .one(&state.db)
        .await?;

    if existing_enrollment.is_some() {
        return Err(WebError::Conflict(
            "You are already enrolled in this kursus".to_string(),
        ));
    }

    let enrollment = AEnrollment {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        kursus_id: Set(kursus.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let enrollment = enrollment.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: EnrollmentResponse {
            enrollment,
            kursus_title: kursus.title,
        },
    };

    Ok((StatusCode::CREATED, Json(res)))
}

/// Topics plus quiz summaries, available to enrolled users only.
pub async fn get_enrolled_detail(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kursus_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<KursusDetailResponse>>> {
    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let enrollment = EEnrollment::find()
        .filter(
            Condition::all()
                .add(CEnrollment::UserId.eq(user.id))
                .add(CEnrollment::KursusId.eq(kursus.id)),
        )
        .one(&state.db)
        .await?;

    if enrollment.is_none() {
        return Err(WebError::Forbidden(
            "You are not enrolled in this kursus".to_string(),
        ));
    }

    let topics = ETopic::find()
        .filter(CTopic::KursusId.eq(kursus.id))
        .order_by_asc(CTopic::CreatedAt)
        .all(&state.db)
        .await?;

    let mut topics_with_quiz = Vec::new();
    for topic in topics {
        let quiz = EQuiz::find()
            .filter(CQuiz::TopicId.eq(topic.id))
            .one(&state.db)
            .await?;

        topics_with_quiz.push(TopicWithQuiz {
            topic,
            quiz: quiz.map(|q| QuizSummary {
                id: q.id,
                title: q.title,
            }),
        });
    }

    let res = BaseResponse {
        error: false,
        message: KursusDetailResponse {
            kursus,
            topics: topics_with_quiz,
        },
    };

    Ok(Json(res))
}
