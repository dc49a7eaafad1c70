/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_role;
use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::questions::{MakeAnswer, check_answers};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeTopicRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchTopicRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub video_url: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeQuizQuestion {
    pub text: String,
    pub answers: Vec<MakeAnswer>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeQuizRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<MakeQuizQuestion>>,
}

async fn get_topic_of_kursus(
    state: &ServerState,
    kursus_id: Uuid,
    topic_id: Uuid,
) -> WebResult<MTopic> {
    ETopic::find_by_id(topic_id)
        .filter(CTopic::KursusId.eq(kursus_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Topic"))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Path(kursus_id): Path<Uuid>,
) -> WebResult<Json<ListResponse<MTopic>>> {
    EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let topics = ETopic::find()
        .filter(CTopic::KursusId.eq(kursus_id))
        .order_by_asc(CTopic::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(ListResponse::new(topics)))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kursus_id): Path<Uuid>,
    Json(body): Json<MakeTopicRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MTopic>>)> {
    require_role(&user, &[UserRole::Admin])?;

    let title = body.title.ok_or_else(|| WebError::missing_field("title"))?;
    let content = body
        .content
        .ok_or_else(|| WebError::missing_field("content"))?;

    let kursus = EKursus::find_by_id(kursus_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Kursus"))?;

    let topic = ATopic {
        id: Set(Uuid::new_v4()),
        kursus_id: Set(kursus.id),
        title: Set(title),
        content: Set(content),
        video_url: Set(body.video_url),
        created_at: Set(Utc::now().naive_utc()),
    };

    let topic = topic.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: topic,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_topic(
    state: State<Arc<ServerState>>,
    Path((kursus_id, topic_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<MTopic>>> {
    let topic = get_topic_of_kursus(&state.0, kursus_id, topic_id).await?;

    let res = BaseResponse {
        error: false,
        message: topic,
    };

    Ok(Json(res))
}

pub async fn patch_topic(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((kursus_id, topic_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<PatchTopicRequest>,
) -> WebResult<Json<BaseResponse<MTopic>>> {
    require_role(&user, &[UserRole::Admin])?;

    let topic = get_topic_of_kursus(&state.0, kursus_id, topic_id).await?;

    let mut atopic: ATopic = topic.into();

    if let Some(title) = body.title {
        atopic.title = Set(title);
    }

    if let Some(content) = body.content {
        atopic.content = Set(content);
    }

    if let Some(video_url) = body.video_url {
        atopic.video_url = Set(video_url);
    }

    let topic = atopic.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: topic,
    };

    Ok(Json(res))
}

pub async fn delete_topic(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((kursus_id, topic_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let topic = get_topic_of_kursus(&state.0, kursus_id, topic_id).await?;

    topic.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Topic deleted".to_string(),
    };

    Ok(Json(res))
}

/// Creates a quiz with its full question and answer set in one go.
pub async fn post_quiz(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((kursus_id, topic_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<MakeQuizRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MQuiz>>)> {
    require_role(&user, &[UserRole::Admin])?;

    let title = body.title.ok_or_else(|| WebError::missing_field("title"))?;
    let questions = body
        .questions
        .ok_or_else(|| WebError::missing_field("questions"))?;

    if questions.is_empty() {
        return Err(WebError::BadRequest(
            "A quiz needs at least one question".to_string(),
        ));
    }

    for question in &questions {
        check_answers(&question.answers)?;
    }

    let topic = get_topic_of_kursus(&state.0, kursus_id, topic_id).await?;

    let existing_quiz = EQuiz::find()
        .filter(CQuiz::TopicId.eq(topic.id))
        .one(&state.db)
        .await?;

    if existing_quiz.is_some() {
        return Err(WebError::already_exists("Quiz"));
    }

    let txn = state.db.begin().await?;

    let quiz = AQuiz {
        id: Set(Uuid::new_v4()),
        topic_id: Set(topic.id),
        title: Set(title),
    };

    let quiz = quiz.insert(&txn).await?;

    for question in questions {
        let new_question = AQuestion {
            id: Set(Uuid::new_v4()),
            quiz_id: Set(quiz.id),
            text: Set(question.text),
        };

        let new_question = new_question.insert(&txn).await?;

        for answer in question.answers {
            let new_answer = AAnswer {
                id: Set(Uuid::new_v4()),
                question_id: Set(new_question.id),
                text: Set(answer.text),
                is_correct: Set(answer.is_correct),
            };

            new_answer.insert(&txn).await?;
        }
    }

    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: quiz,
    };

    Ok((StatusCode::CREATED, Json(res)))
}
