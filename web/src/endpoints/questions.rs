/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_role;
use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use app_core::consts::MIN_ANSWERS_PER_QUESTION;
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeAnswer {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchAnswer {
    pub id: Uuid,
    pub text: Option<String>,
    pub is_correct: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchQuestionRequest {
    pub text: Option<String>,
    pub answers: Option<Vec<PatchAnswer>>,
}

/// A question carries at least two answers, one of them flagged correct.
pub fn check_answers(answers: &[MakeAnswer]) -> Result<(), WebError> {
    if answers.len() < MIN_ANSWERS_PER_QUESTION {
        return Err(WebError::BadRequest(format!(
            "A question needs at least {} answers",
            MIN_ANSWERS_PER_QUESTION
        )));
    }

    if !answers.iter().any(|a| a.is_correct) {
        return Err(WebError::BadRequest(
            "A question needs at least one correct answer".to_string(),
        ));
    }

    Ok(())
}

pub async fn patch_question(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(question_id): Path<Uuid>,
    Json(body): Json<PatchQuestionRequest>,
) -> WebResult<Json<BaseResponse<MQuestion>>> {
    require_role(&user, &[UserRole::Admin])?;

    let question = EQuestion::find_by_id(question_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Question"))?;

    let txn = state.db.begin().await?;

    let mut aquestion: AQuestion = question.into();

    if let Some(text) = body.text {
        aquestion.text = Set(text);
    }

    let question = aquestion.update(&txn).await?;

    if let Some(answers) = body.answers {
        for answer in answers {
            let existing = EAnswer::find_by_id(answer.id)
                .filter(CAnswer::QuestionId.eq(question.id))
                .one(&txn)
                .await?
                .ok_or_else(|| WebError::not_found("Answer"))?;

            let mut aanswer: AAnswer = existing.into();

            if let Some(text) = answer.text {
                aanswer.text = Set(text);
            }

            if let Some(is_correct) = answer.is_correct {
                aanswer.is_correct = Set(is_correct);
            }

            aanswer.update(&txn).await?;
        }
    }

    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: question,
    };

    Ok(Json(res))
}

pub async fn delete_question(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(question_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let question = EQuestion::find_by_id(question_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Question"))?;

    question.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Question deleted".to_string(),
    };

    Ok(Json(res))
}
