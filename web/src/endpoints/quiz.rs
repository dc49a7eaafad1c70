/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::require_role;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::Utc;
use app_core::consts::QUIZ_PASS_SCORE;
use app_core::database::{get_kursus_of_quiz, get_questions_with_answers};
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::questions::{MakeAnswer, check_answers};

#[derive(Serialize, Deserialize, Debug)]
pub struct AnswerForUser {
    pub id: Uuid,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuestionForUser {
    pub id: Uuid,
    pub text: String,
    pub answers: Vec<AnswerForUser>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuizForUser {
    pub id: Uuid,
    pub title: String,
    pub questions: Vec<QuestionForUser>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SubmittedAnswer {
    pub question_id: Uuid,
    pub answer_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmitQuizRequest {
    pub answers: Option<Vec<SubmittedAnswer>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmitQuizResponse {
    pub score: i64,
    pub passed: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeQuestionRequest {
    pub text: Option<String>,
    pub answers: Option<Vec<MakeAnswer>>,
}

#[derive(Debug, PartialEq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub score: f64,
    pub passed: bool,
}

/// Scores a submission against the stored answer sets. Returns `None`
/// for a quiz without questions; the caller decides how to reject it.
/// The single answer flagged correct is the key for each question.
pub fn score_submission(
    questions: &[(MQuestion, Vec<MAnswer>)],
    submitted: &[SubmittedAnswer],
) -> Option<QuizScore> {
    if questions.is_empty() {
        return None;
    }

    let mut correct = 0;
    for (question, answers) in questions {
        let Some(correct_answer) = answers.iter().find(|a| a.is_correct) else {
            continue;
        };

        if submitted
            .iter()
            .any(|s| s.question_id == question.id && s.answer_id == correct_answer.id)
        {
            correct += 1;
        }
    }

    let score = correct as f64 * 100.0 / questions.len() as f64;

    Some(QuizScore {
        correct,
        total: questions.len(),
        score,
        passed: score >= QUIZ_PASS_SCORE,
    })
}

/// Quiz as presented to a taker: answer options without the correct flag.
pub async fn get_quiz(
    state: State<Arc<ServerState>>,
    Path(quiz_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<QuizForUser>>> {
    let quiz = EQuiz::find_by_id(quiz_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Quiz"))?;

    let questions = get_questions_with_answers(&state.db, quiz.id).await?;

    let questions = questions
        .into_iter()
        .map(|(question, answers)| QuestionForUser {
            id: question.id,
            text: question.text,
            answers: answers
                .into_iter()
                .map(|a| AnswerForUser {
                    id: a.id,
                    text: a.text,
                })
                .collect(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: QuizForUser {
            id: quiz.id,
            title: quiz.title,
            questions,
        },
    };

    Ok(Json(res))
}

pub async fn post_submit(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(quiz_id): Path<Uuid>,
    body: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<SubmitQuizResponse>>> {
    let Json(body) = body?;
    let submitted = body
        .answers
        .ok_or_else(|| WebError::missing_field("answers"))?;

    let quiz = EQuiz::find_by_id(quiz_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Quiz"))?;

    let questions = get_questions_with_answers(&state.db, quiz.id).await?;

    let result = score_submission(&questions, &submitted)
        .ok_or_else(|| WebError::BadRequest("Quiz has no questions".to_string()))?;

    if result.passed {
        let kursus = get_kursus_of_quiz(&state.db, &quiz)
            .await?
            .ok_or_else(|| WebError::not_found("Kursus"))?;

        let existing_certificate = ECertificate::find()
            .filter(
                Condition::all()
                    .add(CCertificate::UserId.eq(user.id))
                    .add(CCertificate::KursusId.eq(kursus.id)),
            )
            .one(&state.db)
            .await?;

        // Repeat passes are a no-op; the unique index backs this up.
        if existing_certificate.is_none() {
            let certificate = ACertificate {
                id: Set(Uuid::new_v4()),
                user_id: Set(user.id),
                kursus_id: Set(kursus.id),
                issued_at: Set(Utc::now().naive_utc()),
            };

            certificate.insert(&state.db).await?;
        }
    }

    let res = BaseResponse {
        error: false,
        message: SubmitQuizResponse {
            score: result.score.round() as i64,
            passed: result.passed,
        },
    };

    Ok(Json(res))
}

pub async fn delete_quiz(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(quiz_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let quiz = EQuiz::find_by_id(quiz_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Quiz"))?;

    quiz.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Quiz deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_question(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(quiz_id): Path<Uuid>,
    Json(body): Json<MakeQuestionRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MQuestion>>)> {
    require_role(&user, &[UserRole::Admin])?;

    let text = body.text.ok_or_else(|| WebError::missing_field("text"))?;
    let answers = body
        .answers
        .ok_or_else(|| WebError::missing_field("answers"))?;

    check_answers(&answers)?;

    let quiz = EQuiz::find_by_id(quiz_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Quiz"))?;

    let txn = state.db.begin().await?;

    let question = AQuestion {
        id: Set(Uuid::new_v4()),
        quiz_id: Set(quiz.id),
        text: Set(text),
    };

    let question = question.insert(&txn).await?;

    for answer in answers {
        let new_answer = AAnswer {
            id: Set(Uuid::new_v4()),
            question_id: Set(question.id),
            text: Set(answer.text),
            is_correct: Set(answer.is_correct),
        };

        new_answer.insert(&txn).await?;
    }

    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: question,
    };

    Ok((StatusCode::CREATED, Json(res)))
}
