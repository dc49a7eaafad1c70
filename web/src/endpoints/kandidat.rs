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
use chrono::{NaiveDateTime, Utc};
use app_core::consts::APPLICATION_STATUS_APPLIED;
use app_core::types::*;
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub status: String,
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub created_at: NaiveDateTime,
    pub job_id: Uuid,
    pub job_title: String,
    pub company_name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CandidateResponse {
    pub id: Uuid,
    pub status: String,
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub created_at: NaiveDateTime,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchStatusRequest {
    pub status: Option<String>,
}

/// Expands an application with its posting and company for list views.
pub async fn application_response(
    db: &DatabaseConnection,
    application: MKandidat,
) -> Result<ApplicationResponse, WebError> {
    let job = ELowongan::find_by_id(application.job_id).one(db).await?;

    let company_name = match &job {
        Some(job) => ECompany::find_by_id(job.company_id)
            .one(db)
            .await?
            .map(|c| c.name)
            .unwrap_or_default(),
        None => String::new(),
    };

    Ok(ApplicationResponse {
        id: application.id,
        status: application.status,
        resume_url: application.resume_url,
        cover_letter: application.cover_letter,
        created_at: application.created_at,
        job_id: application.job_id,
        job_title: job.map(|j| j.title).unwrap_or_default(),
        company_name,
    })
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<ListResponse<ApplicationResponse>>> {
    let applications = EKandidat::find()
        .filter(CKandidat::UserId.eq(user.id))
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for application in applications {
        responses.push(application_response(&state.db, application).await?);
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn post_apply(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(lowongan_id): Path<Uuid>,
    multipart: Multipart,
) -> WebResult<(StatusCode, Json<BaseResponse<MKandidat>>)> {
    let mut form = UploadForm::read(multipart).await?;

    let file = form
        .file
        .take()
        .ok_or_else(|| WebError::missing_field("resume"))?;

    let lowongan = ELowongan::find_by_id(lowongan_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lowongan"))?;

    let existing_application = EKandidat::find()
        .filter(
            Condition::all()
                .add(CKandidat::UserId.eq(user.id))
                .add(CKandidat::JobId.eq(lowongan.id)),
        )
        .one(&state.db)
        .await?;

    if existing_application.is_some() {
        return Err(WebError::Conflict(
            "You have already applied for this posting".to_string(),
        ));
    }

    let resume_url = upload_file(&state.0, "resumes", file).await.map_err(|e| {
        tracing::error!("Failed to upload resume: {}", e);
        WebError::upload_failed()
    })?;

    let application = AKandidat {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        job_id: Set(lowongan.id),
        resume_url: Set(resume_url),
        status: Set(APPLICATION_STATUS_APPLIED.to_string()),
        cover_letter: Set(form.text("cover_letter")),
        created_at: Set(Utc::now().naive_utc()),
    };

    let application = application.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: application,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_status(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kandidat_id): Path<Uuid>,
    Json(body): Json<PatchStatusRequest>,
) -> WebResult<Json<BaseResponse<MKandidat>>> {
    require_role(&user, &[UserRole::Hr, UserRole::Admin])?;

    let status = body
        .status
        .ok_or_else(|| WebError::missing_field("status"))?;

    let application = EKandidat::find_by_id(kandidat_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Application"))?;

    let job = ELowongan::find_by_id(application.job_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lowongan"))?;

    if user.company_id != Some(job.company_id) {
        return Err(WebError::access_denied());
    }

    let mut aapplication: AKandidat = application.into();
    aapplication.status = Set(status);

    let application = aapplication.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: application,
    };

    Ok(Json(res))
}

pub async fn delete_kandidat(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(kandidat_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let application = EKandidat::find_by_id(kandidat_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Application"))?;

    if application.user_id != user.id {
        return Err(WebError::access_denied());
    }

    application.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Application withdrawn".to_string(),
    };

    Ok(Json(res))
}
