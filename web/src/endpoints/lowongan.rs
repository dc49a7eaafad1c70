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
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::kandidat::CandidateResponse;

#[derive(Serialize, Deserialize, Debug)]
pub struct LowonganResponse {
    #[serde(flatten)]
    pub lowongan: MLowongan,
    pub company_name: String,
    pub candidates: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLowonganRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchLowonganRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<Option<String>>,
}

/// The caller must be attached to the company owning the posting.
fn check_ownership(user: &MUser, lowongan: &MLowongan) -> Result<(), WebError> {
    if user.company_id != Some(lowongan.company_id) {
        return Err(WebError::access_denied());
    }

    Ok(())
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<ListResponse<LowonganResponse>>> {
    let lowongans = ELowongan::find().all(&state.db).await?;

    let mut responses = Vec::new();
    for lowongan in lowongans {
        let company = ECompany::find_by_id(lowongan.company_id)
            .one(&state.db)
            .await?;
        let candidates = EKandidat::find()
            .filter(CKandidat::JobId.eq(lowongan.id))
            .count(&state.db)
            .await?;

        responses.push(LowonganResponse {
            lowongan,
            company_name: company.map(|c| c.name).unwrap_or_default(),
            candidates,
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn get_lowongan(
    state: State<Arc<ServerState>>,
    Path(lowongan_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MLowongan>>> {
    let lowongan = ELowongan::find_by_id(lowongan_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lowongan"))?;

    let res = BaseResponse {
        error: false,
        message: lowongan,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeLowonganRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MLowongan>>)> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let title = body.title.ok_or_else(|| WebError::missing_field("title"))?;
    let description = body
        .description
        .ok_or_else(|| WebError::missing_field("description"))?;
    let location = body
        .location
        .ok_or_else(|| WebError::missing_field("location"))?;
    let job_type = body
        .job_type
        .ok_or_else(|| WebError::missing_field("job_type"))?;

    let company_id = user.company_id.ok_or_else(|| {
        WebError::Forbidden("You are not connected to a company".to_string())
    })?;

    let lowongan = ALowongan {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        description: Set(description),
        location: Set(location),
        job_type: Set(job_type),
        salary_range: Set(body.salary_range),
        company_id: Set(company_id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let lowongan = lowongan.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: lowongan,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_lowongan(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(lowongan_id): Path<Uuid>,
    Json(body): Json<PatchLowonganRequest>,
) -> WebResult<Json<BaseResponse<MLowongan>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let lowongan = ELowongan::find_by_id(lowongan_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lowongan"))?;

    check_ownership(&user, &lowongan)?;

    let mut alowongan: ALowongan = lowongan.into();

    if let Some(title) = body.title {
        alowongan.title = Set(title);
    }

    if let Some(description) = body.description {
        alowongan.description = Set(description);
    }

    if let Some(location) = body.location {
        alowongan.location = Set(location);
    }

    if let Some(job_type) = body.job_type {
        alowongan.job_type = Set(job_type);
    }

    if let Some(salary_range) = body.salary_range {
        alowongan.salary_range = Set(salary_range);
    }

    let lowongan = alowongan.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: lowongan,
    };

    Ok(Json(res))
}

pub async fn delete_lowongan(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(lowongan_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let lowongan = ELowongan::find_by_id(lowongan_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lowongan"))?;

    check_ownership(&user, &lowongan)?;

    // Applications go first; the posting delete would otherwise be
    // blocked on databases without cascading FKs.
    EKandidat::delete_many()
        .filter(CKandidat::JobId.eq(lowongan.id))
        .exec(&state.db)
        .await?;

    lowongan.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Lowongan deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_candidates(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(lowongan_id): Path<Uuid>,
) -> WebResult<Json<ListResponse<CandidateResponse>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let lowongan = ELowongan::find_by_id(lowongan_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Lowongan"))?;

    check_ownership(&user, &lowongan)?;

    let candidates = EKandidat::find()
        .filter(CKandidat::JobId.eq(lowongan.id))
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for candidate in candidates {
        let applicant = EUser::find_by_id(candidate.user_id).one(&state.db).await?;

        responses.push(CandidateResponse {
            id: candidate.id,
            status: candidate.status,
            resume_url: candidate.resume_url,
            cover_letter: candidate.cover_letter,
            created_at: candidate.created_at,
            user_id: candidate.user_id,
            user_name: applicant.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            user_email: applicant.map(|u| u.email).unwrap_or_default(),
        });
    }

    Ok(Json(ListResponse::new(responses)))
}
