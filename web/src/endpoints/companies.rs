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
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct CompanyResponse {
    #[serde(flatten)]
    pub company: MCompany,
    pub hr_users: u64,
    pub job_postings: u64,
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<ListResponse<CompanyResponse>>> {
    let companies = ECompany::find().all(&state.db).await?;

    let mut responses = Vec::new();
    for company in companies {
        let hr_users = EUser::find()
            .filter(CUser::CompanyId.eq(company.id))
            .count(&state.db)
            .await?;
        let job_postings = ELowongan::find()
            .filter(CLowongan::CompanyId.eq(company.id))
            .count(&state.db)
            .await?;

        responses.push(CompanyResponse {
            company,
            hr_users,
            job_postings,
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn get_company(
    state: State<Arc<ServerState>>,
    Path(company_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MCompany>>> {
    let company = ECompany::find_by_id(company_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Company"))?;

    let res = BaseResponse {
        error: false,
        message: company,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<(StatusCode, Json<BaseResponse<MCompany>>)> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let mut form = UploadForm::read(multipart).await?;

    let name = form.require("name")?;
    let description = form.require("description")?;
    let location = form.require("location")?;
    let website = form.text("website");

    if check_display_name(name.as_str()).is_err() {
        return Err(WebError::invalid_name("Company Name"));
    }

    let existing_company = ECompany::find()
        .filter(CCompany::Name.eq(name.clone()))
        .one(&state.db)
        .await?;

    if existing_company.is_some() {
        return Err(WebError::already_exists("Company Name"));
    }

    let logo_url = match form.file.take() {
        Some(file) => Some(upload_file(&state.0, "company_logos", file).await.map_err(
            |e| {
                tracing::error!("Failed to upload company logo: {}", e);
                WebError::upload_failed()
            },
        )?),
        None => None,
    };

    let company = ACompany {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(description),
        website: Set(website),
        location: Set(location),
        logo_url: Set(logo_url),
        created_at: Set(Utc::now().naive_utc()),
    };

    let company = company.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: company,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_company(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(company_id): Path<Uuid>,
    multipart: Multipart,
) -> WebResult<Json<BaseResponse<MCompany>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let mut form = UploadForm::read(multipart).await?;

    let company = ECompany::find_by_id(company_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Company"))?;

    let mut acompany: ACompany = company.into();

    if let Some(name) = form.text("name") {
        if check_display_name(name.as_str()).is_err() {
            return Err(WebError::invalid_name("Company Name"));
        }

        let existing_company = ECompany::find()
            .filter(CCompany::Name.eq(name.clone()))
            .one(&state.db)
            .await?;

        if existing_company.is_some_and(|c| c.id != company_id) {
            return Err(WebError::already_exists("Company Name"));
        }

        acompany.name = Set(name);
    }

    if let Some(description) = form.text("description") {
        acompany.description = Set(description);
    }

    if let Some(website) = form.text("website") {
        acompany.website = Set(Some(website));
    }

    if let Some(location) = form.text("location") {
        acompany.location = Set(location);
    }

    if let Some(file) = form.file.take() {
        let logo_url = upload_file(&state.0, "company_logos", file)
            .await
            .map_err(|e| {
                tracing::error!("Failed to upload company logo: {}", e);
                WebError::upload_failed()
            })?;
        acompany.logo_url = Set(Some(logo_url));
    }

    let company = acompany.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: company,
    };

    Ok(Json(res))
}

pub async fn delete_company(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(company_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin, UserRole::Hr])?;

    let company = ECompany::find_by_id(company_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Company"))?;

    company.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Company deleted".to_string(),
    };

    Ok(Json(res))
}
