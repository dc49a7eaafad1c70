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
use email_address::EmailAddress;
use entity::user::UserRole;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::kandidat::{application_response, ApplicationResponse};

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_id: Option<Uuid>,
}

impl From<MUser> for UserResponse {
    fn from(user: MUser) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            company_id: user.company_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserDetailResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_id: Option<Uuid>,
    pub company: Option<MCompany>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub company_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default)]
    pub company_id: Option<Option<Uuid>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EnrollmentSummaryResponse {
    pub id: Uuid,
    pub kursus_id: Uuid,
    pub kursus_title: String,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<ListResponse<UserResponse>>> {
    require_role(&user, &[UserRole::Admin])?;

    let users = EUser::find().all(&state.db).await?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(ListResponse::new(users)))
}

pub async fn get_user(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(user_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<UserDetailResponse>>> {
    require_role(&user, &[UserRole::Admin])?;

    let target = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let company = match target.company_id {
        Some(company_id) => ECompany::find_by_id(company_id).one(&state.db).await?,
        None => None,
    };

    let res = BaseResponse {
        error: false,
        message: UserDetailResponse {
            id: target.id,
            email: target.email,
            name: target.name,
            role: target.role,
            company_id: target.company_id,
            company,
        },
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeUserRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<UserResponse>>)> {
    require_role(&user, &[UserRole::Admin])?;

    let email = body.email.ok_or_else(|| WebError::missing_field("email"))?;
    let name = body.name.ok_or_else(|| WebError::missing_field("name"))?;
    let password = body
        .password
        .ok_or_else(|| WebError::missing_field("password"))?;

    if !EmailAddress::is_valid(email.as_str()) {
        return Err(WebError::invalid_email());
    }

    let existing_user = EUser::find()
        .filter(CUser::Email.eq(email.clone()))
        .one(&state.db)
        .await?;

    if existing_user.is_some() {
        return Err(WebError::already_exists("Email"));
    }

    let new_user = AUser {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        name: Set(name),
        password: Set(generate_hash(password)),
        role: Set(body.role.unwrap_or(UserRole::User)),
        company_id: Set(body.company_id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let new_user = new_user.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: new_user.into(),
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn patch_user(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<PatchUserRequest>,
) -> WebResult<Json<BaseResponse<UserResponse>>> {
    require_role(&user, &[UserRole::Admin])?;

    let target = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let mut auser: AUser = target.into();

    if let Some(email) = body.email {
        if !EmailAddress::is_valid(email.as_str()) {
            return Err(WebError::invalid_email());
        }

        let existing_user = EUser::find()
            .filter(CUser::Email.eq(email.clone()))
            .one(&state.db)
            .await?;

        if existing_user.is_some_and(|u| u.id != user_id) {
            return Err(WebError::already_exists("Email"));
        }

        auser.email = Set(email);
    }

    if let Some(name) = body.name {
        auser.name = Set(name);
    }

    if let Some(password) = body.password {
        auser.password = Set(generate_hash(password));
    }

    if let Some(role) = body.role {
        auser.role = Set(role);
    }

    if let Some(company_id) = body.company_id {
        auser.company_id = Set(company_id);
    }

    let updated = auser.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: updated.into(),
    };

    Ok(Json(res))
}

pub async fn delete_user(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(user_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    require_role(&user, &[UserRole::Admin])?;

    let target = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    target.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "User deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_user_applications(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(user_id): Path<Uuid>,
) -> WebResult<Json<ListResponse<ApplicationResponse>>> {
    require_role(&user, &[UserRole::Admin])?;

    let target = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let applications = EKandidat::find()
        .filter(CKandidat::UserId.eq(target.id))
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for application in applications {
        responses.push(application_response(&state.db, application).await?);
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn get_user_enrollments(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(user_id): Path<Uuid>,
) -> WebResult<Json<ListResponse<EnrollmentSummaryResponse>>> {
    require_role(&user, &[UserRole::Admin])?;

    let target = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let enrollments = EEnrollment::find()
        .filter(CEnrollment::UserId.eq(target.id))
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for enrollment in enrollments {
        let kursus = EKursus::find_by_id(enrollment.kursus_id)
            .one(&state.db)
            .await?;

        responses.push(EnrollmentSummaryResponse {
            id: enrollment.id,
            kursus_id: enrollment.kursus_id,
            kursus_title: kursus.map(|k| k.title).unwrap_or_default(),
        });
    }

    Ok(Json(ListResponse::new(responses)))
}
