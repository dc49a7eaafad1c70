/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::NaiveDateTime;
use app_core::types::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MyCertificateResponse {
    pub id: Uuid,
    pub issued_at: NaiveDateTime,
    pub kursus_id: Uuid,
    pub kursus_title: String,
    pub kursus_thumbnail: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CertificateDetailResponse {
    pub id: Uuid,
    pub issued_at: NaiveDateTime,
    pub user_name: String,
    pub kursus_title: String,
    pub kursus_instructor: String,
}

pub async fn get_my(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<ListResponse<MyCertificateResponse>>> {
    let certificates = ECertificate::find()
        .filter(CCertificate::UserId.eq(user.id))
        .order_by_desc(CCertificate::IssuedAt)
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for certificate in certificates {
        let kursus = EKursus::find_by_id(certificate.kursus_id)
            .one(&state.db)
            .await?;

        responses.push(MyCertificateResponse {
            id: certificate.id,
            issued_at: certificate.issued_at,
            kursus_id: certificate.kursus_id,
            kursus_title: kursus.as_ref().map(|k| k.title.clone()).unwrap_or_default(),
            kursus_thumbnail: kursus.and_then(|k| k.thumbnail),
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

/// Public certificate lookup, e.g. for verification links.
pub async fn get_certificate(
    state: State<Arc<ServerState>>,
    Path(certificate_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<CertificateDetailResponse>>> {
    let certificate = ECertificate::find_by_id(certificate_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Certificate"))?;

    let holder = EUser::find_by_id(certificate.user_id).one(&state.db).await?;
    let kursus = EKursus::find_by_id(certificate.kursus_id)
        .one(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: CertificateDetailResponse {
            id: certificate.id,
            issued_at: certificate.issued_at,
            user_name: holder.map(|u| u.name).unwrap_or_default(),
            kursus_title: kursus.as_ref().map(|k| k.title.clone()).unwrap_or_default(),
            kursus_instructor: kursus.map(|k| k.instructor).unwrap_or_default(),
        },
    };

    Ok(Json(res))
}
