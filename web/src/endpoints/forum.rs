/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{NaiveDateTime, Utc};
use app_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub author: AuthorResponse,
    pub posts: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PostResponse {
    pub id: Uuid,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub author: AuthorResponse,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ThreadDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub author: AuthorResponse,
    pub posts: Vec<PostResponse>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeThreadRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeReplyRequest {
    pub content: Option<String>,
}

async fn author_response(
    state: &ServerState,
    author_id: Uuid,
) -> Result<AuthorResponse, WebError> {
    let author = EUser::find_by_id(author_id).one(&state.db).await?;

    Ok(AuthorResponse {
        id: author_id,
        name: author.map(|u| u.name).unwrap_or_default(),
    })
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<ListResponse<ThreadResponse>>> {
    let threads = EForumThread::find()
        .order_by_desc(CForumThread::CreatedAt)
        .all(&state.db)
        .await?;

    let mut responses = Vec::new();
    for thread in threads {
        let author = author_response(&state.0, thread.author_id).await?;
        let posts = EForumPost::find()
            .filter(CForumPost::ThreadId.eq(thread.id))
            .count(&state.db)
            .await?;

        responses.push(ThreadResponse {
            id: thread.id,
            title: thread.title,
            content: thread.content,
            created_at: thread.created_at,
            author,
            posts,
        });
    }

    Ok(Json(ListResponse::new(responses)))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeThreadRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MForumThread>>)> {
    let title = body.title.ok_or_else(|| WebError::missing_field("title"))?;
    let content = body
        .content
        .ok_or_else(|| WebError::missing_field("content"))?;

    let thread = AForumThread {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        content: Set(content),
        author_id: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let thread = thread.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: thread,
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_thread(
    state: State<Arc<ServerState>>,
    Path(thread_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ThreadDetailResponse>>> {
    let thread = EForumThread::find_by_id(thread_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Thread"))?;

    let author = author_response(&state.0, thread.author_id).await?;

    let posts = EForumPost::find()
        .filter(CForumPost::ThreadId.eq(thread.id))
        .order_by_asc(CForumPost::CreatedAt)
        .all(&state.db)
        .await?;

    let mut post_responses = Vec::new();
    for post in posts {
        let post_author = author_response(&state.0, post.author_id).await?;

        post_responses.push(PostResponse {
            id: post.id,
            content: post.content,
            created_at: post.created_at,
            author: post_author,
        });
    }

    let res = BaseResponse {
        error: false,
        message: ThreadDetailResponse {
            id: thread.id,
            title: thread.title,
            content: thread.content,
            created_at: thread.created_at,
            author,
            posts: post_responses,
        },
    };

    Ok(Json(res))
}

pub async fn post_reply(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(thread_id): Path<Uuid>,
    Json(body): Json<MakeReplyRequest>,
) -> WebResult<(StatusCode, Json<BaseResponse<MForumPost>>)> {
    let content = body
        .content
        .ok_or_else(|| WebError::missing_field("content"))?;

    let thread = EForumThread::find_by_id(thread_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Thread"))?;

    let post = AForumPost {
        id: Set(Uuid::new_v4()),
        thread_id: Set(thread.id),
        author_id: Set(user.id),
        content: Set(content),
        created_at: Set(Utc::now().naive_utc()),
    };

    let post = post.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: post,
    };

    Ok((StatusCode::CREATED, Json(res)))
}
