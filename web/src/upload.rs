/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use axum::extract::Multipart;
use app_core::input::load_secret;
use app_core::types::ServerState;
use std::collections::HashMap;

use crate::error::{WebError, WebResult};

pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Text fields plus at most one binary file field, buffered in memory.
#[derive(Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> WebResult<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            WebError::BadRequest(format!("Invalid multipart body: {}", e))
        })? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(filename) = field.file_name() {
                let filename = filename.to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        WebError::BadRequest(format!("Failed to read file field: {}", e))
                    })?
                    .to_vec();

                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            } else {
                let value = field.text().await.map_err(|e| {
                    WebError::BadRequest(format!("Failed to read field {}: {}", name, e))
                })?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .cloned()
            .filter(|value| !value.is_empty())
    }

    pub fn require(&self, name: &str) -> WebResult<String> {
        self.text(name)
            .ok_or_else(|| WebError::missing_field(name))
    }
}

/// Forwards a buffered file to the external image host and returns the
/// secure URL. The binary itself is never persisted here.
pub async fn upload_file(
    state: &ServerState,
    folder: &str,
    file: UploadedFile,
) -> Result<String> {
    let upload_url = state
        .cli
        .upload_url
        .as_ref()
        .context("Upload service URL not configured")?;
    let api_key_file = state
        .cli
        .upload_api_key_file
        .as_ref()
        .context("Upload service API key not configured")?;

    let part = reqwest::multipart::Part::bytes(file.data)
        .file_name(file.filename)
        .mime_str(&file.content_type)
        .context("Invalid file content type")?;

    let body = reqwest::multipart::Form::new()
        .text("folder", folder.to_string())
        .part("file", part);

    let http_client = reqwest::Client::new();

    let response = http_client
        .post(format!("{}/upload", upload_url.trim_end_matches('/')))
        .bearer_auth(load_secret(api_key_file))
        .multipart(body)
        .send()
        .await
        .context("Upload request failed")?
        .json::<serde_json::Value>()
        .await
        .context("Failed to parse upload response")?;

    let secure_url = response["secure_url"]
        .as_str()
        .context("No secure_url in upload response")?;

    Ok(secure_url.to_string())
}
