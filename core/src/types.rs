/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "Talenta", display_name = "Talenta", bin_name = "talenta-server", author = "Talenta", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TALENTA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TALENTA_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "TALENTA_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TALENTA_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "TALENTA_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "TALENTA_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "TALENTA_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "TALENTA_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "TALENTA_UPLOAD_URL")]
    pub upload_url: Option<String>,
    #[arg(long, env = "TALENTA_UPLOAD_API_KEY_FILE")]
    pub upload_api_key_file: Option<String>,
    #[arg(long, env = "TALENTA_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "TALENTA_RATE_LIMIT_MAX", value_parser = greater_than_zero::<u32>, default_value = "60")]
    pub rate_limit_max: u32,
    #[arg(long, env = "TALENTA_RATE_LIMIT_WINDOW", value_parser = greater_than_zero::<i64>, default_value = "3600")]
    pub rate_limit_window: i64,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub rate_limiter: RateLimiter,
}

/// Fixed-window request counter keyed by caller identity. The window
/// starts at the first request and resets once it has fully elapsed.
#[derive(Debug, Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<Uuid, (i64, u32)>>,
}

impl RateLimiter {
    pub fn allow(&self, key: Uuid, now: i64, max_requests: u32, window_secs: i64) -> bool {
        let mut windows = self.windows.lock().unwrap();
        let entry = windows.entry(key).or_insert((now, 0));

        if now - entry.0 >= window_secs {
            *entry = (now, 0);
        }

        if entry.1 >= max_requests {
            false
        } else {
            entry.1 += 1;
            true
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListResponse<T> {
    pub error: bool,
    pub total: usize,
    pub message: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        ListResponse {
            error: false,
            total: items.len(),
            message: items,
        }
    }
}

pub type EAnswer = answer::Entity;
pub type ECategory = category::Entity;
pub type ECertificate = certificate::Entity;
pub type ECommunity = community::Entity;
pub type ECompany = company::Entity;
pub type EEnrollment = enrollment::Entity;
pub type EForumPost = forum_post::Entity;
pub type EForumThread = forum_thread::Entity;
pub type EKandidat = kandidat::Entity;
pub type EKursus = kursus::Entity;
pub type ELowongan = lowongan::Entity;
pub type EQuestion = question::Entity;
pub type EQuiz = quiz::Entity;
pub type ETopic = topic::Entity;
pub type EUser = user::Entity;

pub type MAnswer = answer::Model;
pub type MCategory = category::Model;
pub type MCertificate = certificate::Model;
pub type MCommunity = community::Model;
pub type MCompany = company::Model;
pub type MEnrollment = enrollment::Model;
pub type MForumPost = forum_post::Model;
pub type MForumThread = forum_thread::Model;
pub type MKandidat = kandidat::Model;
pub type MKursus = kursus::Model;
pub type MLowongan = lowongan::Model;
pub type MQuestion = question::Model;
pub type MQuiz = quiz::Model;
pub type MTopic = topic::Model;
pub type MUser = user::Model;

pub type AAnswer = answer::ActiveModel;
pub type ACategory = category::ActiveModel;
pub type ACertificate = certificate::ActiveModel;
pub type ACommunity = community::ActiveModel;
pub type ACompany = company::ActiveModel;
pub type AEnrollment = enrollment::ActiveModel;
pub type AForumPost = forum_post::ActiveModel;
pub type AForumThread = forum_thread::ActiveModel;
pub type AKandidat = kandidat::ActiveModel;
pub type AKursus = kursus::ActiveModel;
pub type ALowongan = lowongan::ActiveModel;
pub type AQuestion = question::ActiveModel;
pub type AQuiz = quiz::ActiveModel;
pub type ATopic = topic::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CAnswer = answer::Column;
pub type CCategory = category::Column;
pub type CCertificate = certificate::Column;
pub type CCommunity = community::Column;
pub type CCompany = company::Column;
pub type CEnrollment = enrollment::Column;
pub type CForumPost = forum_post::Column;
pub type CForumThread = forum_thread::Column;
pub type CKandidat = kandidat::Column;
pub type CKursus = kursus::Column;
pub type CLowongan = lowongan::Column;
pub type CQuestion = question::Column;
pub type CQuiz = quiz::Column;
pub type CTopic = topic::Column;
pub type CUser = user::Column;
