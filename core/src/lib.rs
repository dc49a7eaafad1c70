/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod types;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();
    let db = connect_db(&cli).await?;
    let rate_limiter = RateLimiter::default();

    Ok(Arc::new(ServerState {
        db,
        cli,
        rate_limiter,
    }))
}
