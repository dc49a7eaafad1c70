/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use app_core::init_state;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&state.cli.log_level))
        .init();

    tracing::info!(
        "Starting Talenta server on {}:{}",
        state.cli.ip,
        state.cli.port
    );

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
