// ABOUTME: Binary entrypoint for the Tabdeck sync server
// ABOUTME: Loads env configuration, derives the encryption key, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tabdeck_sync_server::config::ServerConfig;
use tabdeck_sync_server::database::{derive_encryption_key, Database};
use tabdeck_sync_server::errors::AppResult;
use tabdeck_sync_server::server::{HttpServer, ServerResources};

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fails here, before any listener is bound, if SESSION_SECRET or
    // DATABASE_URL is missing.
    let config = ServerConfig::from_env()?;
    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let encryption_key = derive_encryption_key(&config.session_secret).to_vec();
    let database = Database::new(&config.database_url, encryption_key).await?;
    info!("Database ready");

    let resources = Arc::new(ServerResources::new(database, config));
    HttpServer::new(resources).run().await
}
