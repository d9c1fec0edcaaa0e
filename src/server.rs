// ABOUTME: HTTP server assembly and shared per-process resources
// ABOUTME: Builds the axum router, applies middleware layers, and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{info, Level};

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, StateRoutes, TokenRoutes, UserRoutes};

/// Shared resources passed to every route handler
///
/// Requests share only the database pool and the read-only encryption key
/// held inside it; there is no other cross-request state.
pub struct ServerResources {
    /// Database pool with encryption support
    pub database: Database,
    /// Server configuration loaded at startup
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the database and configuration for handler state
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// The Tabdeck sync HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete router with all routes and middleware layers
    #[must_use]
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        Router::new()
            .merge(HealthRoutes::router(resources.clone()))
            .merge(UserRoutes::router(resources.clone()))
            .merge(StateRoutes::router(resources.clone()))
            .merge(TokenRoutes::router(resources.clone()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(
                        DefaultMakeSpan::new()
                            .level(Level::INFO)
                            .include_headers(false),
                    )
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(setup_cors())
    }

    /// Run the HTTP server until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(&self) -> AppResult<()> {
        let app = Self::router(&self.resources);

        let host = &self.resources.config.host;
        let port = self.resources.config.http_port;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::config(format!("Invalid bind address {host}:{port}: {e}")))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
        info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;

        Ok(())
    }
}
