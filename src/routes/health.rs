// ABOUTME: Health check endpoint for operational visibility
// ABOUTME: Reports service identity and liveness, no dependency probing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::server::ServerResources;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving requests
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Response timestamp (ISO 8601)
    pub timestamp: String,
}

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health router
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health
    async fn handle_health(
        State(_resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = HealthResponse {
            status: "ok".to_owned(),
            service: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
