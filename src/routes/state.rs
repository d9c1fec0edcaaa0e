// ABOUTME: Per-user state document route handlers
// ABOUTME: Wholesale get/save of one opaque JSON document per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MessageResponse;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Request body for state save
#[derive(Debug, Deserialize)]
pub struct SaveStateRequest {
    /// The state document; a missing field saves an empty mapping
    #[serde(default)]
    pub state: Option<Value>,
}

/// Response for state get
#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    /// The stored document, or an empty mapping if none exists
    pub state: Value,
}

/// State document routes
pub struct StateRoutes;

impl StateRoutes {
    /// Create the state router
    ///
    /// # Endpoints
    ///
    /// - `GET /api/state/:user_id` - Get a user's state document
    /// - `POST /api/state/:user_id` - Replace a user's state document
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/state/:user_id",
                get(Self::handle_get_state).post(Self::handle_save_state),
            )
            .with_state(resources)
    }

    /// Handle GET /api/state/:user_id
    async fn handle_get_state(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let state = resources.database.get_state(&user_id).await?;

        Ok((StatusCode::OK, Json(StateResponse { state })).into_response())
    }

    /// Handle POST /api/state/:user_id
    async fn handle_save_state(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<SaveStateRequest>,
    ) -> Result<Response, AppError> {
        let state = request
            .state
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        resources.database.save_state(&user_id, &state).await?;

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("State saved successfully")),
        )
            .into_response())
    }
}
