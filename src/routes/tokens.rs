// ABOUTME: Encrypted token route handlers keyed by (user_id, token_type)
// ABOUTME: Masks decryption failures as absence at the wire while logging them
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
use tracing::warn;

use super::MessageResponse;
use crate::errors::{AppError, ErrorCode};
use crate::server::ServerResources;

/// Request body for token save
#[derive(Debug, Deserialize)]
pub struct SaveTokenRequest {
    /// The token plaintext to store
    pub token: Option<String>,
}

/// Response for token get
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The decrypted token, or `null` if none is stored
    pub token: Option<String>,
}

/// Encrypted token routes
pub struct TokenRoutes;

impl TokenRoutes {
    /// Create the token router
    ///
    /// # Endpoints
    ///
    /// - `GET /api/tokens/:user_id/:token_type` - Get a decrypted token
    /// - `POST /api/tokens/:user_id/:token_type` - Save a token
    /// - `DELETE /api/tokens/:user_id/:token_type` - Delete a token
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/tokens/:user_id/:token_type",
                get(Self::handle_get_token)
                    .post(Self::handle_save_token)
                    .delete(Self::handle_delete_token),
            )
            .with_state(resources)
    }

    /// Handle GET /api/tokens/:user_id/:token_type
    ///
    /// A token that exists but cannot be decrypted (rotated secret, corrupt
    /// row) is reported as `null`, matching what the extension can act on;
    /// the failure itself is logged so it stays observable.
    async fn handle_get_token(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, token_type)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let token = match resources.database.get_token(&user_id, &token_type).await {
            Ok(token) => token,
            Err(e) if e.code == ErrorCode::DecryptionFailed => {
                warn!(
                    "Unreadable token for user {} type {}: {}",
                    user_id, token_type, e
                );
                None
            }
            Err(e) => return Err(e),
        };

        Ok((StatusCode::OK, Json(TokenResponse { token })).into_response())
    }

    /// Handle POST /api/tokens/:user_id/:token_type
    async fn handle_save_token(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, token_type)): Path<(String, String)>,
        Json(request): Json<SaveTokenRequest>,
    ) -> Result<Response, AppError> {
        let plaintext = request.token.unwrap_or_default();
        resources
            .database
            .save_token(&user_id, &token_type, &plaintext)
            .await?;

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Token saved successfully")),
        )
            .into_response())
    }

    /// Handle DELETE /api/tokens/:user_id/:token_type
    async fn handle_delete_token(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, token_type)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        resources
            .database
            .delete_token(&user_id, &token_type)
            .await?;

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Token deleted successfully")),
        )
            .into_response())
    }
}
