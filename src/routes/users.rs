// ABOUTME: User profile route handlers
// ABOUTME: Upsert-by-id endpoint with required-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::MessageResponse;
use crate::database::UserProfileData;
use crate::errors::AppError;
use crate::server::ServerResources;

/// Request body for user create/update
///
/// All fields are optional at the serde level so that missing required
/// fields produce a 400 with a clear message instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateOrUpdateUserRequest {
    /// Externally supplied stable identifier
    pub user_id: Option<String>,
    /// User's email address
    pub email: Option<String>,
    /// Optional display name
    pub name: Option<String>,
    /// Optional avatar URL
    pub picture: Option<String>,
}

/// User profile routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create the user router
    ///
    /// # Endpoints
    ///
    /// - `POST /api/user` - Create or update a user profile
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/user", post(Self::handle_create_or_update))
            .with_state(resources)
    }

    /// Handle POST /api/user
    async fn handle_create_or_update(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateOrUpdateUserRequest>,
    ) -> Result<Response, AppError> {
        let user_id = request.user_id.as_deref().filter(|v| !v.is_empty());
        let email = request.email.as_deref().filter(|v| !v.is_empty());

        let (Some(user_id), Some(email)) = (user_id, email) else {
            return Err(AppError::invalid_input("user_id and email are required"));
        };

        let profile = UserProfileData {
            id: user_id,
            email,
            name: request.name.as_deref(),
            picture: request.picture.as_deref(),
        };
        resources.database.create_or_update_user(&profile).await?;

        info!("Upserted user {}", user_id);

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("User created/updated successfully")),
        )
            .into_response())
    }
}
