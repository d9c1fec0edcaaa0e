// ABOUTME: Route module organization for Tabdeck sync HTTP endpoints
// ABOUTME: One module per domain with thin handlers delegating to the database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

//! Route modules
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the database layer. Handlers return
//! `Result<Response, AppError>`; error mapping to status codes lives in the
//! `errors` module.

/// Health check route
pub mod health;

/// Per-user state document routes
pub mod state;

/// Encrypted token routes
pub mod tokens;

/// User profile routes
pub mod users;

pub use health::HealthRoutes;
pub use state::StateRoutes;
pub use tokens::TokenRoutes;
pub use users::UserRoutes;

use serde::{Deserialize, Serialize};

/// Generic success response carrying a human-readable message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}

impl MessageResponse {
    /// Build a message response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
