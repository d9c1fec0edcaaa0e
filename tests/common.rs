// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, resource, and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code, missing_docs)]

//! Shared test utilities for `tabdeck_sync_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::sync::Arc;

use anyhow::Result;
use tabdeck_sync_server::config::ServerConfig;
use tabdeck_sync_server::database::{Database, UserProfileData};
use tabdeck_sync_server::server::ServerResources;

/// Fixed key so ciphertext written in one step of a test stays readable later
pub const TEST_ENCRYPTION_KEY: [u8; 32] = [0u8; 32];

/// Create an in-memory test database with migrations applied
pub async fn create_test_database() -> Result<Database> {
    let db = Database::new("sqlite::memory:", TEST_ENCRYPTION_KEY.to_vec()).await?;
    Ok(db)
}

/// Configuration for route-level tests (never actually bound)
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        database_url: "sqlite::memory:".to_owned(),
        session_secret: "test-session-secret".to_owned(),
    }
}

/// Create shared server resources backed by an in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(database, test_config())))
}

/// Insert a user so that state and token rows have a parent to reference
pub async fn create_test_user(db: &Database, user_id: &str, email: &str) -> Result<()> {
    let profile = UserProfileData {
        id: user_id,
        email,
        name: Some("Test User"),
        picture: None,
    };
    db.create_or_update_user(&profile).await?;
    Ok(())
}
