// ABOUTME: Environment-based server configuration loaded once at startup
// ABOUTME: Refuses to start without a persistent encryption secret or database URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

//! Server configuration
//!
//! Configuration is environment-only. `SESSION_SECRET` is deliberately
//! required: tokens encrypted under a generated ephemeral key would become
//! unrecoverable after a restart, so startup fails loudly instead of
//! falling back.

use std::env;

use crate::errors::{AppError, AppResult};

/// Environment variable holding the secret the token encryption key is
/// derived from
pub const ENV_SESSION_SECRET: &str = "SESSION_SECRET";

/// Environment variable holding the database connection string
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "HOST";

/// Environment variable overriding the HTTP port
pub const ENV_HTTP_PORT: &str = "HTTP_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host for the HTTP listener
    pub host: String,
    /// Bind port for the HTTP listener
    pub http_port: u16,
    /// Database connection string (e.g. `sqlite:tabdeck.db`)
    pub database_url: String,
    /// Secret the process-wide token encryption key is derived from
    pub session_secret: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `DATABASE_URL` or `SESSION_SECRET`
    /// is unset or empty, or if `HTTP_PORT` is not a valid port number.
    pub fn from_env() -> AppResult<Self> {
        let database_url = require_env(ENV_DATABASE_URL)?;
        let session_secret = require_env(ENV_SESSION_SECRET)?;

        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_owned());
        let http_port = match env::var(ENV_HTTP_PORT) {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::config(format!("{ENV_HTTP_PORT} is not a valid port: {raw}"))
            })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            host,
            http_port,
            database_url,
            session_secret,
        })
    }
}

fn require_env(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "{name} must be set (refusing to start without it)"
        ))),
    }
}
