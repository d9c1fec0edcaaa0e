// ABOUTME: Main library entry point for the Tabdeck sync backend
// ABOUTME: Provides user profile, state document, and encrypted token storage over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

#![deny(unsafe_code)]

//! # Tabdeck Sync Server
//!
//! A small user-data backend for the Tabdeck new-tab extension. It persists
//! three things per user: a profile record, one opaque JSON state document,
//! and any number of encrypted third-party tokens keyed by token type.
//!
//! ## Architecture
//!
//! - **Database**: `SQLite` via `sqlx` with compile-time embedded migrations.
//!   Token values are encrypted at rest with AES-256-GCM before they reach
//!   the pool.
//! - **Routes**: axum handlers, one thin handler per endpoint, delegating to
//!   the database layer.
//! - **Config**: environment-only configuration; the server refuses to start
//!   without a persistent encryption secret.

/// Environment-based server configuration
pub mod config;

/// User, state, and token storage with at-rest encryption
pub mod database;

/// Unified error handling with HTTP response mapping
pub mod errors;

/// CORS and request tracing middleware
pub mod middleware;

/// Domain models shared between the database and route layers
pub mod models;

/// `HTTP` routes for user, state, token, and health endpoints
pub mod routes;

/// `HTTP` server assembly and shared resources
pub mod server;
