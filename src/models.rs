// ABOUTME: Domain models shared between the database and route layers
// ABOUTME: Defines the User profile record returned by identity store reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile record
///
/// `id` is externally supplied (the extension passes its identity provider's
/// stable subject) and never changes after the first write. `email`, `name`,
/// and `picture` follow last-write-wins upsert semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Externally supplied stable identifier
    pub id: String,
    /// User's email address (unique)
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
    /// Optional avatar URL
    pub picture: Option<String>,
    /// When the record was first created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}
