// ABOUTME: Per-user opaque JSON state document storage
// ABOUTME: Wholesale upsert and read-time empty default, no interpretation of contents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use chrono::Utc;
use serde_json::Value;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};

impl Database {
    /// Get a user's state document
    ///
    /// Returns an empty mapping if the user has no stored state. The default
    /// is read-time only; no row is created by a get.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the stored document
    /// is not valid JSON
    pub async fn get_state(&self, user_id: &str) -> AppResult<Value> {
        let row = sqlx::query("SELECT state_data FROM user_state WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to query user state: {e}")))?;

        match row {
            Some(row) => {
                let raw: String = row.get("state_data");
                serde_json::from_str(&raw).map_err(|e| {
                    AppError::database(format!("Stored state is not valid JSON: {e}"))
                })
            }
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }

    /// Save a user's state document, replacing any previous one wholesale
    ///
    /// The document is opaque to the store: it is serialized and persisted
    /// as given, never merged with or validated against the previous value.
    /// The upsert is a single atomic statement.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn save_state(&self, user_id: &str, state_data: &Value) -> AppResult<()> {
        let serialized = serde_json::to_string(state_data)?;

        sqlx::query(
            r"
            INSERT INTO user_state (user_id, state_data, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET
                state_data = EXCLUDED.state_data,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(user_id)
        .bind(&serialized)
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to save user state: {e}")))?;

        Ok(())
    }
}
