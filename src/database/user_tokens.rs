// ABOUTME: Encrypted per-user token storage keyed by (user_id, token_type)
// ABOUTME: Plaintext never reaches the pool; ciphertext never leaves decrypt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};

impl Database {
    /// Get a stored token's plaintext
    ///
    /// Returns `Ok(None)` when no token was ever saved for this
    /// (user, token type) pair. Stored ciphertext that fails to decrypt
    /// (rotated key, corrupt data) is a distinct decryption error, NOT
    /// absence; the HTTP boundary decides whether to mask it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or decryption fails
    pub async fn get_token(&self, user_id: &str, token_type: &str) -> AppResult<Option<String>> {
        let row = sqlx::query(
            r"
            SELECT token_value FROM user_tokens
            WHERE user_id = $1 AND token_type = $2
            ",
        )
        .bind(user_id)
        .bind(token_type)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to query user token: {e}")))?;

        match row {
            Some(row) => {
                let ciphertext: String = row.get("token_value");
                Ok(Some(self.decrypt_data(&ciphertext)?))
            }
            None => Ok(None),
        }
    }

    /// Save a token, encrypting it with the process-wide key
    ///
    /// Overwrites any previous ciphertext for the same (user, token type)
    /// pair. The upsert is a single atomic statement, so concurrent saves
    /// for a new pair cannot race into duplicate rows; `id` and `created_at`
    /// of an existing row survive the overwrite.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The plaintext is empty (invalid input)
    /// - Encryption fails
    /// - The database operation fails
    pub async fn save_token(
        &self,
        user_id: &str,
        token_type: &str,
        plaintext: &str,
    ) -> AppResult<()> {
        if plaintext.is_empty() {
            return Err(AppError::invalid_input("token is required"));
        }

        let ciphertext = self.encrypt_data(plaintext)?;
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO user_tokens (id, user_id, token_type, token_value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (user_id, token_type)
            DO UPDATE SET
                token_value = EXCLUDED.token_value,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id)
        .bind(token_type)
        .bind(&ciphertext)
        .bind(now)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to save user token: {e}")))?;

        Ok(())
    }

    /// Delete a token if present
    ///
    /// Deleting a token that does not exist is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete_token(&self, user_id: &str, token_type: &str) -> AppResult<()> {
        sqlx::query(
            r"
            DELETE FROM user_tokens
            WHERE user_id = $1 AND token_type = $2
            ",
        )
        .bind(user_id)
        .bind(token_type)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to delete user token: {e}")))?;

        Ok(())
    }
}
