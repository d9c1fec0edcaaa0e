// ABOUTME: User management database operations
// ABOUTME: Handles profile upserts, lookups, and cascade deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;

/// Profile data for user upsert operations
pub struct UserProfileData<'a> {
    /// Externally supplied stable identifier
    pub id: &'a str,
    /// User's email address
    pub email: &'a str,
    /// Optional display name
    pub name: Option<&'a str>,
    /// Optional avatar URL
    pub picture: Option<&'a str>,
}

impl Database {
    /// Create or update a user profile
    ///
    /// Inserts a new row for an unseen `id`; otherwise overwrites `email`,
    /// `name`, and `picture` unconditionally (last-write-wins). `id` and
    /// `created_at` are never touched on update. The upsert is a single
    /// atomic statement, so concurrent saves for the same `id` cannot race
    /// into duplicate rows.
    ///
    /// Email uniqueness is not pre-checked; a conflicting email is rejected
    /// by the unique constraint and surfaces as a database error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails, including when the
    /// email is already in use by another user.
    pub async fn create_or_update_user(&self, profile: &UserProfileData<'_>) -> AppResult<()> {
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO users (id, email, name, picture, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (id)
            DO UPDATE SET
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                picture = EXCLUDED.picture,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(profile.id)
        .bind(profile.email)
        .bind(profile.name)
        .bind(profile.picture)
        .bind(now)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert user: {e}")))?;

        Ok(())
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, email, name, picture, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        Ok(row.as_ref().map(Self::row_to_user))
    }

    /// Delete a user and everything it owns
    ///
    /// State and token rows are removed by `ON DELETE CASCADE`. Deleting a
    /// non-existent user is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete user: {e}")))?;

        Ok(())
    }

    fn row_to_user(row: &SqliteRow) -> User {
        User {
            id: row.get("id"),
            email: row.get("email"),
            name: row.get("name"),
            picture: row.get("picture"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
