// ABOUTME: Core database management with migrations and at-rest token encryption
// ABOUTME: Owns the SQLite pool and the process-wide AES-256-GCM encryption key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

/// Per-user opaque JSON state document storage
pub mod user_state;
/// Encrypted per-user token storage
pub mod user_tokens;
/// User account management
pub mod users;

pub use users::UserProfileData;

use base64::engine::general_purpose;
use base64::Engine;
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use ring::digest::{digest, SHA256};
use ring::rand::{SecureRandom, SystemRandom};
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Database connection pool with encryption support
///
/// The encryption key is read-only after construction; cloning the handle
/// shares the underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
    encryption_key: Vec<u8>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database URL is invalid or malformed
    /// - Database connection fails
    /// - `SQLite` file creation fails
    /// - Migration process fails
    pub async fn new(database_url: &str, encryption_key: Vec<u8>) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self {
            pool,
            encryption_key,
        };

        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run all database migrations
    ///
    /// Migrations are embedded at compile time from the `./migrations`
    /// directory, so they are available regardless of working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any migration fails or the connection is lost.
    pub async fn migrate(&self) -> AppResult<()> {
        info!("Running database migrations...");

        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Encrypt sensitive data using AES-256-GCM
    ///
    /// Each call generates a fresh nonce, so encrypting the same plaintext
    /// twice yields different ciphertext. Output is
    /// `base64(nonce || ciphertext || tag)` and is decryptable with only the
    /// key.
    ///
    /// # Errors
    ///
    /// Returns an error if encryption fails
    pub fn encrypt_data(&self, data: &str) -> AppResult<String> {
        let rng = SystemRandom::new();

        let mut nonce_bytes = [0u8; 12];
        rng.fill(&mut nonce_bytes)
            .map_err(|e| AppError::crypto(format!("Failed to generate nonce: {e}")))?;
        let nonce = Nonce::assume_unique_for_key(nonce_bytes);

        let unbound_key = UnboundKey::new(&AES_256_GCM, &self.encryption_key)
            .map_err(|e| AppError::crypto(format!("Failed to create encryption key: {e}")))?;
        let key = LessSafeKey::new(unbound_key);

        let mut data_bytes = data.as_bytes().to_vec();
        key.seal_in_place_append_tag(nonce, Aad::empty(), &mut data_bytes)
            .map_err(|e| AppError::crypto(format!("Failed to encrypt data: {e}")))?;

        let mut combined = nonce_bytes.to_vec();
        combined.extend(data_bytes);

        Ok(general_purpose::STANDARD.encode(combined))
    }

    /// Decrypt sensitive data
    ///
    /// Failures are reported with a decryption-specific error code so callers
    /// can distinguish "unreadable" from "never stored".
    ///
    /// # Errors
    ///
    /// Returns an error if the data is malformed or authentication fails
    /// (wrong key or tampered ciphertext)
    pub fn decrypt_data(&self, encrypted_data: &str) -> AppResult<String> {
        let combined = general_purpose::STANDARD
            .decode(encrypted_data)
            .map_err(|e| AppError::decryption(format!("Failed to decode base64: {e}")))?;

        if combined.len() < 12 {
            return Err(AppError::decryption("Invalid encrypted data: too short"));
        }

        let (nonce_bytes, encrypted_bytes) = combined.split_at(12);
        let nonce = Nonce::assume_unique_for_key(
            nonce_bytes
                .try_into()
                .map_err(|e| AppError::decryption(format!("Invalid nonce size: {e}")))?,
        );

        let unbound_key = UnboundKey::new(&AES_256_GCM, &self.encryption_key)
            .map_err(|e| AppError::crypto(format!("Failed to create decryption key: {e}")))?;
        let key = LessSafeKey::new(unbound_key);

        let mut decrypted_data = encrypted_bytes.to_vec();
        let decrypted = key
            .open_in_place(nonce, Aad::empty(), &mut decrypted_data)
            .map_err(|_| {
                AppError::decryption("Decryption failed (wrong key or tampered data)")
            })?;

        String::from_utf8(decrypted.to_vec()).map_err(|e| {
            AppError::decryption(format!("Failed to convert decrypted data to string: {e}"))
        })
    }
}

/// Derive the process-wide encryption key from a configured secret
///
/// SHA-256 normalizes a secret of any length to the 32 bytes AES-256
/// requires. The same secret always derives the same key, so data written
/// under one deployment remains readable by the next.
#[must_use]
pub fn derive_encryption_key(secret: &str) -> [u8; 32] {
    let hash = digest(&SHA256, secret.as_bytes());
    let mut key = [0u8; 32];
    key.copy_from_slice(hash.as_ref());
    key
}

/// Generate a secure encryption key (32 bytes for AES-256)
///
/// Only used by tests and tooling; the server derives its key from
/// `SESSION_SECRET` and refuses to start without one.
#[must_use]
pub fn generate_encryption_key() -> [u8; 32] {
    use rand::Rng;
    let mut key = [0u8; 32];
    rand::thread_rng().fill(&mut key);
    key
}
