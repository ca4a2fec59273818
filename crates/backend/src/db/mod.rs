//! Database operations for the backend `PostgreSQL`.
//!
//! ## Tables
//!
//! - `shops` - Per-shop configuration (install time, thank-you message)
//! - tower-sessions store tables (provisioned by the session store itself)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/backend/migrations/` and run via:
//! ```bash
//! cargo run -p thankly-cli -- migrate
//! ```

pub mod shops;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thankly_core::ShopDomain;
use thiserror::Error;

pub use shops::ShopStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The authoritative per-shop configuration store.
///
/// The store is injected as a trait object so request handling can be tested
/// against an in-memory double; production wires in [`ShopStore`]. Absence of
/// a record is a valid, default-yielding state, never an error - only
/// infrastructure failures surface as `RepositoryError`.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Fetch the stored message for a shop.
    ///
    /// Returns `Ok(None)` when the shop has no record or has never saved a
    /// message; callers substitute the default.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the lookup fails.
    async fn get_message(&self, shop: &ShopDomain) -> Result<Option<String>, RepositoryError>;

    /// Create or update the message for a shop (last-write-wins).
    ///
    /// Creates the record on first save, setting the install timestamp; a
    /// later save only replaces the message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    async fn upsert_message(&self, shop: &ShopDomain, message: &str)
    -> Result<(), RepositoryError>;

    /// Record an install for a shop.
    ///
    /// Set-once semantics: the install timestamp is written only when the
    /// shop is first seen, and an existing message is never touched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    async fn record_install(&self, shop: &ShopDomain) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
