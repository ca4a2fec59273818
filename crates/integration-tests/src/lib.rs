//! Integration test support for Thankly.
//!
//! Builds the real backend router against in-memory doubles for the
//! configuration store and the metafield mirror, so the full request path
//! (extractors, handlers, error mapping, JSON bodies) is exercised without
//! `PostgreSQL` or Shopify.
//!
//! # Test Categories
//!
//! - `api_message` - Message read/write endpoint behavior
//! - `install_flow` - Post-OAuth install hook behavior
//! - `store_semantics` - Store contract (defaults, idempotence, isolation)
//! - `post_purchase_flow` - Backend-to-extension end-to-end scenario

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::{Extension, Router};
use secrecy::SecretString;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use thankly_backend::config::{BackendConfig, ShopifyApiConfig};
use thankly_backend::db::{MessageStore, RepositoryError};
use thankly_backend::middleware::ShopSession;
use thankly_backend::routes;
use thankly_backend::shopify::{MessageMirror, ShopifyError};
use thankly_backend::state::AppState;
use thankly_core::ShopDomain;

/// A shop record held by [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct StoredShop {
    /// When the shop was first seen.
    pub installed_at: SystemTime,
    /// The saved message, `None` until the first save.
    pub message: Option<String>,
}

/// In-memory [`MessageStore`] with the same upsert semantics as the
/// `PostgreSQL` store: install time is set once, message saves are
/// last-write-wins, and shops never interfere with each other.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    shops: Arc<Mutex<HashMap<String, StoredShop>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect a stored shop record.
    #[must_use]
    pub fn shop(&self, domain: &str) -> Option<StoredShop> {
        self.shops
            .lock()
            .expect("store lock poisoned")
            .get(domain)
            .cloned()
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn get_message(&self, shop: &ShopDomain) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .shops
            .lock()
            .expect("store lock poisoned")
            .get(shop.as_str())
            .and_then(|s| s.message.clone()))
    }

    async fn upsert_message(
        &self,
        shop: &ShopDomain,
        message: &str,
    ) -> Result<(), RepositoryError> {
        let mut shops = self.shops.lock().expect("store lock poisoned");
        match shops.get_mut(shop.as_str()) {
            Some(existing) => existing.message = Some(message.to_owned()),
            None => {
                shops.insert(
                    shop.as_str().to_owned(),
                    StoredShop {
                        installed_at: SystemTime::now(),
                        message: Some(message.to_owned()),
                    },
                );
            }
        }
        Ok(())
    }

    async fn record_install(&self, shop: &ShopDomain) -> Result<(), RepositoryError> {
        let mut shops = self.shops.lock().expect("store lock poisoned");
        shops
            .entry(shop.as_str().to_owned())
            .or_insert_with(|| StoredShop {
                installed_at: SystemTime::now(),
                message: None,
            });
        Ok(())
    }
}

/// A [`MessageStore`] whose every operation fails with a database error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

fn db_error() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl MessageStore for FailingStore {
    async fn get_message(&self, _shop: &ShopDomain) -> Result<Option<String>, RepositoryError> {
        Err(db_error())
    }

    async fn upsert_message(
        &self,
        _shop: &ShopDomain,
        _message: &str,
    ) -> Result<(), RepositoryError> {
        Err(db_error())
    }

    async fn record_install(&self, _shop: &ShopDomain) -> Result<(), RepositoryError> {
        Err(db_error())
    }
}

/// A [`MessageMirror`] that records writes, optionally failing them all.
#[derive(Debug, Default, Clone)]
pub struct RecordingMirror {
    writes: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl RecordingMirror {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mirror whose writes always fail (after being recorded as attempts).
    #[must_use]
    pub fn failing() -> Self {
        Self {
            writes: Arc::default(),
            fail: true,
        }
    }

    /// Successful `(shop, message)` writes, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().expect("mirror lock poisoned").clone()
    }
}

#[async_trait]
impl MessageMirror for RecordingMirror {
    async fn sync(
        &self,
        shop: &ShopDomain,
        _access_token: &str,
        message: &str,
    ) -> Result<(), ShopifyError> {
        if self.fail {
            return Err(ShopifyError::Api {
                status: 500,
                body: "scripted failure".to_owned(),
            });
        }
        self.writes
            .lock()
            .expect("mirror lock poisoned")
            .push((shop.as_str().to_owned(), message.to_owned()));
        Ok(())
    }
}

/// Backend configuration for tests; never connects anywhere.
#[must_use]
pub fn test_config() -> BackendConfig {
    BackendConfig {
        database_url: SecretString::from("postgres://postgres@localhost/thankly_test".to_owned()),
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        base_url: "http://localhost:3000".to_owned(),
        shopify: ShopifyApiConfig {
            api_version: "2026-01".to_owned(),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// A pool handle that never actually connects (handlers under test only
/// touch the injected store).
#[must_use]
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/thankly_test")
        .expect("valid connection string")
}

/// An authenticated shop session for tests.
#[must_use]
pub fn shop_session(shop: &str) -> ShopSession {
    ShopSession {
        shop: ShopDomain::parse(shop).expect("valid shop domain"),
        access_token: "shpat_test_token".to_owned(),
    }
}

/// The backend router with injected doubles and no authenticated session.
#[must_use]
pub fn app(store: Arc<dyn MessageStore>, mirror: Arc<dyn MessageMirror>) -> Router {
    let state = AppState::with_parts(test_config(), lazy_pool(), store, mirror);
    Router::new().merge(routes::routes()).with_state(state)
}

/// The backend router with an authenticated shop session injected, the way
/// the session-validation collaborator would.
#[must_use]
pub fn authed_app(
    store: Arc<dyn MessageStore>,
    mirror: Arc<dyn MessageMirror>,
    session: ShopSession,
) -> Router {
    app(store, mirror).layer(Extension(session))
}

/// Send a GET and return `(status, parsed JSON body)`.
///
/// # Panics
///
/// Panics if the request fails or the body is not JSON.
pub async fn get_json(app: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request should succeed");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, json)
}

/// Send a POST with a JSON body and return `(status, raw body bytes)`.
///
/// # Panics
///
/// Panics if the request fails.
pub async fn post_json(
    app: Router,
    path: &str,
    body: &serde_json::Value,
) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("valid request"),
        )
        .await
        .expect("request should succeed");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, bytes.to_vec())
}
