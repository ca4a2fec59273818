//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::BackendConfig;
use crate::db::{MessageStore, ShopStore};
use crate::shopify::{MessageMirror, MetafieldClient};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store and mirror are trait objects so
/// tests can swap in doubles; production state is built by [`AppState::new`]
/// with the `PostgreSQL` store and the Admin REST client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BackendConfig,
    pool: PgPool,
    store: Arc<dyn MessageStore>,
    mirror: Arc<dyn MessageMirror>,
}

impl AppState {
    /// Create the production application state.
    #[must_use]
    pub fn new(config: BackendConfig, pool: PgPool) -> Self {
        let store = Arc::new(ShopStore::new(pool.clone()));
        let mirror = Arc::new(MetafieldClient::new(config.shopify.api_version.clone()));
        Self::with_parts(config, pool, store, mirror)
    }

    /// Create application state with explicit store and mirror handles.
    ///
    /// Used by tests to inject doubles; `new` delegates here.
    #[must_use]
    pub fn with_parts(
        config: BackendConfig,
        pool: PgPool,
        store: Arc<dyn MessageStore>,
        mirror: Arc<dyn MessageMirror>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                store,
                mirror,
            }),
        }
    }

    /// Get a reference to the backend configuration.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the configuration store.
    #[must_use]
    pub fn store(&self) -> &dyn MessageStore {
        &*self.inner.store
    }

    /// Get a reference to the metafield mirror.
    #[must_use]
    pub fn mirror(&self) -> &dyn MessageMirror {
        &*self.inner.mirror
    }
}
