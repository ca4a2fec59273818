//! Shop repository for database operations.
//!
//! One row per shop, keyed by shop domain. The upsert-by-primary-key
//! primitive gives per-shop atomicity: writes for distinct shops never
//! interfere, and concurrent writes for the same shop are last-write-wins.
//! That weak consistency matches the admin UI's needs and is deliberately
//! not strengthened with versioning or compare-and-swap.

use async_trait::async_trait;
use sqlx::PgPool;
use thankly_core::ShopDomain;

use super::{MessageStore, RepositoryError};

/// `PostgreSQL`-backed [`MessageStore`].
#[derive(Debug, Clone)]
pub struct ShopStore {
    pool: PgPool,
}

impl ShopStore {
    /// Create a new shop store on top of a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for ShopStore {
    async fn get_message(&self, shop: &ShopDomain) -> Result<Option<String>, RepositoryError> {
        // Option<Option<String>>: outer None = no row, inner None = never saved.
        let row = sqlx::query_scalar::<_, Option<String>>(
            r"
            SELECT message FROM shops
            WHERE shop_domain = $1
            ",
        )
        .bind(shop)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.flatten())
    }

    async fn upsert_message(
        &self,
        shop: &ShopDomain,
        message: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO shops (shop_domain, message)
            VALUES ($1, $2)
            ON CONFLICT (shop_domain) DO UPDATE SET message = EXCLUDED.message
            ",
        )
        .bind(shop)
        .bind(message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn record_install(&self, shop: &ShopDomain) -> Result<(), RepositoryError> {
        // DO NOTHING keeps the first installed_at and any saved message.
        sqlx::query(
            r"
            INSERT INTO shops (shop_domain)
            VALUES ($1)
            ON CONFLICT (shop_domain) DO NOTHING
            ",
        )
        .bind(shop)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
