//! Shopify Admin REST client for the metafield mirror.
//!
//! The configured message is mirrored into a shop metafield so the checkout
//! extension can read it. This is a best-effort secondary write: the
//! database is the source of truth for the admin UI, the metafield is the
//! source of truth for the renderer, and the two may transiently diverge.
//! Callers log sync failures and move on; nothing here rolls back the
//! primary write.

mod metafields;

pub use metafields::MetafieldClient;

use async_trait::async_trait;
use thankly_core::ShopDomain;
use thiserror::Error;

/// Errors that can occur when writing to the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify returned a non-success status.
    #[error("Shopify API returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for logs only.
        body: String,
    },
}

/// The external per-shop mirror of the configured message.
///
/// Injected as a trait object so the write endpoint can be tested with a
/// scripted double; production wires in [`MetafieldClient`]. The access
/// token is the shop's session credential, opaque to this component.
#[async_trait]
pub trait MessageMirror: Send + Sync {
    /// Upsert the message into the shop's metafield.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError` if the request fails or Shopify rejects it.
    /// The caller decides what failure means; this component never retries.
    async fn sync(
        &self,
        shop: &ShopDomain,
        access_token: &str,
        message: &str,
    ) -> Result<(), ShopifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ShopifyError::Api {
            status: 422,
            body: "{\"errors\":{\"value\":[\"can't be blank\"]}}".to_string(),
        };
        assert!(err.to_string().starts_with("Shopify API returned 422:"));
    }
}
