//! Shop metafield upsert via the Admin REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thankly_core::{ShopDomain, metafield};
use tracing::{debug, instrument};

use super::{MessageMirror, ShopifyError};

/// Header carrying the per-shop Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for writing the message metafield on a shop resource.
///
/// Stateless apart from the shared HTTP client: the target shop and its
/// access token arrive with every call, since each request acts on behalf
/// of a different merchant.
#[derive(Debug, Clone)]
pub struct MetafieldClient {
    /// HTTP client.
    client: Client,
    /// Admin API version segment, e.g. `2026-01`.
    api_version: String,
}

/// Request body for the metafield upsert.
#[derive(Debug, Serialize)]
struct MetafieldRequest<'a> {
    metafield: Metafield<'a>,
}

#[derive(Debug, Serialize)]
struct Metafield<'a> {
    namespace: &'a str,
    key: &'a str,
    value: &'a str,
    #[serde(rename = "type")]
    value_type: &'a str,
}

impl MetafieldClient {
    /// Create a new metafield client.
    #[must_use]
    pub fn new(api_version: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_version: api_version.into(),
        }
    }

    /// Metafield collection endpoint on the shop resource.
    ///
    /// POSTing here is an upsert: Shopify creates the metafield on first
    /// write and updates it on subsequent writes to the same
    /// namespace/key pair.
    fn endpoint(&self, shop: &ShopDomain) -> String {
        format!(
            "https://{shop}/admin/api/{version}/metafields.json",
            version = self.api_version
        )
    }
}

#[async_trait]
impl MessageMirror for MetafieldClient {
    #[instrument(skip(self, access_token, message), fields(shop = %shop))]
    async fn sync(
        &self,
        shop: &ShopDomain,
        access_token: &str,
        message: &str,
    ) -> Result<(), ShopifyError> {
        let body = MetafieldRequest {
            metafield: Metafield {
                namespace: metafield::NAMESPACE,
                key: metafield::MESSAGE_KEY,
                value: message,
                value_type: metafield::VALUE_TYPE,
            },
        };

        let response = self
            .client
            .post(self.endpoint(shop))
            .header(ACCESS_TOKEN_HEADER, access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ShopifyError::Api { status, body });
        }

        debug!("message metafield upserted");

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let client = MetafieldClient::new("2026-01");
        let shop = ShopDomain::parse("acme.myshopify.com").unwrap();
        assert_eq!(
            client.endpoint(&shop),
            "https://acme.myshopify.com/admin/api/2026-01/metafields.json"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = MetafieldRequest {
            metafield: Metafield {
                namespace: metafield::NAMESPACE,
                key: metafield::MESSAGE_KEY,
                value: "Thanks!",
                value_type: metafield::VALUE_TYPE,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "metafield": {
                    "namespace": "post_purchase",
                    "key": "message",
                    "value": "Thanks!",
                    "type": "single_line_text_field"
                }
            })
        );
    }
}
