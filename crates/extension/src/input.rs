//! Extension input payload.
//!
//! Shopify supplies this payload to the extension at checkout time. Only the
//! fields the extension reads are modeled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Input payload supplied by the checkout runtime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputData {
    /// Shop-level data for the current shop.
    #[serde(default)]
    pub shop: ShopData,
}

/// Shop-level data exposed to the extension.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopData {
    /// Metafields requested in the extension configuration.
    ///
    /// Absent when the shop has no matching metafields at all.
    #[serde(default)]
    pub metafields: Vec<MetafieldEntry>,
}

/// A single shop metafield entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldEntry {
    /// Metafield namespace.
    pub namespace: String,
    /// Metafield key within the namespace.
    pub key: String,
    /// Stored value.
    pub value: String,
}

impl InputData {
    /// Find a metafield value by namespace and key.
    #[must_use]
    pub fn metafield(&self, namespace: &str, key: &str) -> Option<&str> {
        self.shop
            .metafields
            .iter()
            .find(|m| m.namespace == namespace && m.key == key)
            .map(|m| m.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let payload: InputData = serde_json::from_str(
            r#"{
                "shop": {
                    "metafields": [
                        {"namespace": "post_purchase", "key": "message", "value": "Thanks!"}
                    ]
                },
                "initialPurchase": {"referenceId": "gid://shopify/Checkout/1"}
            }"#,
        )
        .expect("payload should deserialize");

        assert_eq!(payload.metafield("post_purchase", "message"), Some("Thanks!"));
    }

    #[test]
    fn test_deserialize_empty_payload() {
        let payload: InputData = serde_json::from_str("{}").expect("empty payload is valid");
        assert!(payload.shop.metafields.is_empty());
        assert_eq!(payload.metafield("post_purchase", "message"), None);
    }

    #[test]
    fn test_metafield_lookup_requires_both_coordinates() {
        let payload = InputData {
            shop: ShopData {
                metafields: vec![
                    MetafieldEntry {
                        namespace: "post_purchase".to_owned(),
                        key: "other".to_owned(),
                        value: "nope".to_owned(),
                    },
                    MetafieldEntry {
                        namespace: "other".to_owned(),
                        key: "message".to_owned(),
                        value: "nope".to_owned(),
                    },
                ],
            },
        };

        assert_eq!(payload.metafield("post_purchase", "message"), None);
    }
}
