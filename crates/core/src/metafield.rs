//! Shop metafield coordinates.
//!
//! The backend mirrors the configured message into a shop metafield so the
//! checkout-time extension (which can only read shop-level data supplied by
//! Shopify) can display it. Both sides must agree on the namespace and key,
//! so they live here.

/// Metafield namespace for all post-purchase data.
pub const NAMESPACE: &str = "post_purchase";

/// Metafield key holding the configured thank-you message.
pub const MESSAGE_KEY: &str = "message";

/// Shopify value type tag for the message metafield.
pub const VALUE_TYPE: &str = "single_line_text_field";
