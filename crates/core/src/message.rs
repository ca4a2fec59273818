//! The default thank-you message.

/// Message shown when a shop has never configured one.
///
/// This is the *store-side* default, returned by the configuration API.
/// The checkout extension carries its own fallback copy for the case where
/// the metafield mirror is absent; the two strings are intentionally
/// independent.
pub const DEFAULT_MESSAGE: &str = "Thank you for your order!";
