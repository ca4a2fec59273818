//! Render decision and view model.

use thankly_core::metafield;

use crate::input::InputData;

/// Fallback shown when the shop has no mirrored message metafield.
///
/// Intentionally distinct from the store-side default in `thankly-core`:
/// this copy belongs to the extension and makes it visible at checkout that
/// the mirror was never written.
pub const FALLBACK_MESSAGE: &str = "Thank you for your order! (Default Message)";

/// Banner title, fixed copy.
pub const BANNER_TITLE: &str = "Order Completed";

/// Subdued footnote under the banner, fixed copy.
pub const FOOTNOTE: &str = "This is a post-purchase extension.";

/// Result of the `ShouldRender` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShouldRenderResult {
    /// Whether the post-purchase page should be shown.
    pub render: bool,
}

/// Decide whether the post-purchase page renders.
///
/// Always renders: the thank-you banner is shown to every buyer, with
/// fallback copy when no message is configured.
#[must_use]
pub fn should_render(_input: &InputData) -> ShouldRenderResult {
    ShouldRenderResult { render: true }
}

/// View model for the thank-you banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThankYouView {
    /// Banner title.
    pub title: &'static str,
    /// The configured message, or [`FALLBACK_MESSAGE`].
    pub message: String,
    /// Subdued footnote.
    pub footnote: &'static str,
}

/// Build the thank-you view from the extension input.
///
/// Looks up the mirrored `post_purchase`/`message` metafield; a present,
/// non-empty value is displayed verbatim, anything else falls back to
/// [`FALLBACK_MESSAGE`].
#[must_use]
pub fn thank_you_view(input: &InputData) -> ThankYouView {
    let message = input
        .metafield(metafield::NAMESPACE, metafield::MESSAGE_KEY)
        .filter(|v| !v.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_owned();

    ThankYouView {
        title: BANNER_TITLE,
        message,
        footnote: FOOTNOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MetafieldEntry, ShopData};

    fn payload_with(entries: Vec<MetafieldEntry>) -> InputData {
        InputData {
            shop: ShopData {
                metafields: entries,
            },
        }
    }

    fn message_entry(value: &str) -> MetafieldEntry {
        MetafieldEntry {
            namespace: "post_purchase".to_owned(),
            key: "message".to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn test_always_renders() {
        assert!(should_render(&InputData::default()).render);
        assert!(should_render(&payload_with(vec![message_entry("hi")])).render);
    }

    #[test]
    fn test_configured_message_is_displayed_verbatim() {
        let view = thank_you_view(&payload_with(vec![message_entry("Thanks!")]));
        assert_eq!(view.message, "Thanks!");
        assert_eq!(view.title, "Order Completed");
        assert_eq!(view.footnote, "This is a post-purchase extension.");
    }

    #[test]
    fn test_missing_metafield_falls_back() {
        let view = thank_you_view(&InputData::default());
        assert_eq!(view.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_empty_value_falls_back() {
        let view = thank_you_view(&payload_with(vec![message_entry("")]));
        assert_eq!(view.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_other_namespaces_are_ignored() {
        let view = thank_you_view(&payload_with(vec![MetafieldEntry {
            namespace: "reviews".to_owned(),
            key: "message".to_owned(),
            value: "wrong".to_owned(),
        }]));
        assert_eq!(view.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_fallback_differs_from_store_default() {
        // Two independent copy strings; the difference is deliberate.
        assert_ne!(FALLBACK_MESSAGE, thankly_core::DEFAULT_MESSAGE);
    }
}
