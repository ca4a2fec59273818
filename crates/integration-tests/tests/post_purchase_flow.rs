//! End-to-end: admin saves a message, the mirror write carries it to the
//! shop metafield, and the checkout extension renders it.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use thankly_extension::{FALLBACK_MESSAGE, InputData, MetafieldEntry, ShopData, thank_you_view};
use thankly_integration_tests::{
    InMemoryStore, RecordingMirror, authed_app, get_json, post_json, shop_session,
};

/// Build the checkout input payload from a recorded mirror write, the way
/// Shopify would materialize the metafield for the extension.
fn checkout_input(mirror: &RecordingMirror, shop: &str) -> InputData {
    let metafields = mirror
        .writes()
        .iter()
        .rev()
        .find(|(s, _)| s == shop)
        .map(|(_, value)| MetafieldEntry {
            namespace: "post_purchase".to_owned(),
            key: "message".to_owned(),
            value: value.clone(),
        })
        .into_iter()
        .collect();

    InputData {
        shop: ShopData { metafields },
    }
}

#[tokio::test]
async fn saved_message_reaches_the_checkout_banner() {
    let store = Arc::new(InMemoryStore::new());
    let mirror = Arc::new(RecordingMirror::new());
    let session = shop_session("acme.myshopify.com");

    // Merchant saves a message in the admin.
    let (status, _) = post_json(
        authed_app(store.clone(), mirror.clone(), session.clone()),
        "/api/message",
        &json!({ "message": "Thanks!" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The admin read reflects the save.
    let (_, body) = get_json(authed_app(store, mirror.clone(), session), "/api/message").await;
    assert_eq!(body, json!({ "message": "Thanks!" }));

    // The mirrored metafield drives the checkout banner.
    let view = thank_you_view(&checkout_input(&mirror, "acme.myshopify.com"));
    assert_eq!(view.message, "Thanks!");
}

#[tokio::test]
async fn latest_save_wins_at_checkout() {
    let store = Arc::new(InMemoryStore::new());
    let mirror = Arc::new(RecordingMirror::new());
    let session = shop_session("acme.myshopify.com");

    for message in ["First draft", "Final copy"] {
        let (status, _) = post_json(
            authed_app(store.clone(), mirror.clone(), session.clone()),
            "/api/message",
            &json!({ "message": message }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let view = thank_you_view(&checkout_input(&mirror, "acme.myshopify.com"));
    assert_eq!(view.message, "Final copy");
}

#[tokio::test]
async fn unmirrored_shop_sees_extension_fallback() {
    let mirror = RecordingMirror::new();

    let view = thank_you_view(&checkout_input(&mirror, "never-saved.myshopify.com"));
    assert_eq!(view.message, FALLBACK_MESSAGE);
}
