//! Post-OAuth install hook behavior.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use thankly_backend::db::MessageStore;
use thankly_core::ShopDomain;
use thankly_integration_tests::{FailingStore, InMemoryStore, RecordingMirror, app};

async fn get(app: Router, path: &str) -> (StatusCode, Option<String>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request should succeed");

    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().expect("location is ascii").to_owned());
    (response.status(), location)
}

#[tokio::test]
async fn callback_records_install_and_redirects() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone(), Arc::new(RecordingMirror::new()));

    let (status, location) = get(app, "/auth/callback?shop=acme.myshopify.com").await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/"));
    assert!(store.shop("acme.myshopify.com").is_some());
}

#[tokio::test]
async fn reinstall_keeps_original_install_time() {
    let store = Arc::new(InMemoryStore::new());

    let (status, _) = get(
        app(store.clone(), Arc::new(RecordingMirror::new())),
        "/auth/callback?shop=acme.myshopify.com",
    )
    .await;
    assert!(status.is_redirection());
    let first = store.shop("acme.myshopify.com").unwrap().installed_at;

    let (status, _) = get(
        app(store.clone(), Arc::new(RecordingMirror::new())),
        "/auth/callback?shop=acme.myshopify.com",
    )
    .await;
    assert!(status.is_redirection());

    assert_eq!(store.shop("acme.myshopify.com").unwrap().installed_at, first);
}

#[tokio::test]
async fn reinstall_never_clears_saved_message() {
    let store = Arc::new(InMemoryStore::new());
    store
        .upsert_message(
            &"acme.myshopify.com".parse::<ShopDomain>().unwrap(),
            "Configured before reinstall",
        )
        .await
        .unwrap();

    let (status, _) = get(
        app(store.clone(), Arc::new(RecordingMirror::new())),
        "/auth/callback?shop=acme.myshopify.com",
    )
    .await;
    assert!(status.is_redirection());

    assert_eq!(
        store.shop("acme.myshopify.com").unwrap().message.as_deref(),
        Some("Configured before reinstall")
    );
}

#[tokio::test]
async fn callback_redirects_even_when_store_fails() {
    let app = app(Arc::new(FailingStore), Arc::new(RecordingMirror::new()));

    let (status, location) = get(app, "/auth/callback?shop=acme.myshopify.com").await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn callback_redirects_on_invalid_shop_domain() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone(), Arc::new(RecordingMirror::new()));

    let (status, location) = get(app, "/auth/callback?shop=Not%20A%20Domain").await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/"));
    assert!(store.shop("Not A Domain").is_none());
}

#[tokio::test]
async fn callback_redirects_without_shop_parameter() {
    let app = app(Arc::new(InMemoryStore::new()), Arc::new(RecordingMirror::new()));

    let (status, location) = get(app, "/auth/callback").await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/"));
}
