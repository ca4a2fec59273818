//! Authenticated JSON API consumed by the embedded admin page.

pub mod message;

use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    message::router()
}
