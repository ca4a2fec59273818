//! HTTP route handlers for the backend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Liveness check (wired in main)
//! GET  /health/ready    - Readiness check (wired in main)
//!
//! # Install
//! GET  /auth/callback   - Post-OAuth install hook (records the shop)
//!
//! # Message API (authenticated shop session required)
//! GET  /api/message     - Fetch the configured thank-you message
//! POST /api/message     - Save the message and mirror it to the metafield
//! ```

pub mod api;
pub mod auth;

use axum::Router;

use crate::state::AppState;

/// Build the application router (everything except health endpoints).
pub fn routes() -> Router<AppState> {
    Router::new().merge(api::router()).merge(auth::router())
}
