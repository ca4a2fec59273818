//! Post-OAuth install hook.
//!
//! The OAuth handshake itself (authorization redirect, token exchange,
//! session creation) is handled by the platform collaborator before this
//! handler runs; by the time we see the callback the shop domain has been
//! validated upstream. This hook only records the install.

use axum::{
    Router,
    extract::{Query, State},
    response::Redirect,
    routing::get,
};
use serde::Deserialize;
use thankly_core::ShopDomain;

use crate::state::AppState;

/// Build the install router.
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/callback", get(install_callback))
}

/// Query parameters on the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// The installing shop's domain.
    pub shop: Option<String>,
}

/// Record the shop install and send the merchant into the app.
///
/// A persistence failure is logged and otherwise ignored: the merchant must
/// land in the app even if we could not record the install, and the row
/// will be created on their first message save anyway.
pub async fn install_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    if let Some(raw) = query.shop {
        match ShopDomain::parse(&raw) {
            Ok(shop) => match state.store().record_install(&shop).await {
                Ok(()) => tracing::info!(shop = %shop, "recorded shop install"),
                Err(e) => {
                    tracing::error!(shop = %shop, error = %e, "failed to record shop install");
                }
            },
            Err(e) => tracing::warn!(error = %e, "install callback with invalid shop domain"),
        }
    }

    Redirect::to("/")
}
