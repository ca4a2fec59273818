//! Thank-you message API handlers.
//!
//! The write is a two-phase sequence with independent failure reporting:
//! the database upsert is authoritative and decides the response; the
//! metafield mirror write runs after it and is best-effort. A mirror
//! failure is logged with shop context and swallowed - the admin UI must
//! not report a save failure for a message that is durably stored.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};
use thankly_core::DEFAULT_MESSAGE;

use crate::{error::AppError, middleware::auth::RequireShop, state::AppState};

/// Build the message router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/message", get(get_message).post(set_message))
}

/// Response for the message read.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The configured message, or the fixed default when never set.
    pub message: String,
}

/// Request for saving the message.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveMessageRequest {
    /// The new message. Any string is accepted, including empty.
    pub message: String,
}

/// Response for a successful save.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveMessageResponse {
    pub success: bool,
}

/// Fetch the configured message for the authenticated shop.
///
/// A shop that has never saved a message gets the default - absence is a
/// valid state, not an error.
///
/// # Errors
///
/// Returns a generic 500 if the store lookup fails.
pub async fn get_message(
    RequireShop(session): RequireShop,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state
        .store()
        .get_message(&session.shop)
        .await
        .map_err(|e| AppError::store("Failed to fetch message", e))?
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned());

    Ok(Json(MessageResponse { message }))
}

/// Save the message for the authenticated shop and mirror it.
///
/// # Errors
///
/// Returns a generic 500 if the store write fails; the mirror is not
/// attempted in that case. A mirror failure alone never fails the request.
pub async fn set_message(
    RequireShop(session): RequireShop,
    State(state): State<AppState>,
    Json(body): Json<SaveMessageRequest>,
) -> Result<Json<SaveMessageResponse>, AppError> {
    state
        .store()
        .upsert_message(&session.shop, &body.message)
        .await
        .map_err(|e| AppError::store("Failed to save message", e))?;

    if let Err(e) = state
        .mirror()
        .sync(&session.shop, &session.access_token, &body.message)
        .await
    {
        tracing::warn!(
            shop = %session.shop,
            error = %e,
            "message saved but metafield sync failed"
        );
    }

    Ok(Json(SaveMessageResponse { success: true }))
}
