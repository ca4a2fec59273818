//! Authentication extractor for the installed-shop session.
//!
//! Shop identity is established by the platform's OAuth/session-validation
//! collaborator; this backend trusts it as-is and never re-derives it. The
//! extractor is the capability boundary: handlers state their requirement
//! by taking [`RequireShop`] and receive the resolved [`ShopSession`].

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thankly_core::ShopDomain;
use tower_sessions::Session;

use crate::error::AppError;

/// Session keys used in the tower-sessions record.
pub mod session_keys {
    /// Key holding the [`super::ShopSession`].
    pub const SHOP: &str = "shop_session";
}

/// The authenticated shop behind the current request.
///
/// Written into the session by the OAuth collaborator after a successful
/// handshake; the access token is the shop's offline Admin API credential,
/// opaque to everything here except the metafield client that spends it.
#[derive(Clone, Serialize, Deserialize)]
pub struct ShopSession {
    /// The merchant's shop domain.
    pub shop: ShopDomain,
    /// Admin API access token for this shop.
    pub access_token: String,
}

impl std::fmt::Debug for ShopSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopSession")
            .field("shop", &self.shop)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Extractor that requires an authenticated shop session.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireShop(session): RequireShop) -> impl IntoResponse {
///     format!("Hello, {}!", session.shop)
/// }
/// ```
pub struct RequireShop(pub ShopSession);

/// Rejection when no authenticated shop session is present.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        AppError::Unauthorized.into_response()
    }
}

impl<S> FromRequestParts<S> for RequireShop
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // An upstream layer (or a test) may have resolved the shop already
        if let Some(session) = parts.extensions.get::<ShopSession>() {
            return Ok(Self(session.clone()));
        }

        // Otherwise read the session record (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection)?;

        let shop: ShopSession = session
            .get(session_keys::SHOP)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(shop))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_debug_redacts_access_token() {
        let session = ShopSession {
            shop: ShopDomain::parse("acme.myshopify.com").unwrap(),
            access_token: "shpat_super_secret".to_string(),
        };

        let debug = format!("{session:?}");
        assert!(debug.contains("acme.myshopify.com"));
        assert!(!debug.contains("shpat_super_secret"));
    }

    #[test]
    fn test_rejection_is_unauthorized() {
        assert_eq!(
            AuthRejection.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
