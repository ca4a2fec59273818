//! Middleware: sessions and the authenticated-shop extractor.

pub mod auth;
pub mod session;

pub use auth::{RequireShop, ShopSession};
pub use session::create_session_layer;
