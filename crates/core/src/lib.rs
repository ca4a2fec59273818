//! Thankly Core - Shared types library.
//!
//! This crate provides common types used across all Thankly components:
//! - `backend` - Authenticated app backend (message store, metafield sync)
//! - `extension` - Checkout-time post-purchase renderer
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and constants - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere, including the extension crate which never touches a server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe shop domains
//! - [`message`] - The default thank-you message
//! - [`metafield`] - Shop metafield coordinates shared by writer and renderer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod message;
pub mod metafield;
pub mod types;

pub use message::DEFAULT_MESSAGE;
pub use types::*;
