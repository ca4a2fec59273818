//! Thankly backend library.
//!
//! This crate provides the backend functionality as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires it to a socket.
//!
//! # Architecture
//!
//! - Axum web framework
//! - `PostgreSQL` for per-shop configuration (the authoritative store)
//! - Shopify Admin REST for mirroring the message into a shop metafield
//! - tower-sessions for the installed-shop session established by the
//!   platform OAuth collaborator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
