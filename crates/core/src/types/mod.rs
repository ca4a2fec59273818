//! Core types for Thankly.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod shop_domain;

pub use shop_domain::{ShopDomain, ShopDomainError};
