//! Thankly Extension - post-purchase rendering logic.
//!
//! The checkout extension is a sandboxed UI fragment that Shopify renders
//! after checkout. It receives a read-only input payload containing shop
//! metafields and decides what to display. This crate holds the pure logic:
//! payload types and the render decision. It performs no I/O of its own -
//! the host supplies the payload and draws the view.
//!
//! # Flow
//!
//! 1. The `ShouldRender` hook runs: [`render::should_render`] always says yes.
//! 2. The render hook runs: [`render::thank_you_view`] looks up the mirrored
//!    message metafield and falls back to fixed copy when it is absent.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod input;
pub mod render;

pub use input::{InputData, MetafieldEntry, ShopData};
pub use render::{FALLBACK_MESSAGE, ShouldRenderResult, ThankYouView, should_render, thank_you_view};
