//! Render a Chromium bookmarks export as one static, CSS-only HTML page.
//!
//! - domain: typed bookmark tree and ports
//! - usecase: selection, conversion, folder extraction, document assembly
//! - infrastructure: serde + async IO, schema checks, host extraction, escaping
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
