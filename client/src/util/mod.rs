//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM labels, the viewer
//! host) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod format;
#[cfg(feature = "csr")]
pub mod label_layer;
#[cfg(feature = "csr")]
pub mod viewer_host;
