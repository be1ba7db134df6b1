//! Networking modules for the plot-map REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps failures to `ApiError`; `types`
//! defines the wire schema shared by pages and state.

pub mod api;
pub mod types;
