//! # plotmap-client
//!
//! Leptos + WASM front end for the venture plot map.
//!
//! This crate contains the app shell, pages, components, viewer state, REST
//! types and the polling plot sync. It integrates with the `plotmap` crate
//! for imperative canvas rendering through the `PlotViewer` host component.
//! Browser glue is gated behind the `csr` feature; everything else builds and
//! tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    console_log::init_with_level(log::Level::Info).unwrap_or_default();
    let config = config::ClientConfig::load();
    log::info!("plot map client starting (api base {})", config.api_base_url);
    leptos::mount::mount_to_body(move || leptos::view! { <app::App config/> });
}
