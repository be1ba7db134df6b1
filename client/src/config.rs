//! Client configuration resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL can be injected by the hosting page (`<meta
//! name="plotmap-api-base">`), baked in at build time
//! (`PLOTMAP_API_BASE_URL`), or left at the same-origin default. The resolved
//! value is provided as context and never re-read.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Same-origin API prefix used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "/api";

/// Interval between plot refreshes.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;

/// Polling faster than this would hammer the backend for no visible gain.
pub const MIN_POLL_INTERVAL_MS: u32 = 1_000;

/// Meta tag names read from the hosting page.
pub const API_BASE_META: &str = "plotmap-api-base";
pub const POLL_INTERVAL_META: &str = "plotmap-poll-interval-ms";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API prefix without a trailing slash, e.g. `/api` or `https://host/api`.
    pub api_base_url: String,
    pub poll_interval_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE.to_owned(), poll_interval_ms: DEFAULT_POLL_INTERVAL_MS }
    }
}

impl ClientConfig {
    /// Build from raw sources in precedence order: page meta, then build-time env.
    #[must_use]
    pub fn resolve(meta_base: Option<&str>, build_base: Option<&str>, meta_poll: Option<&str>) -> Self {
        Self {
            api_base_url: resolve_api_base(meta_base, build_base),
            poll_interval_ms: parse_poll_interval(meta_poll),
        }
    }

    /// Read the hosting page and build environment.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn load() -> Self {
        let meta_base = read_meta(API_BASE_META);
        let meta_poll = read_meta(POLL_INTERVAL_META);
        Self::resolve(meta_base.as_deref(), option_env!("PLOTMAP_API_BASE_URL"), meta_poll.as_deref())
    }
}

/// First non-blank candidate with trailing slashes trimmed, else [`DEFAULT_API_BASE`].
#[must_use]
pub fn resolve_api_base(meta_base: Option<&str>, build_base: Option<&str>) -> String {
    [meta_base, build_base]
        .into_iter()
        .flatten()
        .map(|raw| raw.trim().trim_end_matches('/'))
        .find(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_owned()
}

/// Parse a poll interval override, clamped to [`MIN_POLL_INTERVAL_MS`].
#[must_use]
pub fn parse_poll_interval(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map_or(DEFAULT_POLL_INTERVAL_MS, |ms| ms.max(MIN_POLL_INTERVAL_MS))
}

#[cfg(feature = "csr")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    document.query_selector(&selector).ok().flatten()?.get_attribute("content")
}
