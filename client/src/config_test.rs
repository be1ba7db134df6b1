use super::*;

// =============================================================
// API base resolution
// =============================================================

#[test]
fn meta_wins_over_build_env() {
    assert_eq!(resolve_api_base(Some("https://meta.example/api"), Some("/build")), "https://meta.example/api");
}

#[test]
fn build_env_used_when_meta_missing_or_blank() {
    assert_eq!(resolve_api_base(None, Some("/v2/api")), "/v2/api");
    assert_eq!(resolve_api_base(Some("   "), Some("/v2/api")), "/v2/api");
}

#[test]
fn default_when_nothing_configured() {
    assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
    assert_eq!(resolve_api_base(Some(""), Some("/")), DEFAULT_API_BASE);
}

#[test]
fn trailing_slashes_trimmed() {
    assert_eq!(resolve_api_base(Some("https://host/api///"), None), "https://host/api");
}

// =============================================================
// Poll interval
// =============================================================

#[test]
fn poll_interval_default_and_override() {
    assert_eq!(parse_poll_interval(None), DEFAULT_POLL_INTERVAL_MS);
    assert_eq!(parse_poll_interval(Some("abc")), DEFAULT_POLL_INTERVAL_MS);
    assert_eq!(parse_poll_interval(Some(" 8000 ")), 8_000);
}

#[test]
fn poll_interval_has_floor() {
    assert_eq!(parse_poll_interval(Some("10")), MIN_POLL_INTERVAL_MS);
}

#[test]
fn resolve_combines_sources() {
    let config = ClientConfig::resolve(None, Some("/x/"), Some("2500"));
    assert_eq!(config, ClientConfig { api_base_url: "/x".to_owned(), poll_interval_ms: 2_500 });
    assert_eq!(ClientConfig::resolve(None, None, None), ClientConfig::default());
}
