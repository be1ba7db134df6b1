//! Bearer-token helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sessions are issued elsewhere; the console only reads the token the login
//! flow left in `localStorage` and drops it when the backend rejects it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// `localStorage` key holding the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Route the browser is sent to when the session is rejected.
pub const LOGIN_PATH: &str = "/login";

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// Treat blank stored values as absent.
#[must_use]
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Read the stored session token, if any.
#[cfg(feature = "csr")]
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    normalize_token(storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
}

/// Drop the stored token and send the browser to the login route.
#[cfg(feature = "csr")]
pub fn clear_credentials_and_redirect() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(storage) = window.local_storage().ok().flatten() {
        if let Err(err) = storage.remove_item(AUTH_TOKEN_KEY) {
            log::warn!("failed to clear stored credentials: {err:?}");
        }
    }
    if let Err(err) = window.location().set_href(LOGIN_PATH) {
        log::warn!("failed to redirect to login: {err:?}");
    }
}
