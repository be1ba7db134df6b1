//! REST API helpers for the plot-map backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net` with the stored bearer token.
//! Native builds (tests): stubs returning `ApiError::Network`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 clears stored credentials
//! and redirects to `/login` before the error reaches the caller, so callers
//! only need to surface a status message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EnquiryRequest, Venture};
use crate::config::ClientConfig;

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == 401 { Self::Unauthorized } else { Self::Status(status) }
    }
}

#[must_use]
pub fn ventures_endpoint(base: &str) -> String {
    format!("{base}/ventures")
}

/// Plots endpoint without the query; the venture id is appended as `ventureId`.
#[must_use]
pub fn plots_endpoint(base: &str) -> String {
    format!("{base}/plots")
}

#[must_use]
pub fn enquiries_endpoint(base: &str) -> String {
    format!("{base}/enquiries")
}

/// Fetch all ventures visible to the current user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the body does not decode.
pub async fn fetch_ventures(config: &ClientConfig) -> Result<Vec<Venture>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&ventures_endpoint(&config.api_base_url));
        let resp = send(with_auth(request)).await?;
        let list: super::types::VentureList = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(list.into_vec())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch the plot feature collection for a venture as raw JSON.
///
/// The payload is kept untyped so the poller can compare snapshots exactly.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the body is not JSON.
pub async fn fetch_plots(config: &ClientConfig, venture_id: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request =
            gloo_net::http::Request::get(&plots_endpoint(&config.api_base_url)).query([("ventureId", venture_id)]);
        let resp = send(with_auth(request)).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, venture_id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Submit a lead for a plot.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn submit_enquiry(config: &ClientConfig, enquiry: &EnquiryRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_auth(gloo_net::http::Request::post(&enquiries_endpoint(&config.api_base_url)))
            .json(enquiry)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, enquiry);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "csr")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::stored_token() {
        Some(token) => builder.header("Authorization", &crate::util::auth::bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn send(builder: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(&resp)?;
    Ok(resp)
}

#[cfg(feature = "csr")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let err = ApiError::from_status(resp.status());
    if err == ApiError::Unauthorized {
        log::warn!("request to {} rejected as unauthorized", resp.url());
        crate::util::auth::clear_credentials_and_redirect();
    }
    Err(err)
}
