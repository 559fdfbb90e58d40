//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound calls (currently only the waitlist endpoint) go through
//! `build_client()` or `try_build_client()` instead of `reqwest::Client::new()`.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
///
/// The form-intake script usually answers within a couple of seconds, but it
/// redirects once before responding, so leave some headroom.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Build an HTTP client with default timeouts.
///
/// Panics if the client cannot be built (e.g., TLS misconfiguration). Only
/// call this from startup code; use `try_build_client()` elsewhere.
pub fn build_client() -> Client {
    try_build_client().expect("Failed to build HTTP client")
}

/// Build an HTTP client with default timeouts, returning Result for use in
/// fallible contexts.
pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
}
