//! The FastDNS API client.

mod auth;
mod domains;
mod http;
mod records;

use std::time::Duration;

use reqwest::Client;

use crate::types::Session;

/// Base URL of the FastDNS REST API.
pub const FASTDNS_API_BASE: &str = "https://fastdns.fv.ee";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the FastDNS REST API.
///
/// Construct with [`new`](Self::new), establish a session with
/// [`auth`](Self::auth), then call the domain/record operations. The session
/// is plain client-owned state: the client is not `Clone` and callers
/// sharing it across threads are responsible for their own synchronization.
pub struct FastDnsClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) session: Option<Session>,
}

impl FastDnsClient {
    /// Client against the production API host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FASTDNS_API_BASE)
    }

    /// Client against a custom API host (staging, test doubles).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            base_url: base_url.into(),
            session: None,
        }
    }

    /// The current session, if [`auth`](Self::auth) has succeeded.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl Default for FastDnsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client with connect/request timeouts applied.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("failed to build HTTP client")
}
