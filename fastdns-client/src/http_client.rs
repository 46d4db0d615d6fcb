//! Generic HTTP execution helpers.
//!
//! One place for the request/response plumbing shared by the login exchange
//! and the authenticated dispatcher: sending a prepared request, mapping
//! transport failures, reading the body and parsing JSON. Error
//! normalization stays out of here — the caller decides what a non-success
//! status means.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::FastDnsError;

/// Maximum number of body bytes included in a log line. Keeps tokens and
/// long record payloads out of debug output.
const LOG_BODY_LIMIT: usize = 256;

/// Truncate a body for logging, backing off to the previous char boundary.
fn truncate_body(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// HTTP tool function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Send a prepared request and return `(status, body text)`.
    ///
    /// Transport failures map to [`FastDnsError::Timeout`] or
    /// [`FastDnsError::Network`]; any received response — success or not —
    /// is returned to the caller for interpretation. Requests are never
    /// retried.
    pub async fn execute_request(
        request: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), FastDnsError> {
        log::debug!("{method_name} {url}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FastDnsError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                FastDnsError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let text = response.text().await.map_err(|e| FastDnsError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_body(&text));

        Ok((status, text))
    }

    /// Parse a success body into the caller's type.
    pub fn parse_json<T>(text: &str) -> Result<T, FastDnsError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_body(text));
            FastDnsError::Parse {
                detail: e.to_string(),
            }
        })
    }
}
