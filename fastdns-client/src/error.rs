//! Unified error type for FastDNS client operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all FastDNS client operations.
///
/// The provider reports failures in two shapes — `{code, message}` and
/// `{errors: {field: reason}}` — and both are folded into the
/// [`Api`](Self::Api) variant by the dispatcher. Transport-level failures
/// keep their own variants so callers can tell a rejected request apart from
/// one that never completed.
///
/// All variants are serializable for structured error reporting.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FastDnsError {
    /// An API call was attempted before [`auth`](crate::FastDnsClient::auth)
    /// established a session. Raised locally; no request is sent.
    #[error("not authenticated: call auth() first")]
    NotAuthenticated,

    /// The login exchange was rejected (non-200 status).
    #[error("authentication failed ({code}): {message}")]
    Auth {
        /// Provider error code, or the HTTP status when the body carries none.
        code: u32,
        /// Provider-supplied message, or the raw response body.
        message: String,
    },

    /// An authenticated call returned status >= 400.
    #[error("API error ({code}): {message}")]
    Api {
        /// Provider error code, or the HTTP status when the body carries none.
        code: u32,
        /// Normalized provider message.
        message: String,
    },

    /// A network-level failure (DNS resolution, connection refused, etc.).
    #[error("network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    #[error("request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A success response could not be parsed into the expected JSON shape.
    #[error("failed to parse API response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },
}

impl FastDnsError {
    /// Whether the error represents expected behavior (bad input, stale
    /// credentials, missing session) rather than an infrastructure fault.
    ///
    /// Returns `true` for errors that should be logged at `warn` level,
    /// `false` for `error` level. **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::Auth { .. } | Self::Api { .. }
        )
    }
}

/// Convenience type alias for `Result<T, FastDnsError>`.
pub type Result<T> = std::result::Result<T, FastDnsError>;
