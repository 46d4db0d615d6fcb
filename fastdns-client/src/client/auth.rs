//! Session establishment against the `login_token` endpoint.

use crate::error::{FastDnsError, Result};
use crate::http_client::HttpUtils;
use crate::types::{ApiErrorBody, Session};

use super::FastDnsClient;

impl FastDnsClient {
    /// Exchange a raw account token for a session credential.
    ///
    /// The raw token goes out as-is in an `Authenticate` header — this is
    /// the only call that does not use the bearer scheme. On HTTP 200 the
    /// returned `{token, expire}` pair is stored on the client and used for
    /// every subsequent call. Any other status fails with
    /// [`FastDnsError::Auth`]. No local token validation, no retry.
    pub async fn auth(&mut self, token: &str) -> Result<()> {
        let url = format!("{}/login_token", self.base_url);
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("Authenticate", token);

        let (status, text) = HttpUtils::execute_request(request, "POST", &url).await?;
        if status != 200 {
            let error = auth_error_from_response(status, &text);
            log::warn!("login exchange failed: {error}");
            return Err(error);
        }

        let session: Session = HttpUtils::parse_json(&text)?;
        self.session = Some(session);
        Ok(())
    }
}

/// Map a failed login exchange to [`FastDnsError::Auth`].
///
/// Carries the provider's `code`/`message` when the body has them; degrades
/// to the raw body text and the HTTP status otherwise (the login endpoint is
/// not guaranteed to emit JSON on failure).
fn auth_error_from_response(status: u16, body: &str) -> FastDnsError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    match (parsed.code, parsed.message) {
        (Some(code), Some(message)) if code != 0 && !message.is_empty() => {
            FastDnsError::Auth { code, message }
        }
        (_, Some(message)) if !message.is_empty() => FastDnsError::Auth {
            code: u32::from(status),
            message,
        },
        _ => FastDnsError::Auth {
            code: u32::from(status),
            message: body.to_string(),
        },
    }
}
