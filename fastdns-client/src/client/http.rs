//! Authenticated request dispatch and error normalization.
//!
//! Every domain/record/account operation funnels through [`dispatch_raw`]:
//! session precondition, header set, optional JSON body or query string,
//! then one normalization rule for every status >= 400.
//!
//! [`dispatch_raw`]: FastDnsClient::dispatch_raw

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FastDnsError, Result};
use crate::http_client::HttpUtils;
use crate::types::ApiErrorBody;

use super::FastDnsClient;

impl FastDnsClient {
    /// GET returning a typed body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self
            .dispatch_raw(Method::GET, path, None, None::<&()>)
            .await?;
        HttpUtils::parse_json(&text)
    }

    /// GET with query parameters appended to the URL.
    ///
    /// No operation currently sends query parameters; the path exists for
    /// completeness and mirrors the provider's documented calling
    /// convention for GET and DELETE.
    #[allow(dead_code)]
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let text = self
            .dispatch_raw(Method::GET, path, Some(query), None::<&()>)
            .await?;
        HttpUtils::parse_json(&text)
    }

    /// POST with a JSON body, returning a typed body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let text = self
            .dispatch_raw(Method::POST, path, None, Some(body))
            .await?;
        HttpUtils::parse_json(&text)
    }

    /// PUT with a JSON body, returning a typed body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let text = self
            .dispatch_raw(Method::PUT, path, None, Some(body))
            .await?;
        HttpUtils::parse_json(&text)
    }

    /// DELETE. The success body is discarded; failures still normalize.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch_raw(Method::DELETE, path, None, None::<&()>)
            .await?;
        Ok(())
    }

    /// Shared dispatch flow for all authenticated calls.
    ///
    /// Fails with [`FastDnsError::NotAuthenticated`] before touching the
    /// network when no session exists. Returns the raw body text of a
    /// success response; statuses >= 400 come back as
    /// [`FastDnsError::Api`] via [`api_error_from_response`].
    async fn dispatch_raw<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&B>,
    ) -> Result<String> {
        let token = self
            .session
            .as_ref()
            .map(|session| session.token.clone())
            .ok_or(FastDnsError::NotAuthenticated)?;

        let url = build_url(&self.base_url, path, query);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));

        if let Some(body) = body {
            log::debug!(
                "Request Body: {}",
                serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
            );
            request = request.json(body);
        }

        let (status, text) = HttpUtils::execute_request(request, method.as_str(), &url).await?;
        if status >= 400 {
            let error = api_error_from_response(status, &text);
            log::error!("API error: {error}");
            return Err(error);
        }

        Ok(text)
    }
}

/// Build a request URL from the API base, endpoint path and optional query
/// parameters.
fn build_url(base: &str, path: &str, query: Option<&[(&str, &str)]>) -> String {
    let mut url = format!("{base}{path}");
    if let Some(params) = query
        && !params.is_empty()
    {
        let encoded = params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&encoded);
    }
    url
}

/// Normalize a failure response into [`FastDnsError::Api`].
///
/// The provider emits two failure shapes. When the body carries a non-empty
/// `code` and `message` pair, both are used verbatim. Otherwise the message
/// falls back to `errors.name` — or, failing that, the raw body text — and
/// the code to the original HTTP status. Non-JSON bodies take the raw-text
/// path.
fn api_error_from_response(status: u16, body: &str) -> FastDnsError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

    if let (Some(code), Some(message)) = (
        parsed.code.filter(|code| *code != 0),
        parsed.message.as_deref().filter(|message| !message.is_empty()),
    ) {
        return FastDnsError::Api {
            code,
            message: message.to_string(),
        };
    }

    let message = parsed
        .errors
        .as_ref()
        .and_then(|errors| errors.get("name"))
        .cloned()
        .unwrap_or_else(|| body.to_string());

    FastDnsError::Api {
        code: u32::from(status),
        message,
    }
}
