//! Same-origin `/api` proxy to the backend REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever talks to its own origin. Requests under
//! `/api/` are replayed against the configured upstream with the headers the
//! session depends on; everything else about the backend stays opaque.

use std::time::Duration;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Request headers copied to the upstream.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE, header::COOKIE];

/// Response headers copied back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] = [header::CACHE_CONTROL, header::CONTENT_TYPE, header::SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to build upstream client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": "backend unavailable" }))).into_response()
    }
}

/// Forwarding client bound to one upstream base URL.
pub struct ApiProxy {
    client: reqwest::Client,
    base: String,
}

impl ApiProxy {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProxyError::Build)?;
        Ok(Self { client, base: base.into() })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Replay one request upstream and relay the answer.
    ///
    /// Non-2xx upstream statuses are relayed as-is; only transport failures
    /// become errors. Only the allow-listed response headers are copied, so a
    /// body without an upstream `content-type` goes out without one.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Upstream`] if the upstream cannot be reached or
    /// its body cannot be read.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let url = upstream_url(&self.base, path, query);
        let mut request = self.client.request(method.clone(), &url);
        for name in &FORWARDED_REQUEST_HEADERS {
            for value in headers.get_all(name) {
                request = request.header(name, value.clone());
            }
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let upstream = request.send().await.map_err(ProxyError::Upstream)?;
        let status = upstream.status();
        let mut relayed = HeaderMap::new();
        for name in &FORWARDED_RESPONSE_HEADERS {
            for value in upstream.headers().get_all(name) {
                relayed.append(name.clone(), value.clone());
            }
        }
        let bytes = upstream.bytes().await.map_err(ProxyError::Upstream)?;
        tracing::debug!(%method, %url, %status, "api proxied");

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = relayed;
        Ok(response)
    }
}

/// Join the upstream base, the captured `/api/` tail, and the raw query.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
