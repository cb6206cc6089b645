//! `/api/{*path}` handler.

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use crate::proxy::{ApiProxy, ProxyError};

/// Forward any method under `/api/` to the backend.
///
/// The path is taken from the raw request URI so percent-encoded segments
/// reach the upstream unchanged.
pub async fn forward(
    State(proxy): State<Arc<ApiProxy>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    proxy.forward(method, upstream_path(uri.path()), uri.query(), &headers, body).await
}

/// Request path with the `/api` mount prefix removed, still percent-encoded.
#[must_use]
pub fn upstream_path(path: &str) -> &str {
    path.strip_prefix("/api").unwrap_or(path)
}
