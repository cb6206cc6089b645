//! REST API helpers for communicating with the monitoring backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` prefix, which the host server forwards upstream.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Error strings
//! prefer the backend's own `error`/`message` field and fall back to the
//! HTTP status, so forms can show them verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, Response};

use super::types::{ChangelogEntry, ExecutionRecord, LoginRequest, RegisterRequest, Task, User, WaitlistRequest};

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_executions_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/executions")
}

/// Human-readable failure for a non-OK response.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .filter(|m| !m.trim().is_empty());
    match detail {
        Some(detail) => format!("{action} failed: {detail}"),
        None => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn read_failure(action: &str, resp: Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    failure_message(action, status, &body)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(action: &str, url: &str) -> Result<T, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(action, resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(action: &str, url: &str, body: &B) -> Result<Response, String> {
    let resp = Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(action, resp).await);
    }
    Ok(resp)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("sign-in", "/api/auth/login", request).await?;
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects the account.
pub async fn register(request: &RegisterRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("registration", "/api/auth/register", request).await?;
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// List the signed-in user's monitoring tasks via `GET /api/tasks`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a task list.
pub async fn list_tasks() -> Result<Vec<Task>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("loading tasks", "/api/tasks").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one task via `GET /api/tasks/{task_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the task does not exist.
pub async fn fetch_task(task_id: &str) -> Result<Task, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("loading task", &task_endpoint(task_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a task's execution history, most recent first, via
/// `GET /api/tasks/{task_id}/executions`.
///
/// # Errors
///
/// Returns an error string if the request fails or the payload does not decode.
pub async fn list_executions(task_id: &str) -> Result<Vec<ExecutionRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::get(&task_executions_endpoint(task_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("loading history", resp).await);
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        executions::parse_executions(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err("not available on server".to_owned())
    }
}

/// Join the product waitlist via `POST /api/waitlist`.
///
/// # Errors
///
/// Returns an error string if the request fails or the signup is rejected.
pub async fn join_waitlist(request: &WaitlistRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("waitlist signup", "/api/waitlist", request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch public release notes via `GET /api/changelog`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_changelog() -> Result<Vec<ChangelogEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("loading changelog", "/api/changelog").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
