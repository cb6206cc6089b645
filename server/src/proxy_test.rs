use super::*;

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(upstream_url("https://b.test/api", "tasks", None), "https://b.test/api/tasks");
    assert_eq!(upstream_url("https://b.test/api/", "/tasks/t1/executions", None), "https://b.test/api/tasks/t1/executions");
}

#[test]
fn upstream_url_appends_query() {
    assert_eq!(upstream_url("http://b", "tasks", Some("limit=20&page=2")), "http://b/tasks?limit=20&page=2");
}

#[test]
fn upstream_url_skips_empty_query() {
    assert_eq!(upstream_url("http://b", "auth/me", Some("")), "http://b/auth/me");
}

#[test]
fn proxy_error_maps_to_bad_gateway() {
    let err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let response = ProxyError::Upstream(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
}

#[test]
fn new_keeps_base() {
    let proxy = ApiProxy::new("http://b", Duration::from_secs(1)).unwrap();
    assert_eq!(proxy.base(), "http://b");
}

mod relay {
    use axum::Router;
    use axum::http::{HeaderValue, Uri};
    use axum::response::AppendHeaders;
    use axum::routing::any;

    use super::*;

    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
        if uri.path().ends_with("/empty") {
            return StatusCode::NO_CONTENT.into_response();
        }
        let read = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
        let echoed = serde_json::json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "cookie": read("cookie"),
            "authorization": read("authorization"),
            "x_private": read("x-private"),
            "body": body,
        });
        (
            StatusCode::CREATED,
            AppendHeaders([(header::SET_COOKIE, "session=abc; Path=/"), (header::SET_COOKIE, "theme=dark; Path=/")]),
            [(header::CONTENT_TYPE, "application/json"), (header::ETAG, "\"v1\"")],
            echoed.to_string(),
        )
            .into_response()
    }

    async fn spawn_upstream() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/v1/{*rest}", any(echo));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn forward_relays_request_and_response() {
        let proxy = ApiProxy::new(spawn_upstream().await, Duration::from_secs(5)).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("sid=123"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
        headers.insert("x-private", HeaderValue::from_static("secret"));

        let response = proxy
            .forward(Method::POST, "/tasks/a%2Fb", Some("limit=2&page=1"), &headers, Bytes::from_static(b"{\"x\":1}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let cookies: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
        assert_eq!(cookies, ["session=abc; Path=/", "theme=dark; Path=/"]);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert!(response.headers().get(header::ETAG).is_none());

        let echoed = body_json(response).await;
        assert_eq!(echoed["method"], "POST");
        assert_eq!(echoed["path"], "/v1/tasks/a%2Fb");
        assert_eq!(echoed["query"], "limit=2&page=1");
        assert_eq!(echoed["cookie"], "sid=123");
        assert_eq!(echoed["authorization"], "Bearer t");
        assert_eq!(echoed["x_private"], serde_json::Value::Null);
        assert_eq!(echoed["body"], "{\"x\":1}");
    }

    #[tokio::test]
    async fn forward_does_not_invent_content_type() {
        let proxy = ApiProxy::new(spawn_upstream().await, Duration::from_secs(5)).unwrap();
        let response = proxy
            .forward(Method::DELETE, "tasks/t1/empty", None, &HeaderMap::new(), Bytes::new())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let proxy = ApiProxy::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = proxy.forward(Method::GET, "tasks", None, &HeaderMap::new(), Bytes::new()).await.unwrap_err();
        assert!(matches!(err, ProxyError::Upstream(_)));
    }
}
