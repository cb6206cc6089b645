use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_vars_applies_defaults() {
    let cfg = ServerConfig::from_vars(vars(&[("API_UPSTREAM_URL", "https://backend.test/api/")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.api_upstream_url, "https://backend.test/api");
    assert_eq!(cfg.api_timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(vars(&[
        ("API_UPSTREAM_URL", "http://127.0.0.1:8080"),
        ("PORT", "8443"),
        ("BIND_ADDR", "127.0.0.1"),
        ("API_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8443");
    assert_eq!(cfg.api_timeout, Duration::from_secs(5));
}

#[test]
fn from_vars_requires_upstream() {
    assert_eq!(ServerConfig::from_vars(vars(&[])), Err(ConfigError::Missing { var: "API_UPSTREAM_URL" }));
    assert_eq!(
        ServerConfig::from_vars(vars(&[("API_UPSTREAM_URL", "  ")])),
        Err(ConfigError::Missing { var: "API_UPSTREAM_URL" })
    );
}

#[test]
fn from_vars_rejects_non_http_upstream() {
    let err = ServerConfig::from_vars(vars(&[("API_UPSTREAM_URL", "ftp://backend")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "API_UPSTREAM_URL", .. }));
}

#[test]
fn from_vars_reports_bad_numbers() {
    let err = ServerConfig::from_vars(vars(&[("API_UPSTREAM_URL", "http://b"), ("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", ref value, .. } if value == "eighty"));

    let err = ServerConfig::from_vars(vars(&[("API_UPSTREAM_URL", "http://b"), ("API_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "API_TIMEOUT_SECS", .. }));
}

#[test]
fn blank_optional_values_use_defaults() {
    let cfg = ServerConfig::from_vars(vars(&[("API_UPSTREAM_URL", "http://b"), ("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}
