use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            proxy_connect_timeout_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn backend_url_trailing_slash_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "https://api.example.com/ ")])).unwrap();
    assert_eq!(cfg.backend_url, "https://api.example.com");
}

#[test]
fn invalid_port_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn backend_url_requires_scheme() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:8080")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBackendUrl(_)));
}

#[test]
fn malformed_backend_url_rejected() {
    for raw in ["http://[::1", "https://", "http://%zz/"] {
        let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBackendUrl(_)), "{raw}");
    }
}

#[test]
fn bad_timeouts_fall_back_to_defaults() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "soon"), ("PROXY_CONNECT_TIMEOUT_SECS", "2")])).unwrap();
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(cfg.proxy_connect_timeout_secs, 2);
}
