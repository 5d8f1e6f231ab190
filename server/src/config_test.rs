use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream_url, DEFAULT_API_UPSTREAM_URL);
    assert_eq!(cfg.media_upstream_url, "https://localhost:7268");
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
    assert!(!cfg.accept_invalid_certs);
    assert!(!cfg.runtime.push_enabled());
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = config_from(&[("PORT", "  "), ("API_UPSTREAM_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream_url, DEFAULT_API_UPSTREAM_URL);
}

// =============================================================================
// upstream urls
// =============================================================================

#[test]
fn upstream_url_trailing_slash_is_trimmed() {
    let cfg = config_from(&[("API_UPSTREAM_URL", "https://backend.example/api/")]).unwrap();
    assert_eq!(cfg.api_upstream_url, "https://backend.example/api");
    assert_eq!(cfg.media_upstream_url, "https://backend.example");
}

#[test]
fn media_upstream_url_can_be_set_explicitly() {
    let cfg = config_from(&[
        ("API_UPSTREAM_URL", "https://backend.example/v2"),
        ("MEDIA_UPSTREAM_URL", "https://files.example/"),
    ])
    .unwrap();
    assert_eq!(cfg.api_upstream_url, "https://backend.example/v2");
    assert_eq!(cfg.media_upstream_url, "https://files.example");
}

#[test]
fn upstream_without_api_suffix_is_its_own_media_origin() {
    let cfg = config_from(&[("API_UPSTREAM_URL", "http://10.0.0.5:5000")]).unwrap();
    assert_eq!(cfg.media_upstream_url, "http://10.0.0.5:5000");
}

// =============================================================================
// parsing errors
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", expected: "port number", value: "http".into() });
}

#[test]
fn invalid_timeout_is_rejected() {
    assert!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "-3")]).is_err());
}

#[test]
fn accept_invalid_certs_parses_boolean_words() {
    for raw in ["1", "true", "YES", " on "] {
        assert!(config_from(&[("UPSTREAM_ACCEPT_INVALID_CERTS", raw)]).unwrap().accept_invalid_certs, "{raw:?}");
    }
    for raw in ["0", "false", "No", "off"] {
        assert!(!config_from(&[("UPSTREAM_ACCEPT_INVALID_CERTS", raw)]).unwrap().accept_invalid_certs, "{raw:?}");
    }
    assert!(config_from(&[("UPSTREAM_ACCEPT_INVALID_CERTS", "maybe")]).is_err());
}

// =============================================================================
// firebase
// =============================================================================

#[test]
fn firebase_values_fill_runtime_config() {
    let cfg = config_from(&[
        ("FIREBASE_API_KEY", "key"),
        ("FIREBASE_AUTH_DOMAIN", "tambo.firebaseapp.com"),
        ("FIREBASE_PROJECT_ID", "tambo"),
        ("FIREBASE_STORAGE_BUCKET", "tambo.appspot.com"),
        ("FIREBASE_MESSAGING_SENDER_ID", "123"),
        ("FIREBASE_APP_ID", "1:123:web:abc"),
        ("FIREBASE_VAPID_KEY", "vapid"),
    ])
    .unwrap();
    assert_eq!(cfg.runtime.firebase.project_id, "tambo");
    assert_eq!(cfg.runtime.firebase.messaging_sender_id, "123");
    assert_eq!(cfg.runtime.vapid_key, "vapid");
    assert!(cfg.runtime.push_enabled());
}

#[test]
fn push_needs_vapid_key() {
    let cfg = config_from(&[("FIREBASE_PROJECT_ID", "tambo")]).unwrap();
    assert!(!cfg.runtime.push_enabled());
}
