use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    let url = upstream_url("https://backend.example/api", "Users/login", None).unwrap();
    assert_eq!(url, "https://backend.example/api/Users/login");
}

#[test]
fn upstream_url_keeps_query() {
    let url = upstream_url("https://backend.example/api/", "/estadisticas/visitas-tiempo", Some("agrupadoPor=semana"))
        .unwrap();
    assert_eq!(url, "https://backend.example/api/estadisticas/visitas-tiempo?agrupadoPor=semana");
}

#[test]
fn upstream_url_drops_empty_query() {
    let url = upstream_url("http://b", "Tambos", Some("")).unwrap();
    assert_eq!(url, "http://b/Tambos");
}

#[test]
fn upstream_url_refuses_dot_segments() {
    for path in ["../secrets", "Users/../../etc", "./Users", "Users//1", ""] {
        assert!(matches!(upstream_url("http://b", path, None), Err(ProxyError::InvalidPath(_))), "{path:?}");
    }
}

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::InvalidPath("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn proxy_error_response_carries_message() {
    let response = ProxyError::Timeout.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

// =============================================================================
// header forwarding
// =============================================================================

#[test]
fn copy_headers_keeps_only_listed_names() {
    let mut from = HeaderMap::new();
    from.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());
    from.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    from.insert(header::COOKIE, "session=1".parse().unwrap());
    from.insert(header::HOST, "localhost:3000".parse().unwrap());

    let mut to = HeaderMap::new();
    copy_headers(&from, &FORWARDED_REQUEST_HEADERS, &mut to);

    assert_eq!(to.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(to.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert!(to.get(header::COOKIE).is_none());
    assert!(to.get(header::HOST).is_none());
}
