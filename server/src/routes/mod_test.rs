use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;
use crate::config::Config;

fn state_with(vars: &[(&str, &str)]) -> AppState {
    let vars: Vec<(String, String)> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    let config = Config::from_lookup(|key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())).unwrap();
    AppState::new(config).unwrap()
}

fn push_state() -> AppState {
    state_with(&[("FIREBASE_PROJECT_ID", "tambo"), ("FIREBASE_VAPID_KEY", "vapid"), ("FIREBASE_API_KEY", "key")])
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let content_type =
        response.headers().get(header::CONTENT_TYPE).map(|v| v.to_str().unwrap_or_default().to_owned());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// host endpoints
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _, _) = get(api_routes(state_with(&[])), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn config_json_serves_public_runtime_config() {
    let (status, content_type, body) = get(api_routes(push_state()), "/config.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["firebase"]["projectId"], "tambo");
    assert_eq!(json["vapidKey"], "vapid");
}

#[tokio::test]
async fn service_worker_is_served_when_push_is_configured() {
    let (status, content_type, body) = get(api_routes(push_state()), "/firebase-messaging-sw.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/javascript"));
    assert!(body.contains("onBackgroundMessage"));
}

#[tokio::test]
async fn service_worker_is_missing_without_push_config() {
    let (status, _, _) = get(api_routes(state_with(&[])), "/firebase-messaging-sw.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// proxy
// =============================================================================

#[tokio::test]
async fn proxy_refuses_parent_segments_without_calling_upstream() {
    let (status, _, body) = get(api_routes(state_with(&[])), "/api/Users/../../secrets").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("invalid upstream path"));
}

#[tokio::test]
async fn media_proxy_refuses_parent_segments() {
    let (status, _, _) = get(api_routes(state_with(&[])), "/media/../etc/passwd").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
