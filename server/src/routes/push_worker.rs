//! Background push service worker, generated from the configured Firebase
//! web settings so no project id is baked into static assets.

#[cfg(test)]
#[path = "push_worker_test.rs"]
mod push_worker_test;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tambo_client::net::types::FirebaseWebConfig;

use crate::state::AppState;

const FIREBASE_SDK: &str = "https://www.gstatic.com/firebasejs/9.22.1";
const ALERTS_ROUTE: &str = "/alertas";
const DEFAULT_TITLE: &str = "Nueva Alerta";

/// Worker source for `config`. Background messages become OS notifications
/// that open the alerts page when clicked.
#[must_use]
pub fn worker_script(config: &FirebaseWebConfig) -> String {
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_owned());
    format!(
        r#"importScripts('{FIREBASE_SDK}/firebase-app-compat.js');
importScripts('{FIREBASE_SDK}/firebase-messaging-compat.js');

firebase.initializeApp({config_json});

const messaging = firebase.messaging();

messaging.onBackgroundMessage(function (payload) {{
  const notification = payload.notification || {{}};
  const data = payload.data || {{}};
  const title = notification.title || data.title || '{DEFAULT_TITLE}';
  self.registration.showNotification(title, {{
    body: notification.body || data.body || '',
    data: {{ link: '{ALERTS_ROUTE}' }},
  }});
}});

self.addEventListener('notificationclick', function (event) {{
  event.notification.close();
  const link = (event.notification.data && event.notification.data.link) || '{ALERTS_ROUTE}';
  event.waitUntil(clients.openWindow(link));
}});
"#
    )
}

/// `GET /firebase-messaging-sw.js`. 404 while push is not configured, so the
/// browser never installs a worker for an empty project.
pub async fn service_worker(State(state): State<AppState>) -> Response {
    if !state.config.runtime.push_enabled() {
        return StatusCode::NOT_FOUND.into_response();
    }
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8"), (header::CACHE_CONTROL, "no-cache")],
        worker_script(&state.config.runtime.firebase),
    )
        .into_response()
}
