//! Same-origin pass-through to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. `/api/{*path}` is forwarded to
//! the configured API base and `/media/{*path}` to the backend origin that
//! serves uploaded files. Method, query, body and the request headers listed
//! in [`FORWARDED_REQUEST_HEADERS`] travel upstream; status, body and the
//! response headers in [`FORWARDED_RESPONSE_HEADERS`] come back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body accepted for forwarding (attachment uploads).
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub static FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE];

pub static FORWARDED_RESPONSE_HEADERS: [HeaderName; 5] = [
    header::CONTENT_TYPE,
    header::CONTENT_DISPOSITION,
    header::CACHE_CONTROL,
    header::ETAG,
    header::LAST_MODIFIED,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid upstream path: {0}")]
    InvalidPath(String),
    #[error("request body too large")]
    BodyTooLarge,
    #[error("upstream timed out")]
    Timeout,
    #[error("upstream unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "proxy failure");
        }
        (status, self.to_string()).into_response()
    }
}

/// Join `base`, the captured `path` and the original query string. Empty,
/// `.` and `..` segments are refused so a request can never climb above the
/// configured base.
///
/// # Errors
///
/// [`ProxyError::InvalidPath`] for dot or empty segments.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let path = path.trim_start_matches('/');
    if path.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(ProxyError::InvalidPath(path.to_owned()));
    }
    let mut url = format!("{}/{path}", base.trim_end_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Ok(url)
}

fn copy_headers(from: &HeaderMap, names: &[HeaderName], to: &mut HeaderMap) {
    for name in names {
        for value in from.get_all(name) {
            to.append(name.clone(), value.clone());
        }
    }
}

/// `ANY /api/{*path}`.
pub async fn api(State(state): State<AppState>, Path(path): Path<String>, request: Request) -> Result<Response, ProxyError> {
    let base = state.config.api_upstream_url.clone();
    forward(&state, &base, &path, request).await
}

/// `GET /media/{*path}`.
pub async fn media(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, ProxyError> {
    let base = state.config.media_upstream_url.clone();
    forward(&state, &base, &path, request).await
}

async fn forward(state: &AppState, base: &str, path: &str, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(base, path, parts.uri.query())?;
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|_| ProxyError::BodyTooLarge)?;

    let mut headers = HeaderMap::new();
    copy_headers(&parts.headers, &FORWARDED_REQUEST_HEADERS, &mut headers);

    tracing::debug!(method = %parts.method, %url, "proxying request");
    let upstream = state.http.request(parts.method, &url).headers(headers).body(body).send().await?;

    let status = upstream.status();
    let mut response_headers = HeaderMap::new();
    copy_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS, &mut response_headers);
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%status, %url, "upstream returned an error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
