//! REST helpers for the outreach backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` pass-through, with the stored bearer token attached.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so failed fetches
//! degrade to a toast without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Alerta, Asignacion, Comunicado, Contacto, DniLookup, ExportHistoryResponse, ExportRequest, ExportResult,
    ExportacionHistorial, LoginRequest, LoginResponse, NamedOption, Paciente, RuntimeConfig, Tambo, User, Visita,
};

/// Prefix of the same-origin pass-through to the backend.
pub const API_PREFIX: &str = "/api";

/// HTTP verb of an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A CRUD collection on the backend.
pub trait Resource: DeserializeOwned + 'static {
    /// Collection path used for create, update and delete.
    const PATH: &'static str;
    /// Path of the list endpoint when it differs from [`Resource::PATH`].
    const LIST_PATH: &'static str = Self::PATH;
}

impl Resource for User {
    const PATH: &'static str = "/Users";
}

impl Resource for Tambo {
    const PATH: &'static str = "/Tambos";
}

impl Resource for Paciente {
    const PATH: &'static str = "/Pacientes";
}

impl Resource for Contacto {
    const PATH: &'static str = "/Contactos";
}

impl Resource for Asignacion {
    const PATH: &'static str = "/Asignaciones";
    const LIST_PATH: &'static str = "/Asignaciones/extendidas";
}

impl Resource for Visita {
    const PATH: &'static str = "/VisitaDomiciliaria";
}

impl Resource for Comunicado {
    const PATH: &'static str = "/Comunicado";
}

impl Resource for Alerta {
    const PATH: &'static str = "/Alerta";
}

// =============================================================
// Paths
// =============================================================

/// Same-origin URL for a backend path.
#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

/// `{collection}/{id}`.
#[must_use]
pub fn item_path(collection: &str, id: i64) -> String {
    format!("{collection}/{id}")
}

/// `Authorization` header value.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

#[must_use]
pub fn provinces_path(department: &str) -> String {
    format!("/Tambos/provincias/{}", segment(department))
}

#[must_use]
pub fn districts_path(department: &str, province: &str) -> String {
    format!("/Tambos/distritos/{}/{}", segment(department), segment(province))
}

#[must_use]
pub fn station_code_path(department: &str, province: &str, district: &str) -> String {
    format!(
        "/Tambos/generar-codigo/{}/{}/{}",
        segment(department),
        segment(province),
        segment(district)
    )
}

#[must_use]
pub fn export_history_path(user_id: i64) -> String {
    format!("/exportacionhistorial/usuario/{user_id}")
}

#[must_use]
pub fn firebase_token_path(user_id: i64) -> String {
    format!("/Users/{user_id}/firebase-token")
}

/// Browser-loadable URL for an uploaded attachment. Absolute and data URLs
/// pass through; backend-relative paths go through the host's `/media` proxy.
#[must_use]
pub fn media_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() || url.contains("://") || url.starts_with("data:") || url.starts_with("/media/") {
        return url.to_owned();
    }
    format!("/media/{}", url.trim_start_matches('/'))
}

// =============================================================
// Transport
// =============================================================

/// Decode a JSON body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the generated station code from a text, JSON-string or
/// `{codigo}`/`{code}` body.
#[must_use]
pub fn parse_code_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Object(map)) => map
            .get("codigo")
            .or_else(|| map.get("code"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        _ => body.trim().to_owned(),
    }
}

/// Perform a request against an absolute same-origin URL and return the body.
#[cfg(feature = "hydrate")]
async fn send_url(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    if let Some(token) = crate::util::storage::load_string(crate::util::storage::TOKEN_KEY) {
        builder = builder.header("Authorization", &bearer_header(&token));
    }
    let request = match body {
        Some(json) => builder.header("Content-Type", "application/json").body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::from_response(status, &text));
    }
    Ok(text)
}

#[cfg(not(feature = "hydrate"))]
async fn send_url(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let _ = (method, url, body);
    Err(ApiError::Unavailable)
}

async fn send(method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
    let result = send_url(method, &api_url(path), body).await;
    if let Err(e) = &result {
        log::warn!("{method:?} {path} failed: {e}");
    }
    result
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` a JSON value.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = send(Method::Get, path, None).await?;
    decode(&text)
}

/// `POST` a JSON body and decode the JSON response.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let text = send(Method::Post, path, Some(encode_body(body)?)).await?;
    decode(&text)
}

/// `POST` a JSON body and return the raw response text.
///
/// # Errors
///
/// Network and status failures.
pub async fn post_text<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    send(Method::Post, path, Some(encode_body(body)?)).await
}

/// `PUT` a JSON body, ignoring the response body.
///
/// # Errors
///
/// Network and status failures.
pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(Method::Put, path, Some(encode_body(body)?)).await.map(|_| ())
}

/// `DELETE` a path.
///
/// # Errors
///
/// Network and status failures.
pub async fn delete_path(path: &str) -> Result<(), ApiError> {
    send(Method::Delete, path, None).await.map(|_| ())
}

// =============================================================
// CRUD
// =============================================================

/// Fetch the whole collection.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn list<R: Resource>() -> Result<Vec<R>, ApiError> {
    get_json(R::LIST_PATH).await
}

/// Create a record.
///
/// # Errors
///
/// Network and status failures, including backend validation.
pub async fn create<R: Resource, B: Serialize>(body: &B) -> Result<(), ApiError> {
    post_text(R::PATH, body).await.map(|_| ())
}

/// Replace a record by id.
///
/// # Errors
///
/// Network and status failures, including backend validation.
pub async fn update<R: Resource, B: Serialize>(id: i64, body: &B) -> Result<(), ApiError> {
    put_unit(&item_path(R::PATH, id), body).await
}

/// Delete a record by id.
///
/// # Errors
///
/// Network and status failures.
pub async fn delete<R: Resource>(id: i64) -> Result<(), ApiError> {
    delete_path(&item_path(R::PATH, id)).await
}

// =============================================================
// Authentication and identity
// =============================================================

/// `POST /Users/login`.
///
/// # Errors
///
/// Returns the backend's message on rejected credentials.
pub async fn login(dni: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { dni: dni.trim().to_owned(), password: password.to_owned() };
    post_json("/Users/login", &body).await
}

/// `POST /Users/dni` national-id lookup.
///
/// # Errors
///
/// Fails when the document is unknown or the lookup service is down.
pub async fn lookup_dni(dni: &str) -> Result<DniLookup, ApiError> {
    post_json("/Users/dni", &serde_json::json!({ "dni": dni })).await
}

/// `POST /users/verify/send`.
///
/// # Errors
///
/// Network and status failures.
pub async fn send_phone_code(phone: &str) -> Result<(), ApiError> {
    post_text("/users/verify/send", &serde_json::json!({ "phone": phone })).await.map(|_| ())
}

/// `POST /users/verify/check`.
///
/// # Errors
///
/// Fails when the code is rejected.
pub async fn check_phone_code(phone: &str, code: &str) -> Result<(), ApiError> {
    post_text("/users/verify/check", &serde_json::json!({ "phone": phone, "code": code }))
        .await
        .map(|_| ())
}

/// `POST /users/recover-password`.
///
/// # Errors
///
/// Fails when the document and phone do not match an account.
pub async fn recover_password(dni: &str, phone: &str) -> Result<(), ApiError> {
    post_text("/users/recover-password", &serde_json::json!({ "dni": dni, "phone": phone }))
        .await
        .map(|_| ())
}

/// `POST /users/reset-password`.
///
/// # Errors
///
/// Fails when the code is wrong or expired.
pub async fn reset_password(dni: &str, phone: &str, code: &str, new_password: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "dni": dni, "phone": phone, "code": code, "newPassword": new_password });
    post_text("/users/reset-password", &body).await.map(|_| ())
}

// =============================================================
// Lookups
// =============================================================

/// `GET /Tambos/departamentos`.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn departments() -> Result<Vec<String>, ApiError> {
    get_json("/Tambos/departamentos").await
}

/// `GET /Tambos/provincias/{dep}`.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn provinces(department: &str) -> Result<Vec<String>, ApiError> {
    get_json(&provinces_path(department)).await
}

/// `GET /Tambos/distritos/{dep}/{prov}`.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn districts(department: &str, province: &str) -> Result<Vec<String>, ApiError> {
    get_json(&districts_path(department, province)).await
}

/// `GET /Tambos/generar-codigo/{dep}/{prov}/{dist}`.
///
/// # Errors
///
/// Network and status failures.
pub async fn next_station_code(department: &str, province: &str, district: &str) -> Result<String, ApiError> {
    let text = send(Method::Get, &station_code_path(department, province, district), None).await?;
    Ok(parse_code_body(&text))
}

/// Managers that can receive an assignment.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn available_managers() -> Result<Vec<User>, ApiError> {
    get_json("/Asignaciones/gestores-disponibles").await
}

/// Stations that can receive an assignment.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn available_stations() -> Result<Vec<Tambo>, ApiError> {
    get_json("/Asignaciones/tambos-disponibles").await
}

/// Users that can be registered as patients.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn patient_user_options() -> Result<Vec<NamedOption>, ApiError> {
    get_json("/Pacientes/usuarios-pacientes").await
}

/// Patients that can receive a contact.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn contact_patient_options() -> Result<Vec<NamedOption>, ApiError> {
    get_json("/Contactos/pacientes-disponibles").await
}

// =============================================================
// Announcements
// =============================================================

/// Upload an announcement attachment and return its URL.
///
/// # Errors
///
/// Network, status and decode failures.
#[cfg(feature = "hydrate")]
pub async fn upload_attachment(file: web_sys::File) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    let mut builder = Request::post(&api_url("/Comunicado/upload"));
    if let Some(token) = crate::util::storage::load_string(crate::util::storage::TOKEN_KEY) {
        builder = builder.header("Authorization", &bearer_header(&token));
    }
    let resp = builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::from_response(status, &text));
    }
    let body: super::types::UploadResponse = decode(&text)?;
    Ok(body.url)
}

// =============================================================
// Push registration
// =============================================================

/// `PUT /Users/{id}/firebase-token`.
///
/// # Errors
///
/// Network and status failures.
pub async fn save_firebase_token(user_id: i64, token: &str) -> Result<(), ApiError> {
    put_unit(&firebase_token_path(user_id), &serde_json::json!({ "firebaseToken": token })).await
}

/// `POST /Alerta/probar-notificacion`; returns the backend's message.
///
/// # Errors
///
/// Network and status failures.
pub async fn send_test_push(token: &str) -> Result<String, ApiError> {
    let text = post_text("/Alerta/probar-notificacion", &serde_json::json!({ "token": token })).await?;
    Ok(text.trim().trim_matches('"').to_owned())
}

// =============================================================
// Exports
// =============================================================

/// Generate an export and return its QR and history row.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn generate_export(request: &ExportRequest) -> Result<ExportResult, ApiError> {
    post_json("/exportacionhistorial/generar-exportacion", request).await
}

/// Export history of one user.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn export_history(user_id: i64) -> Result<Vec<ExportacionHistorial>, ApiError> {
    let body: ExportHistoryResponse = get_json(&export_history_path(user_id)).await?;
    Ok(body.historial)
}

/// Delete one export history row.
///
/// # Errors
///
/// Network and status failures.
pub async fn delete_export(id: i64) -> Result<(), ApiError> {
    delete_path(&item_path("/exportacionhistorial", id)).await
}

// =============================================================
// Runtime configuration
// =============================================================

/// Fetch `/config.json` from the host.
///
/// # Errors
///
/// Network, status and decode failures.
pub async fn fetch_runtime_config() -> Result<RuntimeConfig, ApiError> {
    let text = send_url(Method::Get, "/config.json", None).await?;
    decode(&text)
}
