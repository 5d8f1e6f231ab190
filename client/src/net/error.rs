//! Error type for REST calls against the outreach backend.
//!
//! ERROR HANDLING
//! ==============
//! Every API helper returns `Result<_, ApiError>`. Views log the error and turn
//! it into a toast through [`ApiError::user_message`]; nothing on the request
//! path panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status with the backend's message, if any.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// Model-validation failure reported as `{"errors": {field: [msg]}}`.
    #[error("validation failed: {}", join_fields(.fields))]
    Validation { fields: BTreeMap<String, Vec<String>> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser-only call made outside the browser.
    #[error("not available on server")]
    Unavailable,
}

fn join_fields(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Deserialize)]
struct ValidationBody {
    errors: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default, alias = "mensaje")]
    message: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(v) = serde_json::from_str::<ValidationBody>(body) {
            if !v.errors.is_empty() {
                return Self::Validation { fields: v.errors };
            }
        }
        let message = match serde_json::from_str::<MessageBody>(body) {
            Ok(m) => m.message.or(m.title).unwrap_or_default(),
            // Plain-text bodies ("Credenciales inválidas") are used as-is.
            Err(_) => body.trim().trim_matches('"').to_owned(),
        };
        Self::Status { status, message }
    }

    /// Text suitable for a toast or inline form message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "No se pudo conectar con el servidor".to_owned(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Error del servidor ({status})"),
            Self::Validation { fields } => format!("Errores de validación: {}", join_fields(fields)),
            Self::Decode(_) => "Respuesta inesperada del servidor".to_owned(),
            Self::Unavailable => "Operación no disponible".to_owned(),
        }
    }

    /// `true` for 401/403 responses, which end the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
