//! Per-entity modal form models.
//!
//! ARCHITECTURE
//! ============
//! Each form is seeded from an existing record (edit) or defaults (create),
//! mutated field by field by its modal, and turned into the wire payload by
//! `validate`, which performs required-field checks without touching the
//! network. `is_edit` decides between PUT and POST.

pub mod alert;
pub mod announcement;
pub mod assignment;
pub mod collaborator;
pub mod contact;
pub mod export;
pub mod patient;
pub mod phone;
pub mod tambo;
pub mod visit;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Client-side validation failure; the modal stays open and shows it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} es obligatorio")]
    Required(&'static str),
    #[error("{0}")]
    Invalid(String),
    #[error("No se ha podido identificar al usuario autenticado")]
    NoSession,
    #[error("Espere a que se genere el código del tambo")]
    CodePending,
}

/// Trimmed value, or `Required(field)` when blank.
///
/// # Errors
///
/// Returns [`FormError::Required`] for blank input.
pub fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(FormError::Required(field)) } else { Ok(trimmed.to_owned()) }
}

/// Trimmed value, `None` when blank.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// `YYYY-MM-DD` prefix of an ISO timestamp, as date inputs expect.
#[must_use]
pub fn date_only(value: &str) -> String {
    value.split('T').next().unwrap_or_default().trim().to_owned()
}

/// Peruvian national id: exactly eight ASCII digits.
#[must_use]
pub fn is_dni(value: &str) -> bool {
    value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an optional decimal input; blank is `None`.
///
/// # Errors
///
/// Returns [`FormError::Invalid`] naming the field when the text is not a
/// number.
pub fn optional_number(value: &str, field: &str) -> Result<Option<f64>, FormError> {
    let trimmed = value.trim().replace(',', ".");
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| FormError::Invalid(format!("{field} debe ser un número")))
}

/// Render an optional number back into an input value.
#[must_use]
pub fn number_text(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
