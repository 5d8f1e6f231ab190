//! Collaborator (user) form, shared by the collaborator modal and the
//! self-registration page.

#[cfg(test)]
#[path = "collaborator_test.rs"]
mod collaborator_test;

use super::{FormError, date_only, is_dni, required};
use crate::net::types::{DniLookup, Role, User};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollaboratorForm {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name_p: String,
    pub last_name_m: String,
    pub document_number: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub birth_date: String,
    pub gender: String,
    pub address: String,
    /// Document number the names were last filled from.
    autofilled_for: Option<String>,
}

impl CollaboratorForm {
    /// Empty form for a new collaborator with the given default role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role, ..Self::default() }
    }

    /// Seed from an existing user; the birth date is trimmed to the date part.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            first_name: user.first_name.clone(),
            last_name_p: user.last_name_p.clone(),
            last_name_m: user.last_name_m.clone(),
            document_number: user.document_number.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            role: user.role,
            birth_date: date_only(&user.birth_date),
            gender: user.gender.clone(),
            address: user.address.clone(),
            autofilled_for: None,
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Update the document number. Returns the DNI to look up when it just
    /// became a complete, not yet looked-up national id.
    pub fn set_document(&mut self, value: &str) -> Option<String> {
        self.document_number = value.trim().to_owned();
        self.dni_lookup_target()
    }

    /// DNI to look up, if the document is complete and not yet autofilled.
    #[must_use]
    pub fn dni_lookup_target(&self) -> Option<String> {
        (is_dni(&self.document_number) && self.autofilled_for.as_deref() != Some(self.document_number.as_str()))
            .then(|| self.document_number.clone())
    }

    /// Fill names from a lookup for `dni`; ignored if the document changed
    /// while the lookup was in flight.
    pub fn apply_dni(&mut self, dni: &str, lookup: DniLookup) -> bool {
        if self.document_number != dni {
            return false;
        }
        self.first_name = lookup.first_name;
        self.last_name_p = lookup.last_name_p;
        self.last_name_m = lookup.last_name_m;
        self.autofilled_for = Some(dni.to_owned());
        true
    }

    /// `true` once names came from the national registry.
    #[must_use]
    pub fn is_autofilled(&self) -> bool {
        self.autofilled_for.as_deref() == Some(self.document_number.as_str())
    }

    /// Build the user payload.
    ///
    /// # Errors
    ///
    /// Names, document and (on create) password are required; the document
    /// must be an 8-digit DNI.
    pub fn validate(&self) -> Result<User, FormError> {
        let first_name = required(&self.first_name, "Nombre")?;
        let last_name_p = required(&self.last_name_p, "Apellido paterno")?;
        let document_number = required(&self.document_number, "DNI")?;
        if !is_dni(&document_number) {
            return Err(FormError::Invalid("El DNI debe tener 8 dígitos".to_owned()));
        }
        if !self.is_edit() {
            required(&self.password, "Contraseña")?;
        }
        let email = self.email.trim().to_owned();
        if !email.is_empty() && !email.contains('@') {
            return Err(FormError::Invalid("Correo inválido".to_owned()));
        }
        Ok(User {
            id: self.id.unwrap_or_default(),
            first_name,
            last_name_p,
            last_name_m: self.last_name_m.trim().to_owned(),
            document_number,
            phone: self.phone.trim().to_owned(),
            email,
            password_hash: self.password.clone(),
            role: self.role,
            birth_date: self.birth_date.clone(),
            gender: self.gender.clone(),
            address: self.address.trim().to_owned(),
            firebase_token: None,
        })
    }
}
