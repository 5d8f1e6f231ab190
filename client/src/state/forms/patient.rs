//! Patient form: links a registered user (Gestante or Niño) to a patient row.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use super::FormError;
use crate::net::types::{Paciente, PacientePayload};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub id: Option<i64>,
    pub user_id: i64,
    pub tiene_anemia: bool,
}

impl PatientForm {
    #[must_use]
    pub fn from_patient(p: &Paciente) -> Self {
        Self { id: Some(p.id), user_id: p.user_id, tiene_anemia: p.tiene_anemia }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// # Errors
    ///
    /// A user must be selected.
    pub fn validate(&self) -> Result<PacientePayload, FormError> {
        if self.user_id == 0 {
            return Err(FormError::Invalid("Debes seleccionar un usuario.".to_owned()));
        }
        Ok(PacientePayload { id: self.id, user_id: self.user_id, tiene_anemia: self.tiene_anemia })
    }
}
