//! Manager-to-station assignment form.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use super::FormError;
use crate::net::types::{Asignacion, AsignacionPayload, Tambo};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentForm {
    pub id: Option<i64>,
    pub gestor_id: i64,
    pub tambo_id: i64,
    pub centro_poblado: String,
    pub estado: bool,
    /// Read-only mirror of the selected station's location.
    pub departamento: String,
    pub provincia: String,
    pub distrito: String,
}

impl Default for AssignmentForm {
    fn default() -> Self {
        Self {
            id: None,
            gestor_id: 0,
            tambo_id: 0,
            centro_poblado: String::new(),
            estado: true,
            departamento: String::new(),
            provincia: String::new(),
            distrito: String::new(),
        }
    }
}

impl AssignmentForm {
    #[must_use]
    pub fn from_assignment(a: &Asignacion) -> Self {
        Self {
            id: Some(a.id),
            gestor_id: a.gestor_id,
            tambo_id: a.tambo_id,
            centro_poblado: a.centro_poblado.clone().unwrap_or_default(),
            estado: a.estado,
            departamento: a.departamento.clone(),
            provincia: a.provincia.clone(),
            distrito: a.distrito.clone(),
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Select a station and mirror its location.
    pub fn select_tambo(&mut self, tambo_id: i64, tambos: &[Tambo]) {
        self.tambo_id = tambo_id;
        self.sync_location(tambos);
    }

    /// Re-mirror the location once the station options arrive.
    pub fn sync_location(&mut self, tambos: &[Tambo]) {
        if let Some(t) = tambos.iter().find(|t| t.id == Some(self.tambo_id)) {
            self.departamento = t.departamento.clone();
            self.provincia = t.provincia.clone();
            self.distrito = t.distrito.clone();
        }
    }

    /// Build the assignment payload stamped with `now_iso`.
    ///
    /// # Errors
    ///
    /// Both a manager and a station must be selected, and the station must
    /// have a known location.
    pub fn validate(&self, tambos: &[Tambo], now_iso: &str) -> Result<AsignacionPayload, FormError> {
        if self.gestor_id == 0 || self.tambo_id == 0 {
            return Err(FormError::Invalid("Debe seleccionar un gestor y un tambo.".to_owned()));
        }
        let (departamento, provincia, distrito) = match tambos.iter().find(|t| t.id == Some(self.tambo_id)) {
            Some(t) => (t.departamento.clone(), t.provincia.clone(), t.distrito.clone()),
            None if !self.departamento.is_empty() => {
                (self.departamento.clone(), self.provincia.clone(), self.distrito.clone())
            }
            None => return Err(FormError::Invalid("Datos de gestor o tambo no encontrados.".to_owned())),
        };
        Ok(AsignacionPayload {
            id: self.id,
            gestor_id: self.gestor_id,
            tambo_id: self.tambo_id,
            centro_poblado: self.centro_poblado.trim().to_owned(),
            estado: self.estado,
            departamento,
            provincia,
            distrito,
            fecha_asignacion: now_iso.to_owned(),
        })
    }
}
