//! Home-visit form and its online/offline submission route.

#[cfg(test)]
#[path = "visit_test.rs"]
mod visit_test;

use super::{FormError, date_only, number_text, optional_number};
use crate::net::types::{Role, User, Visita, VisitaPayload};

/// Where a validated visit goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitRoute {
    Create,
    Update(i64),
    /// Browser is offline: append to the local queue.
    Queue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisitForm {
    pub id: Option<i64>,
    pub paciente_id: i64,
    pub gestor_id: i64,
    pub asignacion_id: Option<i64>,
    pub fecha_visita: String,
    pub observacion: String,
    pub altura: String,
    pub peso: String,
    pub tiene_agua: bool,
    pub tiene_luz: bool,
    pub tiene_internet: bool,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub ubicacion_confirmada: bool,
    pub locating: bool,
}

impl VisitForm {
    /// Empty visit dated `today`.
    #[must_use]
    pub fn new(today: &str) -> Self {
        Self {
            id: None,
            paciente_id: 0,
            gestor_id: 0,
            asignacion_id: None,
            fecha_visita: today.to_owned(),
            observacion: String::new(),
            altura: String::new(),
            peso: String::new(),
            tiene_agua: false,
            tiene_luz: false,
            tiene_internet: false,
            latitud: None,
            longitud: None,
            ubicacion_confirmada: false,
            locating: false,
        }
    }

    #[must_use]
    pub fn from_visit(v: &Visita) -> Self {
        Self {
            id: Some(v.id),
            paciente_id: v.paciente_id,
            gestor_id: v.gestor_id,
            asignacion_id: v.asignacion_id,
            fecha_visita: date_only(&v.fecha_visita),
            observacion: v.observacion.clone(),
            altura: number_text(v.altura),
            peso: number_text(v.peso),
            tiene_agua: v.tiene_agua,
            tiene_luz: v.tiene_luz,
            tiene_internet: v.tiene_internet,
            latitud: v.latitud,
            longitud: v.longitud,
            ubicacion_confirmada: v.ubicacion_confirmada,
            locating: false,
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Record a position from the geolocation button or the map picker.
    pub fn set_location(&mut self, latitud: f64, longitud: f64) {
        self.latitud = Some(latitud);
        self.longitud = Some(longitud);
        self.ubicacion_confirmada = true;
        self.locating = false;
    }

    /// Target of the submission for the current connectivity.
    #[must_use]
    pub fn route(&self, online: bool) -> VisitRoute {
        match (online, self.id) {
            (false, _) => VisitRoute::Queue,
            (true, Some(id)) => VisitRoute::Update(id),
            (true, None) => VisitRoute::Create,
        }
    }

    /// Build the visit payload.
    ///
    /// # Errors
    ///
    /// Patient and manager are required; height and weight must be numbers
    /// when given.
    pub fn validate(&self) -> Result<VisitaPayload, FormError> {
        if self.paciente_id <= 0 {
            return Err(FormError::Required("Paciente"));
        }
        if self.gestor_id <= 0 {
            return Err(FormError::Required("Gestor"));
        }
        Ok(VisitaPayload {
            id: self.id,
            paciente_id: self.paciente_id,
            gestor_id: self.gestor_id,
            asignacion_id: self.asignacion_id,
            fecha_visita: self.fecha_visita.trim().to_owned(),
            observacion: self.observacion.trim().to_owned(),
            altura: optional_number(&self.altura, "Altura")?,
            peso: optional_number(&self.peso, "Peso")?,
            tiene_agua: self.tiene_agua,
            tiene_luz: self.tiene_luz,
            tiene_internet: self.tiene_internet,
            latitud: self.latitud,
            longitud: self.longitud,
            ubicacion_confirmada: self.ubicacion_confirmada,
        })
    }
}

/// Managers offered by the visit form.
#[must_use]
pub fn manager_options(users: &[User]) -> Vec<&User> {
    users.iter().filter(|u| u.role == Role::Gestor).collect()
}
