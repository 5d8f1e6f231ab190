//! Station form: free-text fields plus the cascading location selector.

#[cfg(test)]
#[path = "tambo_test.rs"]
mod tambo_test;

use super::{FormError, optional, required};
use crate::net::types::{Tambo, TamboTipo, User};
use crate::state::location::{LocationSelector, LookupRequest};

/// Representative choice: document number and full name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepresentativeOption {
    pub dni: String,
    pub full_name: String,
}

/// Staff users (Administrador or Gestor) as representative options.
#[must_use]
pub fn representative_options(users: &[User]) -> Vec<RepresentativeOption> {
    users
        .iter()
        .filter(|u| u.role.is_staff() && !u.document_number.is_empty())
        .map(|u| RepresentativeOption { dni: u.document_number.clone(), full_name: u.full_name() })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TamboForm {
    pub location: LocationSelector,
    pub name: String,
    pub direccion: String,
    pub referencia: String,
    pub horario_atencion: String,
    pub tipo: TamboTipo,
    pub representante: String,
    pub documento_representante: String,
    pub telefono: String,
    pub estado: bool,
}

impl Default for TamboForm {
    fn default() -> Self {
        Self {
            location: LocationSelector::new(),
            name: String::new(),
            direccion: String::new(),
            referencia: String::new(),
            horario_atencion: String::new(),
            tipo: TamboTipo::Temporal,
            representante: String::new(),
            documento_representante: String::new(),
            telefono: String::new(),
            estado: true,
        }
    }
}

impl TamboForm {
    /// Seed from a stored station. The location triple and code are kept
    /// verbatim; the returned lookups only refresh option lists.
    #[must_use]
    pub fn from_tambo(tambo: &Tambo) -> (Self, Vec<LookupRequest>) {
        let (location, requests) = match tambo.id {
            Some(id) => LocationSelector::for_existing(
                id,
                &tambo.departamento,
                &tambo.provincia,
                &tambo.distrito,
                &tambo.code,
            ),
            None => (LocationSelector::new(), Vec::new()),
        };
        let form = Self {
            location,
            name: tambo.name.clone(),
            direccion: tambo.direccion.clone(),
            referencia: tambo.referencia.clone().unwrap_or_default(),
            horario_atencion: tambo.horario_atencion.clone().unwrap_or_default(),
            tipo: tambo.tipo,
            representante: tambo.representante.clone(),
            documento_representante: tambo.documento_representante.clone(),
            telefono: tambo.telefono.clone(),
            estado: tambo.estado,
        };
        (form, requests)
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.location.station_id.is_some()
    }

    /// Choose the representative by DNI; the name follows when the DNI is a
    /// known staff member, otherwise the typed name is kept.
    pub fn select_representative(&mut self, dni: &str, options: &[RepresentativeOption]) {
        self.documento_representante = dni.to_owned();
        if let Some(opt) = options.iter().find(|o| o.dni == dni) {
            self.representante = opt.full_name.clone();
        }
    }

    /// `true` while submission must wait for the station code.
    #[must_use]
    pub fn submit_blocked(&self) -> bool {
        self.location.code_pending()
    }

    /// Build the station payload.
    ///
    /// # Errors
    ///
    /// Name and full location are required; in create mode the generated
    /// code must have arrived.
    pub fn validate(&self) -> Result<Tambo, FormError> {
        let name = required(&self.name, "Nombre")?;
        let departamento = required(&self.location.department, "Departamento")?;
        let provincia = required(&self.location.province, "Provincia")?;
        let distrito = required(&self.location.district, "Distrito")?;
        if self.location.code_pending() {
            return Err(FormError::CodePending);
        }
        let code = required(&self.location.code, "Código")?;
        Ok(Tambo {
            id: self.location.station_id,
            name,
            code,
            departamento,
            provincia,
            distrito,
            direccion: self.direccion.trim().to_owned(),
            referencia: optional(&self.referencia),
            horario_atencion: optional(&self.horario_atencion),
            tipo: self.tipo,
            representante: self.representante.trim().to_owned(),
            documento_representante: self.documento_representante.trim().to_owned(),
            telefono: self.telefono.trim().to_owned(),
            estado: self.estado,
        })
    }
}
