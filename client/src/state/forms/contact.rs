//! Caregiver contact form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::{FormError, date_only, is_dni, required};
use crate::net::types::{Contacto, DniLookup};

/// Document kinds offered by the form; only `DNI` triggers the registry lookup.
pub const DOCUMENT_TYPES: [&str; 3] = ["DNI", "CE", "Pasaporte"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub record: Contacto,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self { record: Contacto { tipo_documento: "DNI".to_owned(), ..Contacto::default() } }
    }
}

impl ContactForm {
    #[must_use]
    pub fn from_contact(c: &Contacto) -> Self {
        let mut record = c.clone();
        record.fecha_nacimiento = date_only(&record.fecha_nacimiento);
        if record.tipo_documento.is_empty() {
            record.tipo_documento = "DNI".to_owned();
        }
        Self { record }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.record.id > 0
    }

    /// DNI to look up when the document field loses focus.
    #[must_use]
    pub fn dni_lookup_target(&self) -> Option<String> {
        let doc = self.record.documento.trim();
        (self.record.tipo_documento == "DNI" && is_dni(doc)).then(|| doc.to_owned())
    }

    /// Fill names from the registry; ignored if the document changed meanwhile.
    pub fn apply_dni(&mut self, dni: &str, lookup: DniLookup) -> bool {
        if self.record.documento.trim() != dni {
            return false;
        }
        self.record.nombre_completo = lookup.first_name;
        self.record.apellido_paterno = lookup.last_name_p;
        self.record.apellido_materno = lookup.last_name_m;
        true
    }

    /// # Errors
    ///
    /// Patient, document and name are required.
    pub fn validate(&self) -> Result<Contacto, FormError> {
        if self.record.paciente_id == 0 {
            return Err(FormError::Required("Paciente"));
        }
        let mut out = self.record.clone();
        out.documento = required(&out.documento, "Documento")?;
        out.nombre_completo = required(&out.nombre_completo, "Nombre")?;
        out.telefono = out.telefono.trim().to_owned();
        out.paciente_nombre = None;
        Ok(out)
    }
}
