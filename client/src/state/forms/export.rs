//! Data export request form.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use super::FormError;
use crate::net::types::{ExportRequest, TipoExportacion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportForm {
    pub tipo: Option<TipoExportacion>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    /// QR image (data URL) of the last generated export.
    pub qr: Option<String>,
    /// Download URL of the last generated export.
    pub download_url: Option<String>,
}

impl Default for ExportForm {
    fn default() -> Self {
        Self {
            tipo: Some(TipoExportacion::Visitas),
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            qr: None,
            download_url: None,
        }
    }
}

/// `YYYY-MM-DD` as an ISO instant at UTC midnight.
#[must_use]
pub fn iso_midnight(date: &str) -> String {
    format!("{}T00:00:00.000Z", date.trim())
}

/// Last path segment of a download URL, used as the suggested file name.
#[must_use]
pub fn file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("exportacion").to_owned()
}

impl ExportForm {
    /// `true` when the submit button can be pressed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.tipo.is_some() && !self.fecha_inicio.trim().is_empty() && !self.fecha_fin.trim().is_empty()
    }

    /// Build the export request for `user_id`.
    ///
    /// # Errors
    ///
    /// Every field is required, and the request must be attributed to a
    /// signed-in user.
    pub fn validate(&self, user_id: Option<i64>) -> Result<ExportRequest, FormError> {
        let Some(tipo) = self.tipo.filter(|_| self.can_submit()) else {
            return Err(FormError::Invalid("Todos los campos son obligatorios".to_owned()));
        };
        let usuario_id = user_id.filter(|id| *id > 0).ok_or(FormError::NoSession)?;
        let fecha_inicio = self.fecha_inicio.trim();
        let fecha_fin = self.fecha_fin.trim();
        let filtros = serde_json::json!({ "fechaInicio": fecha_inicio, "fechaFin": fecha_fin });
        Ok(ExportRequest {
            usuario_id,
            tipo_exportacion: tipo,
            filtros_aplicados: filtros.to_string(),
            nombre_entidad: tipo.label().to_owned(),
            fecha_inicio: iso_midnight(fecha_inicio),
            fecha_fin: iso_midnight(fecha_fin),
        })
    }

    /// Show the outcome of a generated export.
    pub fn set_result(&mut self, qr: Option<String>, url: Option<String>) {
        self.qr = qr.filter(|q| !q.is_empty());
        self.download_url = url.filter(|u| !u.is_empty());
    }
}
