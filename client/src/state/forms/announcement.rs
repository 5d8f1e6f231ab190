//! Announcement (comunicado) form, including the read-only view mode.

#[cfg(test)]
#[path = "announcement_test.rs"]
mod announcement_test;

use super::{FormError, date_only, optional, required};
use crate::net::types::{Comunicado, Destinatario, TipoContenido};
use crate::state::channels::{Channel, ChannelSet, ChannelUniverse};

/// Which attachment slot an upload fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Pdf,
}

impl AttachmentKind {
    /// `accept` attribute for the file input.
    #[must_use]
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Pdf => "application/pdf",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnouncementForm {
    pub id: Option<i64>,
    pub titulo: String,
    pub cuerpo: String,
    pub destinatario: Destinatario,
    pub tipo_contenido: TipoContenido,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub canal_envio: ChannelSet,
    pub es_destacado: bool,
    pub es_programado: bool,
    pub imagen_url: String,
    pub url_pdf: String,
    pub read_only: bool,
    /// Attachment upload in flight; submit waits for it.
    pub uploading: Option<AttachmentKind>,
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        Self {
            id: None,
            titulo: String::new(),
            cuerpo: String::new(),
            destinatario: Destinatario::Nino,
            tipo_contenido: TipoContenido::Informativo,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            canal_envio: ChannelSet::only(Channel::App, ChannelUniverse::Announcement),
            es_destacado: false,
            es_programado: false,
            imagen_url: String::new(),
            url_pdf: String::new(),
            read_only: false,
            uploading: None,
        }
    }
}

impl AnnouncementForm {
    /// Seed from a stored announcement; `read_only` selects the view mode.
    #[must_use]
    pub fn from_announcement(c: &Comunicado, read_only: bool) -> Self {
        Self {
            id: c.id,
            titulo: c.titulo.clone(),
            cuerpo: c.cuerpo.clone(),
            destinatario: c.destinatario,
            tipo_contenido: c.tipo_contenido.unwrap_or_default(),
            fecha_inicio: date_only(&c.fecha_inicio),
            fecha_fin: date_only(&c.fecha_fin),
            canal_envio: c.canal_envio.with_universe(ChannelUniverse::Announcement),
            es_destacado: c.es_destacado.unwrap_or(false),
            es_programado: c.es_programado.unwrap_or(false),
            imagen_url: c.imagen_url.clone().unwrap_or_default(),
            url_pdf: c.url_pdf.clone().unwrap_or_default(),
            read_only,
            uploading: None,
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Flip one delivery channel; ignored in view mode.
    pub fn toggle_channel(&mut self, channel: Channel) {
        if !self.read_only {
            self.canal_envio.toggle(channel);
        }
    }

    pub fn begin_upload(&mut self, kind: AttachmentKind) {
        self.uploading = Some(kind);
    }

    /// Store the uploaded URL in its slot, or just clear the busy flag on failure.
    pub fn finish_upload(&mut self, kind: AttachmentKind, url: Option<String>) {
        if self.uploading == Some(kind) {
            self.uploading = None;
        }
        if let Some(url) = url {
            match kind {
                AttachmentKind::Image => self.imagen_url = url,
                AttachmentKind::Pdf => self.url_pdf = url,
            }
        }
    }

    pub fn clear_attachment(&mut self, kind: AttachmentKind) {
        match kind {
            AttachmentKind::Image => self.imagen_url.clear(),
            AttachmentKind::Pdf => self.url_pdf.clear(),
        }
    }

    /// Build the announcement payload.
    ///
    /// # Errors
    ///
    /// Title is required, the end date may not precede the start date and
    /// no attachment may still be uploading.
    pub fn validate(&self) -> Result<Comunicado, FormError> {
        if self.uploading.is_some() {
            return Err(FormError::Invalid("Espere a que termine la carga del archivo".to_owned()));
        }
        let titulo = required(&self.titulo, "Título")?;
        let fecha_inicio = self.fecha_inicio.trim().to_owned();
        let fecha_fin = self.fecha_fin.trim().to_owned();
        // Both are YYYY-MM-DD, so lexical order is date order.
        if !fecha_inicio.is_empty() && !fecha_fin.is_empty() && fecha_fin < fecha_inicio {
            return Err(FormError::Invalid(
                "La fecha de fin no puede ser anterior a la fecha de inicio".to_owned(),
            ));
        }
        Ok(Comunicado {
            id: self.id,
            titulo,
            cuerpo: self.cuerpo.trim().to_owned(),
            destinatario: self.destinatario,
            fecha_inicio,
            fecha_fin,
            canal_envio: self.canal_envio,
            tipo_contenido: Some(self.tipo_contenido),
            es_destacado: Some(self.es_destacado),
            es_programado: Some(self.es_programado),
            url_pdf: optional(&self.url_pdf),
            imagen_url: optional(&self.imagen_url),
            fecha_creacion: None,
            eliminado: None,
        })
    }
}
