//! Patient alert form.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use super::{FormError, date_only, optional};
use crate::net::types::{Alerta, AlertaCategoria, AlertaTipo, Paciente, PeriodicidadAlerta, PrioridadAlerta};
use crate::state::channels::{Channel, ChannelSet, ChannelUniverse};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertForm {
    pub id: Option<i64>,
    pub paciente_id: i64,
    pub mensaje: String,
    pub tipo: AlertaTipo,
    pub categoria: AlertaCategoria,
    pub prioridad: PrioridadAlerta,
    pub periodicidad: PeriodicidadAlerta,
    pub fecha_alerta: String,
    pub fecha_fin_repeticion: String,
    pub canal_envio: ChannelSet,
}

impl AlertForm {
    /// Empty alert dated `today` (`YYYY-MM-DD`), App channel, one-off.
    #[must_use]
    pub fn new(today: &str) -> Self {
        Self {
            id: None,
            paciente_id: 0,
            mensaje: String::new(),
            tipo: AlertaTipo::Vacunacion,
            categoria: AlertaCategoria::Nino,
            prioridad: PrioridadAlerta::Media,
            periodicidad: PeriodicidadAlerta::Unica,
            fecha_alerta: today.to_owned(),
            fecha_fin_repeticion: String::new(),
            canal_envio: ChannelSet::only(Channel::App, ChannelUniverse::Alert),
        }
    }

    #[must_use]
    pub fn from_alert(a: &Alerta) -> Self {
        Self {
            id: a.id,
            paciente_id: a.paciente_id,
            mensaje: a.mensaje.clone(),
            tipo: a.tipo,
            categoria: a.categoria,
            prioridad: a.prioridad.unwrap_or(PrioridadAlerta::Media),
            periodicidad: a.periodicidad.unwrap_or(PeriodicidadAlerta::Unica),
            fecha_alerta: date_only(&a.fecha_alerta),
            fecha_fin_repeticion: a.fecha_fin_repeticion.as_deref().map(date_only).unwrap_or_default(),
            canal_envio: a.canal_envio.with_universe(ChannelUniverse::Alert),
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Pick the only patient when exactly one is offered and none is chosen.
    pub fn autoselect_patient(&mut self, patients: &[Paciente]) {
        if let [only] = patients
            && self.paciente_id == 0
        {
            self.paciente_id = only.id;
        }
    }

    /// The repetition end date only applies to recurring alerts.
    #[must_use]
    pub fn shows_end_date(&self) -> bool {
        self.periodicidad != PeriodicidadAlerta::Unica
    }

    pub fn toggle_channel(&mut self, channel: Channel) {
        self.canal_envio.toggle(channel);
    }

    /// Build the alert payload authored by `creator_id`.
    ///
    /// # Errors
    ///
    /// Message and patient are required; without a signed-in user the alert
    /// cannot be attributed and [`FormError::NoSession`] is returned.
    pub fn validate(&self, creator_id: Option<i64>) -> Result<Alerta, FormError> {
        let mensaje = self.mensaje.trim();
        if mensaje.is_empty() {
            return Err(FormError::Invalid("El mensaje es obligatorio".to_owned()));
        }
        if self.paciente_id <= 0 {
            return Err(FormError::Invalid("Debes asignar un paciente válido".to_owned()));
        }
        let creado_por_user_id = creator_id.filter(|id| *id > 0).ok_or(FormError::NoSession)?;
        let fecha_fin_repeticion = if self.shows_end_date() { optional(&self.fecha_fin_repeticion) } else { None };
        Ok(Alerta {
            id: self.id,
            paciente_id: self.paciente_id,
            tipo: self.tipo,
            categoria: self.categoria,
            mensaje: mensaje.to_owned(),
            fecha_alerta: self.fecha_alerta.trim().to_owned(),
            fecha_creacion: None,
            notificacion_enviada: None,
            canal_envio: self.canal_envio,
            prioridad: Some(self.prioridad),
            eliminada: None,
            periodicidad: Some(self.periodicidad),
            fecha_fin_repeticion,
            vista_previa: None,
            creado_por_user_id,
        })
    }
}
