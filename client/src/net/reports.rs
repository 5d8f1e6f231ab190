//! Statistics endpoints behind the reports dashboard.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::api::get_json;
use super::error::ApiError;
use super::types::{
    AnemiaPorDistrito, AsignacionesPorGestor, CoordenadaVisita, PacientesPorMes, ResumenSimple, ServiciosBasicos,
    TambosPorRegion, TambosPorTipo, TopDistrito, VerificacionUsuarios, VisitaPorTiempo,
};

/// Bucket width of the visits-over-time series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Agrupacion {
    #[default]
    Dia,
    Semana,
    Mes,
}

impl Agrupacion {
    pub const ALL: [Agrupacion; 3] = [Self::Dia, Self::Semana, Self::Mes];

    /// Query value expected by the backend.
    #[must_use]
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::Dia => "dia",
            Self::Semana => "semana",
            Self::Mes => "mes",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dia => "Día",
            Self::Semana => "Semana",
            Self::Mes => "Mes",
        }
    }

    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.query_value() == value)
    }
}

#[must_use]
pub fn visits_over_time_path(grouping: Agrupacion) -> String {
    format!("/estadisticas/visitas-tiempo?agrupadoPor={}", grouping.query_value())
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn users_by_role() -> Result<Vec<ResumenSimple>, ApiError> {
    get_json("/estadisticas/usuarios-por-rol").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn visits_over_time(grouping: Agrupacion) -> Result<Vec<VisitaPorTiempo>, ApiError> {
    get_json(&visits_over_time_path(grouping)).await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn visit_coordinates() -> Result<Vec<CoordenadaVisita>, ApiError> {
    get_json("/estadisticas/visitas-mapa").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn basic_services() -> Result<Vec<ServiciosBasicos>, ApiError> {
    get_json("/estadisticas/servicios-basicos").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn top_districts() -> Result<Vec<TopDistrito>, ApiError> {
    get_json("/estadisticas/top-distritos-visitas").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn verified_users() -> Result<VerificacionUsuarios, ApiError> {
    get_json("/estadisticas/usuarios-verificados").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn stations_by_region() -> Result<Vec<TambosPorRegion>, ApiError> {
    get_json("/estadisticas/tambos-por-region").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn stations_by_type() -> Result<Vec<TambosPorTipo>, ApiError> {
    get_json("/estadisticas/tambos-por-tipo").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn anemia_by_district() -> Result<Vec<AnemiaPorDistrito>, ApiError> {
    get_json("/estadisticas/pacientes-anemia-por-distrito").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn patients_by_month() -> Result<Vec<PacientesPorMes>, ApiError> {
    get_json("/estadisticas/pacientes-por-mes").await
}

/// # Errors
///
/// Network, status and decode failures.
pub async fn assignments_by_manager() -> Result<Vec<AsignacionesPorGestor>, ApiError> {
    get_json("/estadisticas/asignaciones-por-gestor").await
}
