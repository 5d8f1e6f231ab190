//! Report aggregation: statistics DTOs reshaped into chart series.
//!
//! The backend returns pre-aggregated rows; what remains client-side is
//! merging duplicate labels, naming blanks and filling calendar gaps so the
//! chart components receive parallel `labels`/`values` vectors.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::reports::Agrupacion;
use crate::net::types::{
    AnemiaPorDistrito, AsignacionesPorGestor, CoordenadaVisita, PacientesPorMes, ResumenSimple, ServiciosBasicos,
    TambosPorRegion, TambosPorTipo, TopDistrito, VerificacionUsuarios, VisitaPorTiempo,
};
use crate::state::forms::date_only;

const MONTHS: [&str; 12] = ["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Set", "Oct", "Nov", "Dic"];

/// Default map center (Peru) when no visit has coordinates.
pub const DEFAULT_CENTER: (f64, f64) = (-9.19, -75.0152);

/// Parallel label/value vectors for one chart dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    /// Merge `(label, total)` rows by label in first-seen order; blank
    /// labels become `blank`.
    pub fn grouped<I>(rows: I, blank: &str) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut out = Self::default();
        for (label, total) in rows {
            let label = if label.trim().is_empty() { blank.to_owned() } else { label.trim().to_owned() };
            match out.labels.iter().position(|l| *l == label) {
                Some(i) => out.values[i] += total,
                None => {
                    out.labels.push(label);
                    out.values.push(total);
                }
            }
        }
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[must_use]
pub fn users_by_role(rows: &[ResumenSimple]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.label.clone(), r.total)), "Sin rol")
}

#[must_use]
pub fn visits_over_time(rows: &[VisitaPorTiempo]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.fecha.clone(), r.total)), "Sin fecha")
}

#[must_use]
pub fn top_districts(rows: &[TopDistrito]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.distrito.clone(), r.total)), "Sin distrito")
}

/// Stations summed per department.
#[must_use]
pub fn stations_by_department(rows: &[TambosPorRegion]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.departamento.clone(), r.total)), "Sin departamento")
}

#[must_use]
pub fn stations_by_type(rows: &[TambosPorTipo]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.tipo.clone(), r.total)), "Sin tipo")
}

#[must_use]
pub fn anemia_by_district(rows: &[AnemiaPorDistrito]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.distrito.clone(), r.total)), "Sin distrito")
}

#[must_use]
pub fn assignments_by_manager(rows: &[AsignacionesPorGestor]) -> Series {
    Series::grouped(rows.iter().map(|r| (r.gestor.clone(), r.total_asignaciones)), "Sin gestor")
}

/// Households with each service, from the per-combination counts.
#[must_use]
pub fn basic_services(rows: &[ServiciosBasicos]) -> Series {
    let sum = |pick: fn(&ServiciosBasicos) -> bool| -> f64 { rows.iter().filter(|r| pick(r)).map(|r| r.total).sum() };
    Series {
        labels: vec!["Agua".to_owned(), "Luz".to_owned(), "Internet".to_owned()],
        values: vec![sum(|r| r.tiene_agua), sum(|r| r.tiene_luz), sum(|r| r.tiene_internet)],
    }
}

/// Short Spanish month name for `1..=12`.
#[must_use]
pub fn month_label(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTHS.get(index).copied()
}

/// Twelve monthly buckets; months without rows are zero, out-of-range
/// months are dropped.
#[must_use]
pub fn patients_by_month(rows: &[PacientesPorMes]) -> Series {
    let mut values = vec![0.0; 12];
    for row in rows {
        let slot = usize::try_from(row.mes).ok().and_then(|m| m.checked_sub(1));
        if let Some(value) = slot.and_then(|i| values.get_mut(i)) {
            *value += row.total;
        }
    }
    Series { labels: MONTHS.iter().map(|m| (*m).to_owned()).collect(), values }
}

/// Verified-user percentage clamped to `0..=100`, plus the remainder, for
/// the half-doughnut gauge.
#[must_use]
pub fn verification_gauge(v: &VerificacionUsuarios) -> (f64, f64) {
    let pct = if v.porcentaje > 0.0 {
        v.porcentaje
    } else if v.total_usuarios > 0.0 {
        v.verificados / v.total_usuarios * 100.0
    } else {
        0.0
    };
    let pct = (pct.clamp(0.0, 100.0) * 10.0).round() / 10.0;
    (pct, 100.0 - pct)
}

/// Map marker for one geolocated visit.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub confirmed: bool,
}

/// Markers for visits with usable coordinates.
#[must_use]
pub fn map_points(rows: &[CoordenadaVisita]) -> Vec<MapPoint> {
    rows.iter()
        .filter(|r| r.latitud.is_finite() && r.longitud.is_finite())
        .filter(|r| r.latitud.abs() <= 90.0 && r.longitud.abs() <= 180.0)
        .filter(|r| r.latitud != 0.0 || r.longitud != 0.0)
        .map(|r| MapPoint {
            lat: r.latitud,
            lng: r.longitud,
            label: format!("Paciente #{} ({})", r.paciente_id, date_only(&r.fecha)),
            confirmed: r.confirmada,
        })
        .collect()
}

/// Mean position of the markers, or [`DEFAULT_CENTER`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn map_center(points: &[MapPoint]) -> (f64, f64) {
    if points.is_empty() {
        return DEFAULT_CENTER;
    }
    let n = points.len() as f64;
    let (lat, lng) = points.iter().fold((0.0, 0.0), |(a, b), p| (a + p.lat, b + p.lng));
    (lat / n, lng / n)
}

/// Everything the reports page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportsState {
    pub grouping: Agrupacion,
    pub users_by_role: Series,
    pub visits_over_time: Series,
    pub top_districts: Series,
    pub stations_by_department: Series,
    pub stations_by_type: Series,
    pub anemia_by_district: Series,
    pub patients_by_month: Series,
    pub assignments_by_manager: Series,
    pub basic_services: Series,
    pub verification: Option<(f64, f64)>,
    pub map_points: Vec<MapPoint>,
    /// Sections whose endpoint failed, shown as a notice on the page.
    pub failed: Vec<&'static str>,
}

impl ReportsState {
    #[must_use]
    pub fn new(grouping: Agrupacion) -> Self {
        Self { grouping, ..Self::default() }
    }

    /// Record a failed section once.
    pub fn section_failed(&mut self, section: &'static str) {
        if !self.failed.contains(&section) {
            self.failed.push(section);
        }
    }
}
