use super::*;

fn resumen(label: &str, total: f64) -> ResumenSimple {
    ResumenSimple { label: label.into(), total }
}

// =============================================================
// Series grouping
// =============================================================

#[test]
fn duplicate_labels_merge_in_first_seen_order() {
    let s = users_by_role(&[resumen("Gestor", 3.0), resumen("Administrador", 1.0), resumen("Gestor", 2.0)]);
    assert_eq!(s.labels, vec!["Gestor", "Administrador"]);
    assert_eq!(s.values, vec![5.0, 1.0]);
    assert!((s.total() - 6.0).abs() < f64::EPSILON);
}

#[test]
fn blank_labels_are_named() {
    let s = users_by_role(&[resumen("", 2.0), resumen("  ", 1.0)]);
    assert_eq!(s.labels, vec!["Sin rol"]);
    assert_eq!(s.values, vec![3.0]);
}

#[test]
fn stations_sum_per_department() {
    let row = |dep: &str, total| TambosPorRegion {
        departamento: dep.into(),
        provincia: String::new(),
        distrito: String::new(),
        total,
    };
    let s = stations_by_department(&[row("Cusco", 2.0), row("Puno", 1.0), row("Cusco", 4.0)]);
    assert_eq!(s.values, vec![6.0, 1.0]);
}

#[test]
fn basic_services_count_each_flag() {
    let row = |agua, luz, internet, total| ServiciosBasicos { tiene_agua: agua, tiene_luz: luz, tiene_internet: internet, total };
    let s = basic_services(&[row(true, true, false, 3.0), row(true, false, false, 2.0), row(false, false, true, 1.0)]);
    assert_eq!(s.labels, vec!["Agua", "Luz", "Internet"]);
    assert_eq!(s.values, vec![5.0, 3.0, 1.0]);
}

// =============================================================
// Calendar buckets
// =============================================================

#[test]
fn months_fill_gaps_and_drop_out_of_range() {
    let s = patients_by_month(&[
        PacientesPorMes { mes: 1, total: 4.0 },
        PacientesPorMes { mes: 12, total: 2.0 },
        PacientesPorMes { mes: 13, total: 9.0 },
        PacientesPorMes { mes: 0, total: 9.0 },
    ]);
    assert_eq!(s.labels.len(), 12);
    assert_eq!(s.values[0], 4.0);
    assert_eq!(s.values[11], 2.0);
    assert!((s.total() - 6.0).abs() < f64::EPSILON);
    assert_eq!(month_label(9), Some("Set"));
    assert_eq!(month_label(0), None);
}

// =============================================================
// Gauge and map
// =============================================================

#[test]
fn gauge_prefers_reported_percentage_then_ratio() {
    let v = VerificacionUsuarios { total_usuarios: 10.0, verificados: 4.0, porcentaje: 0.0 };
    assert_eq!(verification_gauge(&v), (40.0, 60.0));
    let v = VerificacionUsuarios { total_usuarios: 10.0, verificados: 4.0, porcentaje: 150.0 };
    assert_eq!(verification_gauge(&v), (100.0, 0.0));
    let v = VerificacionUsuarios { total_usuarios: 0.0, verificados: 0.0, porcentaje: 0.0 };
    assert_eq!(verification_gauge(&v), (0.0, 100.0));
}

#[test]
fn map_skips_unusable_coordinates() {
    let row = |lat, lng| CoordenadaVisita { latitud: lat, longitud: lng, fecha: "2024-01-02T00:00:00".into(), confirmada: true, paciente_id: 3 };
    let points = map_points(&[row(-13.5, -71.9), row(0.0, 0.0), row(f64::NAN, 1.0), row(95.0, 1.0)]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].label, "Paciente #3 (2024-01-02)");
    assert_eq!(map_center(&points), (-13.5, -71.9));
    assert_eq!(map_center(&[]), DEFAULT_CENTER);
}

#[test]
fn failed_sections_are_recorded_once() {
    let mut state = ReportsState::new(Agrupacion::Mes);
    state.section_failed("Usuarios por rol");
    state.section_failed("Usuarios por rol");
    assert_eq!(state.failed.len(), 1);
    assert_eq!(state.grouping, Agrupacion::Mes);
}
