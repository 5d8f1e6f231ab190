use super::*;

#[test]
fn grouping_query_values_round_trip() {
    for g in Agrupacion::ALL {
        assert_eq!(Agrupacion::from_query(g.query_value()), Some(g));
    }
    assert_eq!(Agrupacion::from_query("anio"), None);
}

#[test]
fn visits_over_time_path_carries_grouping() {
    assert_eq!(visits_over_time_path(Agrupacion::Semana), "/estadisticas/visitas-tiempo?agrupadoPor=semana");
}

#[test]
fn grouped_rows_decode_with_alias_labels() {
    let rows: Vec<ResumenSimple> = serde_json::from_str(r#"[{"rol":"Gestor","total":4},{"nombre":"X","total":1.5}]"#).unwrap();
    assert_eq!(rows[0].label, "Gestor");
    assert_eq!(rows[1].total, 1.5);
}
