use super::*;

fn dated() -> ExportForm {
    ExportForm { fecha_inicio: "2024-01-01".into(), fecha_fin: "2024-01-31".into(), ..ExportForm::default() }
}

#[test]
fn every_field_is_required() {
    let err = Err(FormError::Invalid("Todos los campos son obligatorios".to_owned()));
    assert_eq!(ExportForm::default().validate(Some(1)), err);
    let no_type = ExportForm { tipo: None, ..dated() };
    assert!(!no_type.can_submit());
    assert_eq!(no_type.validate(Some(1)), err);
}

#[test]
fn request_needs_session_user() {
    assert_eq!(dated().validate(None), Err(FormError::NoSession));
}

#[test]
fn request_carries_filters_and_iso_dates() {
    let req = dated().validate(Some(7)).unwrap();
    assert_eq!(req.usuario_id, 7);
    assert_eq!(req.nombre_entidad, "Visitas");
    assert_eq!(req.fecha_inicio, "2024-01-01T00:00:00.000Z");
    assert_eq!(req.fecha_fin, "2024-01-31T00:00:00.000Z");
    let filtros: serde_json::Value = serde_json::from_str(&req.filtros_aplicados).unwrap();
    assert_eq!(filtros["fechaFin"], "2024-01-31");
}

#[test]
fn file_name_is_last_url_segment() {
    assert_eq!(file_name("https://host/exports/visitas_2024.xlsx?sig=1"), "visitas_2024.xlsx");
    assert_eq!(file_name(""), "exportacion");
}

#[test]
fn blank_result_fields_are_hidden() {
    let mut form = dated();
    form.set_result(Some(String::new()), Some("https://host/a.csv".into()));
    assert_eq!(form.qr, None);
    assert_eq!(form.download_url.as_deref(), Some("https://host/a.csv"));
}
