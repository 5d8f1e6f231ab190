use super::*;

const NOW: &str = "2024-09-01T15:04:05.000Z";

fn tambos() -> Vec<Tambo> {
    vec![Tambo {
        id: Some(4),
        name: "Tambo Ccollpa".into(),
        departamento: "Cusco".into(),
        provincia: "Canchis".into(),
        distrito: "Sicuani".into(),
        ..Tambo::default()
    }]
}

#[test]
fn selecting_tambo_mirrors_location() {
    let mut form = AssignmentForm::default();
    form.select_tambo(4, &tambos());
    assert_eq!(form.distrito, "Sicuani");
}

#[test]
fn missing_selection_is_rejected() {
    let form = AssignmentForm { gestor_id: 3, ..AssignmentForm::default() };
    assert_eq!(
        form.validate(&tambos(), NOW),
        Err(FormError::Invalid("Debe seleccionar un gestor y un tambo.".to_owned()))
    );
}

#[test]
fn unknown_tambo_without_location_is_rejected() {
    let form = AssignmentForm { gestor_id: 3, tambo_id: 99, ..AssignmentForm::default() };
    assert!(form.validate(&tambos(), NOW).is_err());
}

#[test]
fn payload_takes_location_from_tambo_and_stamps_date() {
    let mut form = AssignmentForm { gestor_id: 3, centro_poblado: " Pampa ".into(), ..AssignmentForm::default() };
    form.select_tambo(4, &tambos());
    let payload = form.validate(&tambos(), NOW).unwrap();
    assert_eq!(payload.departamento, "Cusco");
    assert_eq!(payload.centro_poblado, "Pampa");
    assert_eq!(payload.fecha_asignacion, NOW);
    assert_eq!(payload.id, None);
    assert!(payload.estado);
}

#[test]
fn edit_keeps_id_and_stored_location_when_tambo_not_offered() {
    let existing = Asignacion {
        id: 11,
        gestor_id: 3,
        tambo_id: 50,
        departamento: "Puno".into(),
        provincia: "Puno".into(),
        distrito: "Acora".into(),
        estado: false,
        ..Asignacion::default()
    };
    let form = AssignmentForm::from_assignment(&existing);
    let payload = form.validate(&tambos(), NOW).unwrap();
    assert_eq!(payload.id, Some(11));
    assert_eq!(payload.distrito, "Acora");
    assert!(!payload.estado);
}
