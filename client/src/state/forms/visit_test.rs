use super::*;

fn ready() -> VisitForm {
    VisitForm { paciente_id: 2, gestor_id: 3, ..VisitForm::new("2024-03-15") }
}

#[test]
fn patient_and_manager_are_required() {
    let mut form = VisitForm::new("2024-03-15");
    assert_eq!(form.validate(), Err(FormError::Required("Paciente")));
    form.paciente_id = 2;
    assert_eq!(form.validate(), Err(FormError::Required("Gestor")));
}

#[test]
fn measurements_accept_comma_decimals() {
    let form = VisitForm { altura: "0,85".into(), peso: "".into(), ..ready() };
    let payload = form.validate().unwrap();
    assert_eq!(payload.altura, Some(0.85));
    assert_eq!(payload.peso, None);
    assert_eq!(payload.fecha_visita, "2024-03-15");
}

#[test]
fn bad_measurement_is_rejected() {
    let form = VisitForm { peso: "doce".into(), ..ready() };
    assert_eq!(form.validate(), Err(FormError::Invalid("Peso debe ser un número".to_owned())));
}

#[test]
fn location_marks_confirmation() {
    let mut form = ready();
    form.locating = true;
    form.set_location(-13.53, -71.97);
    assert!(form.ubicacion_confirmada);
    assert!(!form.locating);
    assert_eq!(form.validate().unwrap().latitud, Some(-13.53));
}

#[test]
fn offline_submission_is_queued() {
    let mut form = ready();
    assert_eq!(form.route(true), VisitRoute::Create);
    assert_eq!(form.route(false), VisitRoute::Queue);
    form.id = Some(8);
    assert_eq!(form.route(true), VisitRoute::Update(8));
    assert_eq!(form.route(false), VisitRoute::Queue);
}

#[test]
fn edit_renders_numbers_back_into_inputs() {
    let v = Visita { id: 8, altura: Some(0.9), fecha_visita: "2024-03-15T10:00:00".into(), ..Visita::default() };
    let form = VisitForm::from_visit(&v);
    assert_eq!(form.altura, "0.9");
    assert_eq!(form.fecha_visita, "2024-03-15");
    assert!(form.is_edit());
}

#[test]
fn only_gestores_are_offered() {
    let users = vec![
        User { id: 1, role: Role::Gestor, ..User::default() },
        User { id: 2, role: Role::Administrador, ..User::default() },
    ];
    let ids: Vec<i64> = manager_options(&users).iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn edited_visit_payload_keeps_its_id() {
    let v = Visita { id: 42, paciente_id: 3, gestor_id: 7, fecha_visita: "2024-04-01".into(), ..Visita::default() };
    let form = VisitForm::from_visit(&v);
    assert_eq!(form.route(false), VisitRoute::Queue);
    let payload = form.validate().expect("valid");
    assert_eq!(payload.id, Some(42));
    assert_eq!(serde_json::to_value(&payload).expect("json")["id"], 42);
}

#[test]
fn new_visit_payload_omits_id() {
    let payload = ready().validate().expect("valid");
    assert_eq!(payload.id, None);
    assert!(serde_json::to_value(&payload).expect("json").get("id").is_none());
}
