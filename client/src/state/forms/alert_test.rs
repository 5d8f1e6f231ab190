use super::*;

fn ready() -> AlertForm {
    AlertForm { paciente_id: 9, mensaje: "Control de hierro".into(), ..AlertForm::new("2024-06-01") }
}

#[test]
fn defaults_match_new_alert() {
    let form = AlertForm::new("2024-06-01");
    assert_eq!(form.fecha_alerta, "2024-06-01");
    assert_eq!(form.tipo, AlertaTipo::Vacunacion);
    assert_eq!(form.categoria, AlertaCategoria::Nino);
    assert_eq!(form.canal_envio.bits(), 1);
    assert!(!form.shows_end_date());
}

#[test]
fn message_then_patient_are_required() {
    let mut form = AlertForm::new("2024-06-01");
    assert_eq!(form.validate(Some(1)), Err(FormError::Invalid("El mensaje es obligatorio".to_owned())));
    form.mensaje = "x".into();
    assert_eq!(form.validate(Some(1)), Err(FormError::Invalid("Debes asignar un paciente válido".to_owned())));
}

#[test]
fn missing_session_blocks_submission() {
    assert_eq!(ready().validate(None), Err(FormError::NoSession));
    assert_eq!(ready().validate(Some(0)), Err(FormError::NoSession));
}

#[test]
fn payload_carries_creator_and_channels() {
    let mut form = ready();
    form.toggle_channel(Channel::Email);
    let alert = form.validate(Some(42)).unwrap();
    assert_eq!(alert.creado_por_user_id, 42);
    assert_eq!(alert.canal_envio.bits(), 1 | 4);
    assert_eq!(alert.periodicidad, Some(PeriodicidadAlerta::Unica));
}

#[test]
fn whatsapp_is_outside_alert_universe() {
    let mut form = ready();
    form.toggle_channel(Channel::WhatsApp);
    assert_eq!(form.canal_envio.bits(), 1);
}

#[test]
fn single_patient_is_autoselected() {
    let one = vec![Paciente { id: 5, ..Paciente::default() }];
    let two = vec![Paciente { id: 5, ..Paciente::default() }, Paciente { id: 6, ..Paciente::default() }];
    let mut form = AlertForm::new("2024-06-01");
    form.autoselect_patient(&two);
    assert_eq!(form.paciente_id, 0);
    form.autoselect_patient(&one);
    assert_eq!(form.paciente_id, 5);
}

#[test]
fn end_date_only_sent_for_recurring_alerts() {
    let mut form = AlertForm { fecha_fin_repeticion: "2024-07-01".into(), ..ready() };
    assert_eq!(form.validate(Some(1)).unwrap().fecha_fin_repeticion, None);
    form.periodicidad = PeriodicidadAlerta::Semanal;
    assert!(form.shows_end_date());
    assert_eq!(form.validate(Some(1)).unwrap().fecha_fin_repeticion.as_deref(), Some("2024-07-01"));
}
