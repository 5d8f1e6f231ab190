use super::*;

#[test]
fn user_selection_is_required() {
    assert!(PatientForm::default().validate().is_err());
}

#[test]
fn edit_round_trips_anemia_flag() {
    let p = Paciente { id: 7, user_id: 31, tiene_anemia: true, ..Paciente::default() };
    let form = PatientForm::from_patient(&p);
    assert!(form.is_edit());
    assert_eq!(form.validate(), Ok(PacientePayload { id: Some(7), user_id: 31, tiene_anemia: true }));
}
