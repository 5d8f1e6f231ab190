use super::*;

fn filled() -> CollaboratorForm {
    CollaboratorForm {
        first_name: "Lucía".into(),
        last_name_p: "Mamani".into(),
        document_number: "45678912".into(),
        password: "secreto".into(),
        ..CollaboratorForm::new(Role::Gestor)
    }
}

#[test]
fn edit_seeds_fields_and_trims_birth_date() {
    let user = User {
        id: 12,
        first_name: "Jorge".into(),
        birth_date: "1985-07-30T00:00:00".into(),
        role: Role::Administrador,
        ..User::default()
    };
    let form = CollaboratorForm::from_user(&user);
    assert!(form.is_edit());
    assert_eq!(form.birth_date, "1985-07-30");
    assert_eq!(form.role, Role::Administrador);
}

#[test]
fn complete_dni_requests_lookup_once() {
    let mut form = CollaboratorForm::new(Role::Gestor);
    assert_eq!(form.set_document("1234567"), None);
    assert_eq!(form.set_document("12345678"), Some("12345678".to_owned()));
    let lookup = DniLookup { first_name: "ANA".into(), last_name_p: "RUIZ".into(), last_name_m: "PAZ".into() };
    assert!(form.apply_dni("12345678", lookup));
    assert!(form.is_autofilled());
    assert_eq!(form.first_name, "ANA");
    assert_eq!(form.set_document("12345678"), None);
}

#[test]
fn late_lookup_for_old_document_is_ignored() {
    let mut form = CollaboratorForm::new(Role::Gestor);
    let _ = form.set_document("12345678");
    let _ = form.set_document("87654321");
    let lookup = DniLookup { first_name: "X".into(), ..DniLookup::default() };
    assert!(!form.apply_dni("12345678", lookup));
    assert_eq!(form.first_name, "");
}

#[test]
fn create_requires_password() {
    let mut form = filled();
    form.password.clear();
    assert_eq!(form.validate(), Err(FormError::Required("Contraseña")));
}

#[test]
fn edit_allows_unchanged_password() {
    let mut form = filled();
    form.id = Some(3);
    form.password.clear();
    assert_eq!(form.validate().map(|u| u.id), Ok(3));
}

#[test]
fn validate_requires_names_and_dni() {
    let mut form = filled();
    form.first_name = " ".into();
    assert_eq!(form.validate(), Err(FormError::Required("Nombre")));
    let mut form = filled();
    form.document_number = "123".into();
    assert!(matches!(form.validate(), Err(FormError::Invalid(_))));
}

#[test]
fn validate_rejects_malformed_email() {
    let mut form = filled();
    form.email = "no-arroba".into();
    assert_eq!(form.validate(), Err(FormError::Invalid("Correo inválido".to_owned())));
}

#[test]
fn validate_builds_payload() {
    let user = filled().validate().unwrap();
    assert_eq!(user.id, 0);
    assert_eq!(user.first_name, "Lucía");
    assert_eq!(user.password_hash, "secreto");
    assert_eq!(user.role, Role::Gestor);
}
