use super::*;

#[test]
fn validate_login_input_trims_dni() {
    assert_eq!(
        validate_login_input("  12345678 ", "secreto"),
        Ok(("12345678".to_owned(), "secreto".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(validate_login_input("12345678", " a b "), Ok(("12345678".to_owned(), " a b ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secreto"), Err("Ingrese su número de documento y contraseña."));
    assert_eq!(validate_login_input("12345678", ""), Err("Ingrese su número de documento y contraseña."));
}
