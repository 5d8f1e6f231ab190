use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  Ana ", "Nombre"), Ok("Ana".to_owned()));
    assert_eq!(required("   ", "Nombre"), Err(FormError::Required("Nombre")));
    assert_eq!(FormError::Required("Nombre").to_string(), "Nombre es obligatorio");
}

#[test]
fn optional_maps_blank_to_none() {
    assert_eq!(optional(" "), None);
    assert_eq!(optional(" x "), Some("x".to_owned()));
}

#[test]
fn date_only_strips_time_component() {
    assert_eq!(date_only("1990-04-12T00:00:00"), "1990-04-12");
    assert_eq!(date_only("1990-04-12"), "1990-04-12");
    assert_eq!(date_only(""), "");
}

#[test]
fn dni_is_eight_digits() {
    assert!(is_dni("12345678"));
    assert!(!is_dni("1234567"));
    assert!(!is_dni("1234567a"));
    assert!(!is_dni("123456789"));
}

#[test]
fn optional_number_accepts_comma_decimal() {
    assert_eq!(optional_number("", "Peso"), Ok(None));
    assert_eq!(optional_number("12,5", "Peso"), Ok(Some(12.5)));
    assert_eq!(
        optional_number("doce", "Peso"),
        Err(FormError::Invalid("Peso debe ser un número".to_owned()))
    );
    assert_eq!(number_text(Some(3.25)), "3.25");
    assert_eq!(number_text(None), "");
}
