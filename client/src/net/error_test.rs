use super::*;

#[test]
fn validation_body_becomes_field_map() {
    let body = r#"{"errors":{"GestorId":["El gestor es obligatorio"],"TamboId":["Requerido","Inválido"]}}"#;
    let err = ApiError::from_response(400, body);
    let ApiError::Validation { fields } = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["TamboId"], vec!["Requerido".to_owned(), "Inválido".to_owned()]);
    assert_eq!(
        err.user_message(),
        "Errores de validación: GestorId: El gestor es obligatorio; TamboId: Requerido, Inválido"
    );
}

#[test]
fn plain_text_body_is_message() {
    let err = ApiError::from_response(401, "Credenciales inválidas");
    assert_eq!(err, ApiError::Status { status: 401, message: "Credenciales inválidas".to_owned() });
    assert!(err.is_unauthorized());
}

#[test]
fn quoted_json_string_body_is_unquoted() {
    let err = ApiError::from_response(400, "\"DNI no encontrado\"");
    assert_eq!(err.user_message(), "DNI no encontrado");
}

#[test]
fn json_message_and_title_are_used() {
    let err = ApiError::from_response(500, r#"{"message":"boom"}"#);
    assert_eq!(err.user_message(), "boom");
    let err = ApiError::from_response(404, r#"{"title":"Not Found","status":404}"#);
    assert_eq!(err.user_message(), "Not Found");
}

#[test]
fn empty_body_falls_back_to_status() {
    let err = ApiError::from_response(502, "");
    assert_eq!(err.user_message(), "Error del servidor (502)");
    assert!(!err.is_unauthorized());
}

#[test]
fn empty_errors_object_is_not_validation() {
    let err = ApiError::from_response(400, r#"{"errors":{}}"#);
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
}
