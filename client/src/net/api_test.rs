use super::*;

#[test]
fn api_url_prefixes_same_origin_pass_through() {
    assert_eq!(api_url("/Users"), "/api/Users");
}

#[test]
fn resource_paths_match_backend_routes() {
    assert_eq!(item_path(Tambo::PATH, 12), "/Tambos/12");
    assert_eq!(Asignacion::LIST_PATH, "/Asignaciones/extendidas");
    assert_eq!(Asignacion::PATH, "/Asignaciones");
    assert_eq!(Comunicado::LIST_PATH, "/Comunicado");
    assert_eq!(Visita::PATH, "/VisitaDomiciliaria");
}

#[test]
fn location_paths_encode_segments() {
    assert_eq!(provinces_path("Lima"), "/Tambos/provincias/Lima");
    assert_eq!(districts_path("La Libertad", "Trujillo"), "/Tambos/distritos/La%20Libertad/Trujillo");
    assert_eq!(
        station_code_path("Lima", "Lima", "Ancón"),
        "/Tambos/generar-codigo/Lima/Lima/Anc%C3%B3n"
    );
}

#[test]
fn misc_paths() {
    assert_eq!(export_history_path(4), "/exportacionhistorial/usuario/4");
    assert_eq!(firebase_token_path(4), "/Users/4/firebase-token");
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn media_url_proxies_relative_uploads_only() {
    assert_eq!(media_url("uploads/a.pdf"), "/media/uploads/a.pdf");
    assert_eq!(media_url("/uploads/a.png"), "/media/uploads/a.png");
    assert_eq!(media_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
    assert_eq!(media_url("data:image/png;base64,AA=="), "data:image/png;base64,AA==");
    assert_eq!(media_url(""), "");
}

#[test]
fn decode_reports_shape_mismatch() {
    let ok: Vec<String> = decode(r#"["Lima","Cusco"]"#).unwrap();
    assert_eq!(ok.len(), 2);
    let err = decode::<Vec<String>>("{}").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn code_body_accepts_string_object_and_text() {
    assert_eq!(parse_code_body("\"LIM-001\""), "LIM-001");
    assert_eq!(parse_code_body(r#"{"codigo":"LIM-002"}"#), "LIM-002");
    assert_eq!(parse_code_body(r#"{"code":"LIM-003"}"#), "LIM-003");
    assert_eq!(parse_code_body(" LIM-004\n"), "LIM-004");
}

#[test]
fn calls_outside_browser_are_unavailable() {
    let result = block_on(list::<Tambo>());
    assert_eq!(result.unwrap_err(), ApiError::Unavailable);
}

/// Minimal executor for futures that complete without yielding.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete synchronously"),
    }
}
