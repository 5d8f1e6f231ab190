use super::*;

fn comunicado(titulo: &str, fecha_inicio: &str, eliminado: Option<bool>) -> Comunicado {
    serde_json::from_value(serde_json::json!({
        "titulo": titulo,
        "fechaInicio": fecha_inicio,
        "eliminado": eliminado,
    }))
    .expect("comunicado")
}

// =============================================================
// inbox_items
// =============================================================

#[test]
fn inbox_items_sorts_newest_first() {
    let items = inbox_items(vec![
        comunicado("viejo", "2024-01-05T00:00:00", None),
        comunicado("nuevo", "2024-03-01T00:00:00", None),
        comunicado("medio", "2024-02-10T00:00:00", Some(false)),
    ]);
    let titles: Vec<&str> = items.iter().map(|c| c.titulo.as_str()).collect();
    assert_eq!(titles, vec!["nuevo", "medio", "viejo"]);
}

#[test]
fn inbox_items_hides_deleted() {
    let items = inbox_items(vec![
        comunicado("visible", "2024-01-05", None),
        comunicado("borrado", "2024-02-05", Some(true)),
    ]);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].titulo, "visible");
}

#[test]
fn inbox_items_empty_stays_empty() {
    assert!(inbox_items(Vec::new()).is_empty());
}
