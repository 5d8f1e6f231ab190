use super::*;

fn series() -> Series {
    Series { labels: vec!["Gestor".to_owned(), "Niño".to_owned(), "Gestante".to_owned()], values: vec![4.0, 10.0, 2.0] }
}

// =============================================================
// Cartesian charts
// =============================================================

#[test]
fn bar_config_carries_labels_and_values() {
    let cfg = bar_config("Visitas", &series(), false);
    assert_eq!(cfg["type"], "bar");
    assert_eq!(cfg["data"]["labels"][1], "Niño");
    assert_eq!(cfg["data"]["datasets"][0]["data"][0], 4.0);
    assert_eq!(cfg["data"]["datasets"][0]["label"], "Visitas");
    assert_eq!(cfg["options"]["indexAxis"], "x");
    assert_eq!(cfg["options"]["scales"]["y"]["beginAtZero"], true);
}

#[test]
fn horizontal_bar_swaps_index_axis() {
    let cfg = bar_config("Top", &series(), true);
    assert_eq!(cfg["options"]["indexAxis"], "y");
}

#[test]
fn line_config_is_unfilled_curve() {
    let cfg = line_config("Visitas por mes", &series());
    assert_eq!(cfg["type"], "line");
    assert_eq!(cfg["data"]["datasets"][0]["fill"], false);
    assert_eq!(cfg["data"]["datasets"][0]["tension"], 0.4);
}

// =============================================================
// Circular charts
// =============================================================

#[test]
fn pie_config_colors_every_slice() {
    let cfg = pie_config(&series(), false);
    assert_eq!(cfg["type"], "pie");
    assert_eq!(cfg["data"]["datasets"][0]["backgroundColor"].as_array().map(Vec::len), Some(3));
}

#[test]
fn palette_cycles_past_its_length() {
    let many = Series { labels: vec![String::new(); 10], values: vec![1.0; 10] };
    let cfg = pie_config(&many, true);
    let colors = &cfg["data"]["datasets"][0]["backgroundColor"];
    assert_eq!(cfg["type"], "doughnut");
    assert_eq!(colors.as_array().map(Vec::len), Some(10));
    assert_eq!(colors[0], colors[8]);
}

#[test]
fn gauge_is_half_doughnut() {
    let cfg = gauge_config(62.5, 37.5);
    assert_eq!(cfg["type"], "doughnut");
    assert_eq!(cfg["options"]["circumference"], 180);
    assert_eq!(cfg["options"]["rotation"], -90);
    assert_eq!(cfg["data"]["datasets"][0]["data"][0], 62.5);
    assert_eq!(cfg["data"]["datasets"][0]["data"][1], 37.5);
}

#[test]
fn radar_config_uses_series_labels() {
    let cfg = radar_config("Servicios", &series());
    assert_eq!(cfg["type"], "radar");
    assert_eq!(cfg["data"]["labels"].as_array().map(Vec::len), Some(3));
}
