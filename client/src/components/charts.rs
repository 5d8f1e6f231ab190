//! Chart.js configurations and the canvas host that renders them.
//!
//! DESIGN
//! ======
//! The config builders are pure `serde_json` and tested natively. The host
//! component hands a config to the global `Chart` constructor (loaded by the
//! page shell) and destroys the previous instance whenever the config changes
//! or the component unmounts. Live instances sit in a thread-local table keyed
//! by a per-mount id so cleanup only needs that id.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::html::Canvas;
use leptos::prelude::*;
use serde_json::{Value, json};

use crate::state::reports::Series;

const PALETTE: [&str; 8] = ["#4f46e5", "#22c55e", "#f59e0b", "#ef4444", "#06b6d4", "#a855f7", "#ec4899", "#64748b"];
const AXIS_COLOR: &str = "#475569";

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

fn colors(n: usize) -> Vec<&'static str> {
    PALETTE.iter().copied().cycle().take(n).collect()
}

fn axes() -> Value {
    json!({
        "x": { "ticks": { "color": AXIS_COLOR } },
        "y": { "beginAtZero": true, "ticks": { "color": AXIS_COLOR } }
    })
}

/// Single-dataset bar chart; `horizontal` swaps the axes.
#[must_use]
pub fn bar_config(title: &str, series: &Series, horizontal: bool) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": series.labels,
            "datasets": [{ "label": title, "data": series.values, "backgroundColor": PALETTE[0] }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "indexAxis": if horizontal { "y" } else { "x" },
            "plugins": { "legend": { "display": false }, "tooltip": { "enabled": true } },
            "scales": axes()
        }
    })
}

/// Single-dataset line chart.
#[must_use]
pub fn line_config(title: &str, series: &Series) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": title,
                "data": series.values,
                "fill": false,
                "borderColor": "#6366f1",
                "tension": 0.4
            }]
        },
        "options": { "responsive": true, "maintainAspectRatio": false, "scales": axes() }
    })
}

/// Pie, or doughnut when `doughnut` is set; one color per slice.
#[must_use]
pub fn pie_config(series: &Series, doughnut: bool) -> Value {
    json!({
        "type": if doughnut { "doughnut" } else { "pie" },
        "data": {
            "labels": series.labels,
            "datasets": [{ "data": series.values, "backgroundColor": colors(series.values.len()) }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "bottom" } }
        }
    })
}

/// Radar chart over the series' labels.
#[must_use]
pub fn radar_config(title: &str, series: &Series) -> Value {
    json!({
        "type": "radar",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": title,
                "data": series.values,
                "backgroundColor": "rgba(79, 70, 229, 0.2)",
                "borderColor": PALETTE[0]
            }]
        },
        "options": { "responsive": true, "maintainAspectRatio": false }
    })
}

/// Half-doughnut gauge showing `value` out of `value + rest`.
#[must_use]
pub fn gauge_config(value: f64, rest: f64) -> Value {
    json!({
        "type": "doughnut",
        "data": {
            "labels": ["Progreso", "Restante"],
            "datasets": [{
                "data": [value, rest],
                "backgroundColor": ["#22c55e", "#e5e7eb"],
                "borderWidth": 0,
                "hoverOffset": 4
            }]
        },
        "options": {
            "cutout": "75%",
            "rotation": -90,
            "circumference": 180,
            "plugins": { "tooltip": { "enabled": false }, "legend": { "display": false } }
        }
    })
}

#[cfg(feature = "hydrate")]
mod registry {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use wasm_bindgen::JsValue;

    use crate::util::js;

    thread_local! {
        static CHARTS: RefCell<HashMap<u64, JsValue>> = RefCell::new(HashMap::new());
    }

    pub fn destroy(id: u64) {
        if let Some(chart) = CHARTS.with(|c| c.borrow_mut().remove(&id)) {
            if let Err(e) = js::call(&chart, "destroy", &[]) {
                log::warn!("chart destroy failed: {e}");
            }
        }
    }

    pub fn render(id: u64, canvas: &web_sys::HtmlCanvasElement, config: &serde_json::Value) {
        destroy(id);
        let Some(ctor) = js::global("Chart") else {
            log::warn!("Chart.js is not loaded");
            return;
        };
        let created = js::to_js(config).and_then(|cfg| js::construct(&ctor, &[JsValue::from(canvas.clone()), cfg]));
        match created {
            Ok(chart) => {
                CHARTS.with(|c| c.borrow_mut().insert(id, chart));
            }
            Err(e) => log::warn!("chart render failed: {e}"),
        }
    }
}

/// Canvas rendering the current config; "Sin datos" while it is `None`.
#[component]
pub fn ChartCanvas(#[prop(into)] config: Signal<Option<Value>>) -> impl IntoView {
    let canvas = NodeRef::<Canvas>::new();
    let id = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);

    Effect::new(move || {
        let current = config.get();
        #[cfg(feature = "hydrate")]
        {
            match (canvas.get(), current) {
                (Some(el), Some(cfg)) => registry::render(id, &el, &cfg),
                _ => registry::destroy(id),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, id);
        }
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        registry::destroy(id);
    });

    view! {
        <div class="chart">
            <canvas node_ref=canvas class:chart__canvas--hidden=move || config.with(Option::is_none)></canvas>
            <Show when=move || config.with(Option::is_none)>
                <p class="chart__empty">"Sin datos"</p>
            </Show>
        </div>
    }
}

/// Titled card around a chart.
#[component]
pub fn ChartCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <h3 class="chart-card__title">{title}</h3>
            {children()}
        </div>
    }
}
