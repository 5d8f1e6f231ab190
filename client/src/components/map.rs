//! Leaflet maps: the visit report map and the visit-form location picker.
//!
//! The page shell loads Leaflet as the global `L`. Each mounted map keeps its
//! Leaflet objects (and the click closure, for the picker) in a thread-local
//! table keyed by a per-mount id; unmounting removes the map from the DOM.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::reports::{DEFAULT_CENTER, MapPoint, map_center};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(1);

#[cfg(feature = "hydrate")]
mod leaflet {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsValue;

    use crate::state::reports::MapPoint;
    use crate::util::js;

    struct LiveMap {
        map: JsValue,
        markers: JsValue,
        _on_click: Option<Closure<dyn FnMut(JsValue)>>,
    }

    thread_local! {
        static MAPS: RefCell<HashMap<u64, LiveMap>> = RefCell::new(HashMap::new());
    }

    fn lat_lng(lat: f64, lng: f64) -> JsValue {
        let pair = js_sys::Array::new();
        pair.push(&JsValue::from_f64(lat));
        pair.push(&JsValue::from_f64(lng));
        pair.into()
    }

    pub fn exists(id: u64) -> bool {
        MAPS.with(|m| m.borrow().contains_key(&id))
    }

    /// Create a map centered at `center` inside `element`.
    pub fn create(id: u64, element: &web_sys::HtmlDivElement, center: (f64, f64), zoom: u8) -> Result<(), String> {
        let l = js::global("L").ok_or_else(|| "Leaflet is not loaded".to_owned())?;
        let options = js::to_js(&serde_json::json!({ "scrollWheelZoom": false }))?;
        let map = js::call(&l, "map", &[JsValue::from(element.clone()), options])?;
        js::call(&map, "setView", &[lat_lng(center.0, center.1), JsValue::from(zoom)])?;
        let tile_options = js::to_js(&serde_json::json!({ "attribution": super::ATTRIBUTION }))?;
        let tiles = js::call(&l, "tileLayer", &[JsValue::from_str(super::TILE_URL), tile_options])?;
        js::call(&tiles, "addTo", &[map.clone()])?;
        let markers = js::call(&l, "layerGroup", &[])?;
        js::call(&markers, "addTo", &[map.clone()])?;
        MAPS.with(|m| m.borrow_mut().insert(id, LiveMap { map, markers, _on_click: None }));
        Ok(())
    }

    /// Report clicks as `(lat, lng)`.
    pub fn on_click(id: u64, handler: impl Fn(f64, f64) + 'static) -> Result<(), String> {
        MAPS.with(|m| {
            let mut maps = m.borrow_mut();
            let live = maps.get_mut(&id).ok_or_else(|| "unknown map".to_owned())?;
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let coords = js::get(&event, "latlng").ok();
                let read = |field: &str| coords.as_ref().and_then(|c| js::get(c, field).ok()).and_then(|v| v.as_f64());
                if let (Some(lat), Some(lng)) = (read("lat"), read("lng")) {
                    handler(lat, lng);
                }
            });
            js::call(&live.map, "on", &[JsValue::from_str("click"), closure.as_ref().clone()])?;
            live._on_click = Some(closure);
            Ok(())
        })
    }

    /// Replace all markers.
    pub fn set_markers(id: u64, points: &[MapPoint]) -> Result<(), String> {
        let Some(l) = js::global("L") else {
            return Err("Leaflet is not loaded".to_owned());
        };
        MAPS.with(|m| {
            let maps = m.borrow();
            let live = maps.get(&id).ok_or_else(|| "unknown map".to_owned())?;
            js::call(&live.markers, "clearLayers", &[])?;
            for point in points {
                let marker = js::call(&l, "marker", &[lat_lng(point.lat, point.lng)])?;
                let status = if point.confirmed { "✔ Confirmada" } else { "✖ No confirmada" };
                let popup = format!("{}<br/>{status}", point.label);
                js::call(&marker, "bindPopup", &[JsValue::from_str(&popup)])?;
                js::call(&marker, "addTo", &[live.markers.clone()])?;
            }
            Ok(())
        })
    }

    pub fn recenter(id: u64, center: (f64, f64)) -> Result<(), String> {
        MAPS.with(|m| {
            let maps = m.borrow();
            let live = maps.get(&id).ok_or_else(|| "unknown map".to_owned())?;
            js::call(&live.map, "panTo", &[lat_lng(center.0, center.1)]).map(|_| ())
        })
    }

    pub fn remove(id: u64) {
        if let Some(live) = MAPS.with(|m| m.borrow_mut().remove(&id)) {
            if let Err(e) = js::call(&live.map, "remove", &[]) {
                log::warn!("map remove failed: {e}");
            }
        }
    }
}

/// Markers for geolocated visits, centered on their mean position.
#[component]
pub fn VisitMap(#[prop(into)] points: Signal<Vec<MapPoint>>) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let id = NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed);

    Effect::new(move || {
        let current = points.get();
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = container.get() else {
                return;
            };
            let center = map_center(&current);
            let result = if leaflet::exists(id) {
                leaflet::recenter(id, center)
            } else {
                leaflet::create(id, &el, center, 5)
            }
            .and_then(|()| leaflet::set_markers(id, &current));
            if let Err(e) = result {
                log::warn!("visit map: {e}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (map_center(&current), id);
        }
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        leaflet::remove(id);
    });

    view! { <div class="map map--report" node_ref=container></div> }
}

/// Click-to-pick map showing the selected coordinates as a single marker.
#[component]
pub fn LocationPicker(
    #[prop(into)] position: Signal<Option<(f64, f64)>>,
    on_pick: Callback<(f64, f64)>,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let id = NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed);

    Effect::new(move || {
        let selected = position.get();
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = container.get() else {
                return;
            };
            let marker: Vec<MapPoint> = selected
                .map(|(lat, lng)| MapPoint { lat, lng, label: "Ubicación de la visita".to_owned(), confirmed: true })
                .into_iter()
                .collect();
            let result = if leaflet::exists(id) {
                selected.map_or(Ok(()), |center| leaflet::recenter(id, center))
            } else {
                leaflet::create(id, &el, selected.unwrap_or(DEFAULT_CENTER), 6)
                    .and_then(|()| leaflet::on_click(id, move |lat, lng| on_pick.run((lat, lng))))
            }
            .and_then(|()| leaflet::set_markers(id, &marker));
            if let Err(e) = result {
                log::warn!("location picker: {e}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (selected.unwrap_or(DEFAULT_CENTER), id, on_pick);
        }
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        leaflet::remove(id);
    });

    view! { <div class="map map--picker" node_ref=container></div> }
}
