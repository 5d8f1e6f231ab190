//! Small browser queries: connectivity, geolocation and viewport size.
//!
//! TRADE-OFFS
//! ==========
//! SSR and native test builds have no browser; they report "online", no
//! position and no viewport so callers take their normal code paths.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Geolocation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Tu navegador no soporta geolocalización.")]
    Unsupported,
    #[error("No se pudo obtener la ubicación: {0}")]
    Failed(String),
}

/// `navigator.onLine`.
pub fn is_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_none_or(|w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

#[cfg(feature = "hydrate")]
fn coordinate(position: &JsValue, field: &str) -> Option<f64> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    js_sys::Reflect::get(&coords, &JsValue::from_str(field)).ok()?.as_f64()
}

/// High-accuracy position as `(latitude, longitude)`.
///
/// # Errors
///
/// [`GeoError::Unsupported`] without a geolocation API, [`GeoError::Failed`]
/// when the user denies access or no fix is available.
pub async fn current_position() -> Result<(f64, f64), GeoError> {
    #[cfg(feature = "hydrate")]
    {
        let geolocation = web_sys::window()
            .and_then(|w| w.navigator().geolocation().ok())
            .ok_or(GeoError::Unsupported)?;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let on_ok = Closure::once_into_js(move |pos: JsValue| {
                let _ = resolve.call1(&JsValue::NULL, &pos);
            });
            let on_err = Closure::once_into_js(move |err: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &err);
            });
            let options = web_sys::PositionOptions::new();
            options.set_enable_high_accuracy(true);
            if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
                on_ok.unchecked_ref(),
                Some(on_err.unchecked_ref()),
                &options,
            ) {
                log::warn!("geolocation request failed: {e:?}");
            }
        });
        let position = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(|e| {
            let message = js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_else(|| "error desconocido".to_owned());
            GeoError::Failed(message)
        })?;
        match (coordinate(&position, "latitude"), coordinate(&position, "longitude")) {
            (Some(lat), Some(lng)) => Ok((lat, lng)),
            _ => Err(GeoError::Failed("posición sin coordenadas".to_owned())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeoError::Unsupported)
    }
}

/// Open `url` in a new tab (exports, PDF attachments).
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                log::warn!("could not open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
