//! Reflection helpers for libraries the page shell loads as globals
//! (Firebase messaging, Chart.js, Leaflet).
//!
//! These scripts have no Rust bindings; every call goes through
//! `js_sys::Reflect` and errors come back as the JS error's message.

use wasm_bindgen::{JsCast, JsValue};

/// `error.message` if present, else the value's string form.
pub fn error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Global binding by name; `None` when the script is not loaded.
pub fn global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Read a property.
///
/// # Errors
///
/// The getter threw.
pub fn get(target: &JsValue, name: &str) -> Result<JsValue, String> {
    js_sys::Reflect::get(target, &JsValue::from_str(name)).map_err(|e| error_message(&e))
}

/// Call `target[name](...args)` with `target` as `this`.
///
/// # Errors
///
/// The property is not a function or the call threw.
pub fn call(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, String> {
    let func: js_sys::Function = get(target, name)?
        .dyn_into()
        .map_err(|_| format!("{name} is not a function"))?;
    let array: js_sys::Array = args.iter().collect();
    func.apply(target, &array).map_err(|e| error_message(&e))
}

/// `new ctor(...args)`.
///
/// # Errors
///
/// `ctor` is not a constructor or construction threw.
pub fn construct(ctor: &JsValue, args: &[JsValue]) -> Result<JsValue, String> {
    let ctor: &js_sys::Function = ctor.dyn_ref().ok_or_else(|| "not a constructor".to_owned())?;
    let array: js_sys::Array = args.iter().collect();
    js_sys::Reflect::construct(ctor, &array).map_err(|e| error_message(&e))
}

/// Convert a serializable value into a plain JS object through JSON.
///
/// # Errors
///
/// Serialization or `JSON.parse` failed.
pub fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&raw).map_err(|e| error_message(&e))
}

/// Convert a JS value into a Rust type through JSON.
///
/// # Errors
///
/// `JSON.stringify` or deserialization failed.
pub fn from_js<T: serde::de::DeserializeOwned>(value: &JsValue) -> Result<T, String> {
    let raw = js_sys::JSON::stringify(value)
        .map_err(|e| error_message(&e))?
        .as_string()
        .unwrap_or_default();
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}
