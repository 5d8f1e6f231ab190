//! Browser localStorage access for session, remember-me and offline queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted value in the dashboard goes through these helpers so the
//! key names live in one place. SSR builds have no storage; reads return
//! `None` and writes are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialized session user.
pub const USER_KEY: &str = "user";
/// Bearer token attached to API requests.
pub const TOKEN_KEY: &str = "token";
/// Remembered login document number.
pub const REMEMBERED_DNI_KEY: &str = "rememberedDni";
/// Remembered login password.
pub const REMEMBERED_PASSWORD_KEY: &str = "rememberedPassword";
/// JSON array of visits captured while offline.
pub const OFFLINE_VISITS_KEY: &str = "visitas_offline";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string value.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string value.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load and decode a JSON value. Undecodable values read as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable {key} from storage: {e}");
            None
        }
    }
}

/// Encode and save a JSON value.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_string(key, &raw),
        Err(e) => log::error!("failed to encode {key}: {e}"),
    }
}

/// Remove a key.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
