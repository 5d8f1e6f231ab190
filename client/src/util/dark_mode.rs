//! Dark mode initialization and toggle.
//!
//! Reads the stored preference and applies a `data-theme` attribute to the
//! `<html>` element. Toggle writes back through `util::storage`. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "tambo_admin_dark";

/// Stored preference, else the system `prefers-color-scheme`.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::load_string(STORAGE_KEY) {
        return stored == "true";
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist it and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
