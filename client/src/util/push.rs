//! Bridge to the Firebase Cloud Messaging web SDK.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell loads the Firebase "compat" scripts, which expose a global
//! `firebase` object. This module drives that object through `js_sys`
//! reflection: app initialization, permission prompts, foreground
//! `onMessage` subscriptions, device tokens and OS notifications. Decisions
//! (whether to prompt, whether a listener already exists) live in
//! `state::notifications`; this module only performs them.
//!
//! Live subscriptions are kept in a thread-local table keyed by owner so
//! `on_cleanup` handlers only need the owner name to tear one down.

use crate::net::types::{FirebaseWebConfig, PushMessage};
use crate::state::notifications::Permission;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::collections::HashMap;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::js;

/// Push bridge failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PushError {
    #[error("notificaciones push no disponibles")]
    Unavailable,
    #[error("error de Firebase: {0}")]
    Sdk(String),
}

#[cfg(feature = "hydrate")]
struct Subscription {
    unsubscribe: js_sys::Function,
    _handler: Closure<dyn FnMut(JsValue)>,
}

#[cfg(feature = "hydrate")]
thread_local! {
    static SUBSCRIPTIONS: RefCell<HashMap<String, Subscription>> = RefCell::new(HashMap::new());
}

#[cfg(feature = "hydrate")]
fn firebase() -> Result<JsValue, PushError> {
    js::global("firebase").ok_or(PushError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn call(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, PushError> {
    js::call(target, name, args).map_err(PushError::Sdk)
}

#[cfg(feature = "hydrate")]
fn messaging() -> Result<JsValue, PushError> {
    call(&firebase()?, "messaging", &[])
}

#[cfg(feature = "hydrate")]
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, PushError> {
    js::to_js(value).map_err(PushError::Sdk)
}

/// Initialize the default Firebase app once.
///
/// # Errors
///
/// [`PushError::Unavailable`] when the SDK scripts are not loaded.
pub fn init(config: &FirebaseWebConfig) -> Result<(), PushError> {
    #[cfg(feature = "hydrate")]
    {
        let fb = firebase()?;
        let apps = js::get(&fb, "apps").map_err(PushError::Sdk)?;
        let existing = js::get(&apps, "length").ok().and_then(|n| n.as_f64()).unwrap_or(0.0);
        if existing > 0.0 {
            return Ok(());
        }
        call(&fb, "initializeApp", &[to_js(config)?])?;
        log::info!("firebase initialized for project {}", config.project_id);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(PushError::Unavailable)
    }
}

/// Current `Notification.permission`.
pub fn permission() -> Permission {
    #[cfg(feature = "hydrate")]
    {
        let has_api = web_sys::window()
            .is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("Notification")).unwrap_or(false));
        if !has_api {
            return Permission::Unsupported;
        }
        match web_sys::Notification::permission() {
            web_sys::NotificationPermission::Granted => Permission::Granted,
            web_sys::NotificationPermission::Denied => Permission::Denied,
            _ => Permission::Default,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Permission::Unsupported
    }
}

/// Show the browser's permission prompt and return the answer.
pub async fn request_permission() -> Permission {
    #[cfg(feature = "hydrate")]
    {
        let Ok(promise) = web_sys::Notification::request_permission() else {
            return Permission::Unsupported;
        };
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(answer) => Permission::from_browser(&answer.as_string().unwrap_or_default()),
            Err(e) => {
                log::warn!("notification permission prompt failed: {e:?}");
                permission()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Permission::Unsupported
    }
}

/// Register `handler` as `owner`'s foreground message listener. A second
/// registration for the same owner is ignored.
///
/// # Errors
///
/// Fails when messaging is unavailable or the SDK rejects the listener.
pub fn subscribe<F>(owner: &str, handler: F) -> Result<(), PushError>
where
    F: Fn(PushMessage) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        if SUBSCRIPTIONS.with(|subs| subs.borrow().contains_key(owner)) {
            return Ok(());
        }
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            match js::from_js::<PushMessage>(&payload) {
                Ok(message) => handler(message),
                Err(e) => log::warn!("ignoring undecodable push payload: {e}"),
            }
        });
        let unsubscribe = call(&messaging()?, "onMessage", &[closure.as_ref().clone()])?;
        let unsubscribe: js_sys::Function = unsubscribe
            .dyn_into()
            .map_err(|_| PushError::Sdk("onMessage no devolvió una función".to_owned()))?;
        SUBSCRIPTIONS.with(|subs| {
            subs.borrow_mut().insert(owner.to_owned(), Subscription { unsubscribe, _handler: closure });
        });
        log::debug!("push listener registered for {owner}");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (owner, handler);
        Err(PushError::Unavailable)
    }
}

/// Tear down `owner`'s listener, if any.
pub fn unsubscribe(owner: &str) {
    #[cfg(feature = "hydrate")]
    {
        let removed = SUBSCRIPTIONS.with(|subs| subs.borrow_mut().remove(owner));
        if let Some(sub) = removed {
            if let Err(e) = sub.unsubscribe.call0(&JsValue::NULL) {
                log::warn!("push unsubscribe failed for {owner}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = owner;
    }
}

/// Messaging device token for this browser.
///
/// # Errors
///
/// Fails when messaging is unavailable, permission is missing or the SDK
/// returns no token.
pub async fn device_token(vapid_key: &str) -> Result<String, PushError> {
    #[cfg(feature = "hydrate")]
    {
        let options = to_js(&serde_json::json!({ "vapidKey": vapid_key }))?;
        let promise: js_sys::Promise = call(&messaging()?, "getToken", &[options])?
            .dyn_into()
            .map_err(|_| PushError::Sdk("getToken no devolvió una promesa".to_owned()))?;
        let token = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| PushError::Sdk(js::error_message(&e)))?;
        token
            .as_string()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PushError::Sdk("token vacío".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = vapid_key;
        Err(PushError::Unavailable)
    }
}

/// Show an OS notification that opens `link` when clicked.
pub fn show_system_notification(title: &str, body: &str, link: &str) {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::NotificationOptions::new();
        options.set_body(body);
        match web_sys::Notification::new_with_options(title, &options) {
            Ok(notification) => {
                let link = link.to_owned();
                let on_click = Closure::once_into_js(move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.focus();
                        let _ = window.location().set_href(&link);
                    }
                });
                notification.set_onclick(Some(on_click.unchecked_ref()));
            }
            Err(e) => log::warn!("could not show notification: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, body, link);
    }
}
