//! Foreground push subscription bound to a component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard layout mounts one listener that turns every message into a
//! toast (plus an OS notification when permitted). Pages that display alert
//! data mount a silent listener of their own so they can refetch. Each owner
//! holds at most one SDK subscription; it is released on unmount, so route
//! changes and remounts never stack duplicate handlers.

use leptos::prelude::*;

use crate::net::types::RuntimeConfig;
use crate::state::notifications::NotificationState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::push;

/// Subscribe `owner` to foreground messages while mounted.
#[component]
pub fn PushListener(
    owner: &'static str,
    /// Called after each message, e.g. to refetch a list.
    #[prop(optional)]
    on_message: Option<Callback<()>>,
    /// Skip the toast and OS notification.
    #[prop(optional)]
    silent: bool,
) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let runtime = expect_context::<RwSignal<Option<RuntimeConfig>>>();

    Effect::new(move || {
        if !runtime.get().is_some_and(|c| c.push_enabled()) {
            return;
        }
        let mut claimed = false;
        notifications.update(|n| claimed = n.subscribe(owner));
        if !claimed {
            return;
        }
        let result = push::subscribe(owner, move |message| {
            if !silent {
                let mut effect = None;
                notifications.update(|n| effect = Some(n.on_message(&message)));
                if let Some(effect) = effect {
                    ui.update(|u| {
                        u.push_toast(ToastKind::Info, effect.toast_text(), Some(effect.link.to_owned()));
                    });
                    if effect.system_notification {
                        push::show_system_notification(&effect.title, &effect.body, effect.link);
                    }
                }
            }
            if let Some(callback) = on_message {
                callback.run(());
            }
        });
        if let Err(e) = result {
            log::warn!("push listener for {owner} not registered: {e}");
            notifications.update(|n| {
                n.unsubscribe(owner);
            });
        }
    });

    on_cleanup(move || {
        push::unsubscribe(owner);
        notifications.update(|n| {
            n.unsubscribe(owner);
        });
    });
}
