//! Toast stack rendered in the dashboard corner.

use leptos::prelude::*;

use crate::state::ui::{Toast, UiState};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u32 = 5_000;

/// Renders queued toasts; each dismisses itself after a few seconds.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || ui.get().toasts key=|t| t.id let:toast>
                <ToastItem toast=toast/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        ui.try_update(|u| u.dismiss(id));
    });

    let message = toast.message.clone();
    let body = match toast.link {
        Some(link) => view! { <a class="toast__link" href=link>{message}</a> }.into_any(),
        None => view! { <span>{message}</span> }.into_any(),
    };

    view! {
        <div class=toast.kind.css_class() role="status">
            {body}
            <button class="toast__close" title="Cerrar" on:click=move |_| ui.update(|u| u.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
