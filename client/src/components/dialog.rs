//! Modal frame and the delete confirmation dialog.

use leptos::prelude::*;

/// Backdrop + centered dialog. Clicking the backdrop or pressing Escape
/// closes it.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                class:dialog--wide=wide
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{move || title.get()}</h2>
                {children()}
            </div>
        </div>
    }
}

/// "¿Eliminar?" prompt guarding every delete.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Confirmar"</h2>
                    <p>{message.clone()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>"Cancelar"</button>
                        <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>"Eliminar"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
