//! Two-step SMS verification of a phone number.

use leptos::prelude::*;

use crate::components::dialog::ModalFrame;
use crate::components::feedback::Feedback;
use crate::net::api;
use crate::state::forms::phone::PhoneVerification;

/// Send a code to the entered phone, then check the code the user typed.
/// `on_verified` receives the verified number.
#[component]
pub fn PhoneVerificationDialog(
    #[prop(into)] phone: String,
    on_verified: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(PhoneVerification::new(&phone));
    let feedback = Feedback::expect();

    let send_code = move |_| {
        let target = match state.with(PhoneVerification::send_target) {
            Ok(target) => target,
            Err(e) => {
                feedback.warn(e.to_string());
                return;
            }
        };
        state.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            let result = api::send_phone_code(&target).await;
            state.try_update(|s| {
                s.busy = false;
                s.code_sent = result.is_ok();
            });
            match result {
                Ok(()) => feedback.info("Código enviado por SMS"),
                Err(e) => feedback.api_error("send verification code", &e),
            }
        });
    };

    let check_code = move |_| {
        let (target, code) = match state.with(PhoneVerification::check_target) {
            Ok(pair) => pair,
            Err(e) => {
                feedback.warn(e.to_string());
                return;
            }
        };
        state.update(|s| s.busy = true);
        leptos::task::spawn_local(async move {
            let result = api::check_phone_code(&target, &code).await;
            state.try_update(|s| {
                s.busy = false;
                s.verified = result.is_ok();
            });
            match result {
                Ok(()) => {
                    feedback.success("Teléfono verificado correctamente");
                    on_verified.run(target);
                }
                Err(e) => feedback.api_error("check verification code", &e),
            }
        });
    };

    view! {
        <ModalFrame title="Verificación de teléfono".to_owned() on_close=on_close>
            <p class="dialog__hint">"Paso 1: ingrese su número de celular para recibir el código."</p>
            <input
                type="tel"
                placeholder="Número de celular"
                prop:value=move || state.with(|s| s.phone.clone())
                on:input=move |ev| state.update(|s| s.set_phone(&event_target_value(&ev)))
            />
            <button
                type="button"
                class="btn"
                disabled=move || state.with(|s| s.busy)
                on:click=send_code
            >
                "Enviar código"
            </button>
            <hr/>
            <p class="dialog__hint">"Paso 2: ingrese el código recibido por SMS."</p>
            <input
                type="text"
                placeholder="Código recibido"
                prop:value=move || state.with(|s| s.code.clone())
                on:input=move |ev| state.update(|s| s.code = event_target_value(&ev))
            />
            <div class="dialog__actions">
                <button type="button" class="btn" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button
                    type="button"
                    class="btn btn--primary"
                    disabled=move || state.with(|s| s.busy || !s.code_sent)
                    on:click=check_code
                >
                    {move || if state.with(|s| s.busy) { "Verificando..." } else { "Verificar código" }}
                </button>
            </div>
        </ModalFrame>
    }
}
