//! Password recovery: request an SMS code for DNI + phone, then set a new
//! password with that code.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::util::auth::LOGIN_ROUTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Request,
    Reset,
    Done,
}

#[component]
pub fn RecoverPasswordPage() -> impl IntoView {
    let step = RwSignal::new(Step::Request);
    let dni = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (dni_value, phone_value) = (dni.get().trim().to_owned(), phone.get().trim().to_owned());
        if dni_value.is_empty() || phone_value.is_empty() {
            message.set("Ingrese su DNI y teléfono.".to_owned());
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::recover_password(&dni_value, &phone_value).await {
                Ok(()) => {
                    message.try_set("Código enviado al teléfono".to_owned());
                    step.try_set(Step::Reset);
                }
                Err(e) => {
                    log::warn!("recovery code request failed: {e}");
                    message.try_set("Error al enviar el código. Verifica los datos.".to_owned());
                }
            }
            busy.try_set(false);
        });
    };

    let reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code_value = code.get().trim().to_owned();
        let password_value = new_password.get();
        if code_value.is_empty() || password_value.is_empty() {
            message.set("Ingrese el código y la nueva contraseña.".to_owned());
            return;
        }
        let (dni_value, phone_value) = (dni.get().trim().to_owned(), phone.get().trim().to_owned());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::reset_password(&dni_value, &phone_value, &code_value, &password_value).await {
                Ok(()) => {
                    message.try_set("Contraseña restablecida. Inicia sesión nuevamente.".to_owned());
                    step.try_set(Step::Done);
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    message.try_set("Código incorrecto o error al cambiar contraseña.".to_owned());
                }
            }
            busy.try_set(false);
        });
    };

    let input = |placeholder: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Recuperar contraseña"</h1>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
                {move || match step.get() {
                    Step::Request => view! {
                        <form class="login-form" on:submit=send_code>
                            {input("DNI", "text", dni)}
                            {input("Teléfono", "tel", phone)}
                            <button class="login-button" type="submit" disabled=move || busy.get()>"Enviar código"</button>
                        </form>
                    }
                    .into_any(),
                    Step::Reset => view! {
                        <form class="login-form" on:submit=reset>
                            {input("Código de verificación", "text", code)}
                            {input("Nueva contraseña", "password", new_password)}
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Restablecer contraseña"
                            </button>
                        </form>
                    }
                    .into_any(),
                    Step::Done => view! { <span></span> }.into_any(),
                }}
                <A href=LOGIN_ROUTE attr:class="login-link">"Volver al login"</A>
            </div>
        </div>
    }
}
