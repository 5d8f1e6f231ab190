//! Login page: national id (DNI) + password with "remember me".

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::{RememberedLogin, SessionState};
use crate::util::auth::install_authed_redirect;

/// Trimmed `(dni, password)` or the message to show.
pub fn validate_login_input(dni: &str, password: &str) -> Result<(String, String), &'static str> {
    let dni = dni.trim();
    if dni.is_empty() || password.is_empty() {
        return Err("Ingrese su número de documento y contraseña.");
    }
    Ok((dni.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_authed_redirect(session, use_navigate());

    let dni = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Local storage only exists in the browser.
    Effect::new(move || {
        if let Some(saved) = RememberedLogin::load() {
            dni.set(saved.dni);
            password.set(saved.password);
            remember.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (dni_value, password_value) = match validate_login_input(&dni.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());
        let keep = remember.get();
        leptos::task::spawn_local(async move {
            match api::login(&dni_value, &password_value).await {
                Ok(response) => {
                    RememberedLogin::apply(keep, &dni_value, &password_value);
                    log::info!("signed in as {}", response.user.document_number);
                    session.update(|s| s.login(response));
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    message.try_set(e.user_message());
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Niños de Hierro"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        inputmode="numeric"
                        placeholder="Número de documento"
                        prop:value=move || dni.get()
                        on:input=move |ev| dni.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Recuérdame"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Iniciar sesión" }}
                    </button>
                </form>
                <A href="/recuperar" attr:class="login-link">"¿Olvidaste tu contraseña?"</A>
                <A href="/register" attr:class="login-link">"¿No tienes cuenta? Regístrate aquí"</A>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
