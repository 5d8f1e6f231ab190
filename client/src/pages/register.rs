//! Public self-registration. The phone number must be verified by SMS
//! before the account is created.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::modals::collaborator::CollaboratorFields;
use crate::components::modals::phone_verification::PhoneVerificationDialog;
use crate::net::api;
use crate::net::types::{Role, User};
use crate::state::forms::collaborator::CollaboratorForm;
use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_ROUTE, install_authed_redirect};

const REDIRECT_DELAY_MS: u32 = 2000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_authed_redirect(session, navigate.clone());

    let form = RwSignal::new(CollaboratorForm::new(Role::Nino));
    let verified_phone = RwSignal::new(None::<String>);
    let verifying = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    // Leave the page a moment after success so the confirmation is readable.
    Effect::new(move || {
        if !done.get() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
            #[cfg(not(feature = "hydrate"))]
            let _ = REDIRECT_DELAY_MS;
            navigate(LOGIN_ROUTE, leptos_router::NavigateOptions::default());
        });
    });

    let register = move |user: User| {
        busy.set(true);
        message.set(String::new());
        leptos::task::spawn_local(async move {
            match api::create::<User, _>(&user).await {
                Ok(()) => {
                    log::info!("registered user {}", user.document_number);
                    message.try_set("Usuario registrado correctamente".to_owned());
                    done.try_set(true);
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    message.try_set(e.user_message());
                }
            }
            busy.try_set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        let phone = form.with(|f| f.phone.trim().to_owned());
        if verified_phone.get().as_deref() != Some(phone.as_str()) {
            verifying.set(true);
            return;
        }
        match form.with(CollaboratorForm::validate) {
            Ok(user) => register(user),
            Err(e) => message.set(e.to_string()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Registro"</h1>
                <form class="login-form" on:submit=on_submit>
                    <CollaboratorFields form=form/>
                    <button class="login-button" type="submit" disabled=move || busy.get() || done.get()>
                        "Registrarse"
                    </button>
                </form>
                <A href=LOGIN_ROUTE attr:class="login-link">"¿Ya tienes cuenta? Inicia sesión"</A>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
            </div>
            <Show when=move || verifying.get()>
                <PhoneVerificationDialog
                    phone=form.with_untracked(|f| f.phone.clone())
                    on_verified=Callback::new(move |phone: String| {
                        form.update(|f| f.phone.clone_from(&phone));
                        verified_phone.set(Some(phone));
                        verifying.set(false);
                    })
                    on_close=Callback::new(move |()| verifying.set(false))
                />
            </Show>
        </div>
    }
}
