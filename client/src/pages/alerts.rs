//! Patient alerts, plus a button that sends a test push to this browser.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::alert::AlertModal;
use crate::components::push_listener::PushListener;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Alerta, RuntimeConfig};
use crate::state::listing::{ListState, ModalState};
use crate::state::notifications::Permission;
use crate::state::session::SessionState;
use crate::util::clock::display_date;
use crate::util::push::{self, PushError};

#[derive(Debug, thiserror::Error)]
enum TestPushError {
    #[error("debe permitir las notificaciones en el navegador")]
    PermissionDenied,
    #[error("notificaciones push no configuradas")]
    NotConfigured,
    #[error(transparent)]
    Push(#[from] PushError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn cells(a: &Alerta) -> Vec<String> {
    vec![
        format!("#{}", a.paciente_id),
        a.tipo.label().to_owned(),
        a.categoria.label().to_owned(),
        a.prioridad.map(|p| p.label().to_owned()).unwrap_or_default(),
        display_date(&a.fecha_alerta),
        a.canal_envio.describe(),
    ]
}

/// Register this browser's token for `user_id` and ask the backend to push
/// a test message to it.
async fn send_test_push(user_id: i64, config: Option<RuntimeConfig>) -> Result<String, TestPushError> {
    let config = config.filter(RuntimeConfig::push_enabled).ok_or(TestPushError::NotConfigured)?;
    if push::request_permission().await != Permission::Granted {
        return Err(TestPushError::PermissionDenied);
    }
    let token = push::device_token(&config.vapid_key).await?;
    api::save_firebase_token(user_id, &token).await?;
    log::info!("device token registered for user {user_id}");
    Ok(api::send_test_push(&token).await?)
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let session = expect_context::<RwSignal<SessionState>>();
    let runtime = expect_context::<RwSignal<Option<RuntimeConfig>>>();
    let list = RwSignal::new(ListState::<Alerta>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Alerta>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    let testing = RwSignal::new(false);
    let on_test = move |_| {
        let Some(user_id) = session.with(SessionState::user_id) else {
            feedback.warn("Debe iniciar sesión");
            return;
        };
        let config = runtime.get();
        testing.set(true);
        leptos::task::spawn_local(async move {
            let result = send_test_push(user_id, config).await;
            testing.try_set(false);
            match result {
                Ok(message) if message.is_empty() => feedback.success("Notificación de prueba enviada"),
                Ok(message) => feedback.success(message),
                Err(TestPushError::Api(e)) => feedback.api_error("test push", &e),
                Err(e) => {
                    log::warn!("test push failed: {e}");
                    feedback.warn(e.to_string());
                }
            }
        });
    };

    view! {
        <section class="list-page">
            <PushListener owner="alertas" silent=true on_message=reload/>
            <ListToolbar list=list title="Alertas" placeholder="Buscar por mensaje" new_label="Nueva alerta"/>
            <div class="list-page__extra">
                <button class="btn" disabled=move || testing.get() on:click=on_test>
                    {move || if testing.get() { "Enviando..." } else { "Probar notificación" }}
                </button>
            </div>
            <EntityTable
                list=list
                headers=&["Paciente", "Tipo", "Categoría", "Prioridad", "Fecha", "Canales"]
                cells=cells
            />
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <AlertModal initial=None on_close=on_close on_saved=on_saved/> }),
                ModalState::Editing(a) | ModalState::Viewing(a) => {
                    Some(view! { <AlertModal initial=Some(a) on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar esta alerta?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Alerta>, reload))
            />
        </section>
    }
}
