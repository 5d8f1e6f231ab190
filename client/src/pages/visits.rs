//! Home visits, with the offline queue and its manual synchronization.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::visit::VisitModal;
use crate::net::api;
use crate::net::types::Visita;
use crate::state::listing::{ListState, ModalState};
use crate::state::visit_queue::{QueuedSend, SyncReport, VisitQueue, sync_batch};
use crate::util::browser;
use crate::util::clock::display_date;

fn cells(v: &Visita) -> Vec<String> {
    vec![
        v.paciente_nombre(),
        v.gestor_nombre(),
        display_date(&v.fecha_visita),
        v.observacion.clone(),
        if v.ubicacion_confirmada { "Confirmada" } else { "Pendiente" }.to_owned(),
    ]
}

fn sync_message(report: SyncReport) -> String {
    match (report.sent, report.failed) {
        (0, 0) => "No hay visitas pendientes".to_owned(),
        (sent, 0) => format!("{sent} visita(s) sincronizada(s)"),
        (sent, failed) => format!("{sent} visita(s) sincronizada(s), {failed} pendiente(s)"),
    }
}

#[component]
pub fn VisitsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<Visita>::default());
    let queue = RwSignal::new(VisitQueue::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Visita>));
    Effect::new(move || {
        queue.set(VisitQueue::load());
        reload.run(());
    });

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    let syncing = RwSignal::new(false);
    let on_sync = move |_| {
        if !browser::is_online() {
            feedback.warn("Sin conexión a internet");
            return;
        }
        let batch = queue.with_untracked(|q| q.items().to_vec());
        syncing.set(true);
        leptos::task::spawn_local(async move {
            let outcome = sync_batch(batch, |send| async move {
                match send {
                    QueuedSend::Create(v) => api::create::<Visita, _>(&v).await,
                    QueuedSend::Update(id, v) => api::update::<Visita, _>(id, &v).await,
                }
            })
            .await;
            queue.try_update(|q| q.drop_sent(&outcome.sent));
            syncing.try_set(false);
            let report = outcome.report;
            log::info!("offline sync: {} sent, {} failed", report.sent, report.failed);
            if report.failed > 0 {
                feedback.warn(sync_message(report));
            } else {
                feedback.success(sync_message(report));
            }
            if report.sent > 0 {
                reload.run(());
            }
        });
    };

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Visitas domiciliarias" placeholder="Buscar por observación" new_label="Nueva visita"/>
            <div class="list-page__extra">
                <span class="badge">{move || format!("Pendientes sin conexión: {}", queue.with(VisitQueue::len))}</span>
                <button
                    class="btn"
                    disabled=move || syncing.get() || queue.with(VisitQueue::is_empty)
                    on:click=on_sync
                >
                    {move || if syncing.get() { "Sincronizando..." } else { "Sincronizar" }}
                </button>
            </div>
            <EntityTable list=list headers=&["Paciente", "Gestor", "Fecha", "Observación", "Ubicación"] cells=cells/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => {
                    Some(view! { <VisitModal initial=None queue=queue on_close=on_close on_saved=on_saved/> })
                }
                ModalState::Editing(v) | ModalState::Viewing(v) => {
                    Some(view! { <VisitModal initial=Some(v) queue=queue on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar esta visita?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Visita>, reload))
            />
        </section>
    }
}
