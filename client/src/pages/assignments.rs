//! Manager-to-tambo assignments.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::assignment::AssignmentModal;
use crate::net::api;
use crate::net::types::Asignacion;
use crate::state::listing::{ListState, ModalState};
use crate::util::clock::display_date;

fn cells(a: &Asignacion) -> Vec<String> {
    vec![
        a.gestor_nombre.clone().unwrap_or_else(|| format!("#{}", a.gestor_id)),
        a.tambo_nombre.clone().unwrap_or_else(|| format!("#{}", a.tambo_id)),
        format!("{} / {} / {}", a.departamento, a.provincia, a.distrito),
        display_date(&a.fecha_asignacion),
        if a.estado { "Activa" } else { "Inactiva" }.to_owned(),
    ]
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<Asignacion>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Asignacion>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Asignaciones" placeholder="Buscar por gestor, tambo o ubicación" new_label="Nueva asignación"/>
            <EntityTable list=list headers=&["Gestor", "Tambo", "Ubicación", "Fecha", "Estado"] cells=cells/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <AssignmentModal initial=None on_close=on_close on_saved=on_saved/> }),
                ModalState::Editing(a) | ModalState::Viewing(a) => {
                    Some(view! { <AssignmentModal initial=Some(a) on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar esta asignación?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Asignacion>, reload))
            />
        </section>
    }
}
