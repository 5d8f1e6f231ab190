//! Patient registry.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::patient::PatientModal;
use crate::net::api;
use crate::net::types::Paciente;
use crate::state::listing::{ListState, ModalState};

fn cells(p: &Paciente) -> Vec<String> {
    vec![p.display_name(), if p.tiene_anemia { "Sí" } else { "No" }.to_owned()]
}

#[component]
pub fn PatientsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<Paciente>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Paciente>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Lista de pacientes" placeholder="Ingrese el nombre" new_label="Nuevo paciente"/>
            <EntityTable list=list headers=&["Paciente", "Anemia"] cells=cells/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <PatientModal initial=None on_close=on_close on_saved=on_saved/> }),
                ModalState::Editing(p) | ModalState::Viewing(p) => {
                    Some(view! { <PatientModal initial=Some(p) on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar este paciente?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Paciente>, reload))
            />
        </section>
    }
}
