//! Tambo (service station) management.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::tambo::TamboModal;
use crate::net::api;
use crate::net::types::Tambo;
use crate::state::listing::{ListState, ModalState};

fn cells(tambo: &Tambo) -> Vec<String> {
    vec![
        tambo.name.clone(),
        tambo.code.clone(),
        format!("{} / {} / {}", tambo.departamento, tambo.provincia, tambo.distrito),
        tambo.tipo.label().to_owned(),
        if tambo.estado { "Activo" } else { "Inactivo" }.to_owned(),
    ]
}

#[component]
pub fn TambosPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<Tambo>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Tambo>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Lista de tambos" placeholder="Ingrese el nombre o código" new_label="Nuevo tambo"/>
            <EntityTable list=list headers=&["Nombre", "Código", "Ubicación", "Tipo", "Estado"] cells=cells/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <TamboModal initial=None on_close=on_close on_saved=on_saved/> }),
                ModalState::Editing(tambo) | ModalState::Viewing(tambo) => {
                    Some(view! { <TamboModal initial=Some(tambo) on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar este tambo?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Tambo>, reload))
            />
        </section>
    }
}
