//! Family and emergency contacts of patients.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::contact::ContactModal;
use crate::net::api;
use crate::net::types::Contacto;
use crate::state::listing::{ListState, ModalState};

fn cells(c: &Contacto) -> Vec<String> {
    vec![
        c.nombre_completo.clone(),
        c.documento.clone(),
        c.telefono.clone(),
        c.parentesco.clone(),
        c.paciente_nombre.clone().unwrap_or_default(),
    ]
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<Contacto>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Contacto>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Contactos" placeholder="Buscar por nombre o paciente" new_label="Nuevo contacto"/>
            <EntityTable list=list headers=&["Nombre", "Documento", "Teléfono", "Parentesco", "Paciente"] cells=cells/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <ContactModal initial=None on_close=on_close on_saved=on_saved/> }),
                ModalState::Editing(c) | ModalState::Viewing(c) => {
                    Some(view! { <ContactModal initial=Some(c) on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar este contacto?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Contacto>, reload))
            />
        </section>
    }
}
