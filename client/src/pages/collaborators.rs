//! Collaborator (user account) management.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::collaborator::CollaboratorModal;
use crate::net::api;
use crate::net::types::User;
use crate::state::listing::{ListState, ModalState};

fn cells(user: &User) -> Vec<String> {
    vec![user.full_name(), user.document_number.clone(), user.phone.clone(), user.role.label().to_owned()]
}

#[component]
pub fn CollaboratorsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<User>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<User>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Lista de colaboradores" placeholder="Ingrese el nombre" new_label="Nuevo colaborador"/>
            <EntityTable list=list headers=&["Nombre completo", "DNI", "Teléfono", "Rol"] cells=cells/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <CollaboratorModal initial=None on_close=on_close on_saved=on_saved/> }),
                ModalState::Editing(user) | ModalState::Viewing(user) => {
                    Some(view! { <CollaboratorModal initial=Some(user) on_close=on_close on_saved=on_saved/> })
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar este colaborador?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<User>, reload))
            />
        </section>
    }
}
