//! Comunicados (announcements) management.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, EntityTable, ListToolbar, close_and_reload, confirm_delete, load_list, modal_state};
use crate::components::modals::announcement::AnnouncementModal;
use crate::net::api;
use crate::net::types::Comunicado;
use crate::state::listing::{ListState, ModalState};
use crate::util::clock::display_date;

fn cells(c: &Comunicado) -> Vec<String> {
    vec![
        c.titulo.clone(),
        c.destinatario.label().to_owned(),
        format!("{} - {}", display_date(&c.fecha_inicio), display_date(&c.fecha_fin)),
        c.canal_envio.describe(),
    ]
}

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<Comunicado>::default());
    let reload = Callback::new(move |()| load_list(list, feedback, api::list::<Comunicado>));
    Effect::new(move || reload.run(()));

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));
    let on_saved = close_and_reload(list, reload);

    view! {
        <section class="list-page">
            <ListToolbar list=list title="Comunicados" placeholder="Buscar por título" new_label="Nuevo comunicado"/>
            <EntityTable list=list headers=&["Título", "Destinatario", "Vigencia", "Canales"] cells=cells viewable=true/>
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Creating => Some(view! { <AnnouncementModal initial=None on_close=on_close on_saved=on_saved/> }.into_any()),
                ModalState::Editing(c) => {
                    Some(view! { <AnnouncementModal initial=Some(c) on_close=on_close on_saved=on_saved/> }.into_any())
                }
                ModalState::Viewing(c) => {
                    Some(
                        view! { <AnnouncementModal initial=Some(c) read_only=true on_close=on_close on_saved=on_saved/> }
                            .into_any(),
                    )
                }
            }}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar este comunicado?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete::<Comunicado>, reload))
            />
        </section>
    }
}
