//! Patient dialog: links a user account and records the anemia flag.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, check_field, id_select};
use crate::components::dialog::ModalFrame;
use crate::net::api;
use crate::net::types::Paciente;
use crate::state::forms::patient::PatientForm;

#[component]
pub fn PatientModal(initial: Option<Paciente>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(initial.as_ref().map(PatientForm::from_patient).unwrap_or_default());
    let submit = Submission::new();
    let users = RwSignal::new(Vec::<(i64, String)>::new());
    let feedback = submit.feedback();
    let current = initial.as_ref().map(|p| (p.user_id, p.display_name()));

    leptos::task::spawn_local(async move {
        match api::patient_user_options().await {
            Ok(options) => {
                let mut options: Vec<(i64, String)> = options.into_iter().map(|o| (o.id, o.nombre)).collect();
                if let Some((id, name)) = current
                    && !options.iter().any(|(o, _)| *o == id)
                {
                    options.insert(0, (id, name));
                }
                users.try_set(options);
            }
            Err(e) => feedback.api_error("load patient users", &e),
        }
    });

    let title = if form.with_untracked(PatientForm::is_edit) { "Editar paciente" } else { "Nuevo paciente" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(PatientForm::validate) {
            Ok(payload) => match payload.id {
                Some(id) => submit.send(
                    async move { api::update::<Paciente, _>(id, &payload).await },
                    "Paciente actualizado",
                    on_saved,
                ),
                None => submit.send(
                    async move { api::create::<Paciente, _>(&payload).await },
                    "Paciente registrado",
                    on_saved,
                ),
            },
            Err(e) => submit.reject(&e),
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                {id_select("Usuario", users.into(), form, |f| f.user_id, |f, v| f.user_id = v)}
                {check_field("Tiene anemia", form, |f| f.tiene_anemia, |f, v| f.tiene_anemia = v)}
                <FormErrorLine error=submit.error/>
                <DialogActions submission=submit blocked=Signal::stored(false) on_close=on_close/>
            </form>
        </ModalFrame>
    }
}
