//! Manager-to-tambo assignment dialog.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, check_field, id_select, text_field};
use crate::components::dialog::ModalFrame;
use crate::net::api;
use crate::net::types::{Asignacion, Tambo};
use crate::state::forms::assignment::AssignmentForm;
use crate::util::clock;

fn with_current(mut options: Vec<(i64, String)>, id: i64, name: Option<&String>) -> Vec<(i64, String)> {
    // The current pair is no longer "available" once assigned.
    if id > 0 && !options.iter().any(|(o, _)| *o == id) {
        options.insert(0, (id, name.cloned().unwrap_or_else(|| format!("#{id}"))));
    }
    options
}

/// Create or edit an assignment. The location mirrors the chosen tambo.
#[component]
pub fn AssignmentModal(initial: Option<Asignacion>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(initial.as_ref().map(AssignmentForm::from_assignment).unwrap_or_default());
    let submit = Submission::new();
    let managers = RwSignal::new(Vec::<(i64, String)>::new());
    let tambos = RwSignal::new(Vec::<Tambo>::new());
    let feedback = submit.feedback();

    let current_manager = initial.as_ref().map(|a| (a.gestor_id, a.gestor_nombre.clone()));
    let current_tambo = initial.as_ref().map(|a| (a.tambo_id, a.tambo_nombre.clone()));

    leptos::task::spawn_local(async move {
        match api::available_managers().await {
            Ok(users) => {
                let options = users.iter().map(|u| (u.id, u.full_name())).collect();
                let options = match &current_manager {
                    Some((id, name)) => with_current(options, *id, name.as_ref()),
                    None => options,
                };
                managers.try_set(options);
            }
            Err(e) => feedback.api_error("load available managers", &e),
        }
    });
    leptos::task::spawn_local(async move {
        match api::available_stations().await {
            Ok(list) => {
                form.try_update(|f| f.sync_location(&list));
                tambos.try_set(list);
            }
            Err(e) => feedback.api_error("load available tambos", &e),
        }
    });

    let tambo_options = Signal::derive(move || {
        let options = tambos.with(|list| {
            list.iter().filter_map(|t| t.id.map(|id| (id, format!("{} ({})", t.name, t.code)))).collect()
        });
        match &current_tambo {
            Some((id, name)) => with_current(options, *id, name.as_ref()),
            None => options,
        }
    });

    let title = if form.with_untracked(AssignmentForm::is_edit) { "Editar asignación" } else { "Nueva asignación" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = tambos.with(|list| form.with(|f| f.validate(list, &clock::now_iso())));
        match payload {
            Ok(payload) => match payload.id {
                Some(id) => submit.send(
                    async move { api::update::<Asignacion, _>(id, &payload).await },
                    "Asignación actualizada",
                    on_saved,
                ),
                None => submit.send(
                    async move { api::create::<Asignacion, _>(&payload).await },
                    "Asignación creada",
                    on_saved,
                ),
            },
            Err(e) => submit.reject(&e),
        }
    };

    let read_only = move |label: &'static str, read: fn(&AssignmentForm) -> String| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input type="text" readonly=true prop:value=move || form.with(read)/>
            </label>
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                {id_select("Gestor", managers.into(), form, |f| f.gestor_id, |f, v| f.gestor_id = v)}
                <label class="field">
                    <span class="field__label">"Tambo"</span>
                    <select on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<i64>().unwrap_or_default();
                        tambos.with(|list| form.update(|f| f.select_tambo(id, list)));
                    }>
                        <option value="0">"Seleccione"</option>
                        {move || {
                            let selected = form.with(|f| f.tambo_id);
                            tambo_options
                                .get()
                                .into_iter()
                                .map(|(id, text)| view! { <option value=id.to_string() selected=id == selected>{text}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <div class="form-grid">
                    {read_only("Departamento", |f| f.departamento.clone())}
                    {read_only("Provincia", |f| f.provincia.clone())}
                    {read_only("Distrito", |f| f.distrito.clone())}
                </div>
                {text_field("Centro poblado", "text", form, |f| f.centro_poblado.clone(), |f, v| f.centro_poblado = v)}
                {check_field("Activo", form, |f| f.estado, |f, v| f.estado = v)}
                <FormErrorLine error=submit.error/>
                <DialogActions submission=submit blocked=Signal::stored(false) on_close=on_close/>
            </form>
        </ModalFrame>
    }
}
