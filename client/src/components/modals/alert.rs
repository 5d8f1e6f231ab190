//! Patient alert dialog.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, enum_select, id_select, text_area, text_field};
use crate::components::channel_checkboxes::ChannelCheckboxes;
use crate::components::dialog::ModalFrame;
use crate::net::api;
use crate::net::types::{Alerta, AlertaCategoria, AlertaTipo, Paciente, PeriodicidadAlerta, PrioridadAlerta};
use crate::state::channels::Channel;
use crate::state::forms::alert::AlertForm;
use crate::state::session::SessionState;
use crate::util::clock;

/// Create or edit an alert. The author is the signed-in user.
#[component]
pub fn AlertModal(initial: Option<Alerta>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(initial.as_ref().map_or_else(|| AlertForm::new(&clock::today()), AlertForm::from_alert));
    let submit = Submission::new();
    let patients = RwSignal::new(Vec::<(i64, String)>::new());
    let feedback = submit.feedback();

    leptos::task::spawn_local(async move {
        match api::list::<Paciente>().await {
            Ok(list) => {
                form.try_update(|f| f.autoselect_patient(&list));
                patients.try_set(list.iter().map(|p| (p.id, p.display_name())).collect());
            }
            Err(e) => feedback.api_error("load patients", &e),
        }
    });

    let title = if form.with_untracked(AlertForm::is_edit) { "Editar alerta" } else { "Nueva alerta" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let creator = session.with(SessionState::user_id);
        match form.with(|f| f.validate(creator)) {
            Ok(alerta) => match alerta.id {
                Some(id) => submit.send(
                    async move { api::update::<Alerta, _>(id, &alerta).await },
                    "Alerta actualizada",
                    on_saved,
                ),
                None => submit.send(
                    async move { api::create::<Alerta, _>(&alerta).await },
                    "Alerta creada",
                    on_saved,
                ),
            },
            Err(e) => submit.reject(&e),
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                {id_select("Paciente", patients.into(), form, |f| f.paciente_id, |f, v| f.paciente_id = v)}
                {text_area("Mensaje", form, |f| f.mensaje.clone(), |f, v| f.mensaje = v)}
                <div class="form-grid">
                    {enum_select("Tipo", AlertaTipo::ALL, AlertaTipo::label, form, |f| f.tipo, |f, v| f.tipo = v)}
                    {enum_select("Categoría", AlertaCategoria::ALL, AlertaCategoria::label, form, |f| f.categoria, |f, v| f.categoria = v)}
                    {enum_select("Prioridad", PrioridadAlerta::ALL, PrioridadAlerta::label, form, |f| f.prioridad, |f, v| f.prioridad = v)}
                    {enum_select(
                        "Periodicidad",
                        PeriodicidadAlerta::ALL,
                        PeriodicidadAlerta::label,
                        form,
                        |f| f.periodicidad,
                        |f, v| f.periodicidad = v,
                    )}
                    {text_field("Fecha de la alerta", "date", form, |f| f.fecha_alerta.clone(), |f, v| f.fecha_alerta = v)}
                    <Show when=move || form.with(AlertForm::shows_end_date)>
                        {text_field(
                            "Repetir hasta",
                            "date",
                            form,
                            |f| f.fecha_fin_repeticion.clone(),
                            |f, v| f.fecha_fin_repeticion = v,
                        )}
                    </Show>
                </div>
                <ChannelCheckboxes
                    value=Signal::derive(move || form.with(|f| f.canal_envio))
                    on_toggle=Callback::new(move |channel: Channel| form.update(|f| f.toggle_channel(channel)))
                    disabled=Signal::stored(false)
                />
                <FormErrorLine error=submit.error/>
                <DialogActions submission=submit blocked=Signal::stored(false) on_close=on_close/>
            </form>
        </ModalFrame>
    }
}
