//! Tambo (service station) dialog.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, check_field, enum_select, text_field};
use crate::components::dialog::ModalFrame;
use crate::components::location_selector::{LocationSelectorFields, load_departments, run_lookups};
use crate::net::api;
use crate::net::types::{Tambo, TamboTipo, User};
use crate::state::forms::tambo::{RepresentativeOption, TamboForm, representative_options};

/// Create or edit a tambo. Editing restores the stored location and reloads
/// its option lists without regenerating the code.
#[component]
pub fn TamboModal(initial: Option<Tambo>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let (seed, requests) = initial.as_ref().map(TamboForm::from_tambo).unwrap_or_default();
    let form = RwSignal::new(seed);
    let submit = Submission::new();
    let representatives = RwSignal::new(Vec::<RepresentativeOption>::new());
    let feedback = submit.feedback();

    load_departments(form);
    run_lookups(form, requests);
    leptos::task::spawn_local(async move {
        match api::list::<User>().await {
            Ok(users) => {
                representatives.try_set(representative_options(&users));
            }
            Err(e) => feedback.api_error("load representatives", &e),
        }
    });

    let title = if form.with_untracked(TamboForm::is_edit) { "Editar tambo" } else { "Nuevo tambo" };

    let on_representative = move |ev: leptos::ev::Event| {
        let dni = event_target_value(&ev);
        representatives.with(|options| form.update(|f| f.select_representative(&dni, options)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(TamboForm::validate) {
            Ok(tambo) => match tambo.id {
                Some(id) => submit.send(async move { api::update::<Tambo, _>(id, &tambo).await }, "Tambo actualizado", on_saved),
                None => submit.send(async move { api::create::<Tambo, _>(&tambo).await }, "Tambo creado", on_saved),
            },
            Err(e) => submit.reject(&e),
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <div class="form-grid">
                    {text_field("Nombre", "text", form, |f| f.name.clone(), |f, v| f.name = v)}
                    {enum_select("Tipo", &TamboTipo::ALL, TamboTipo::label, form, |f| f.tipo, |f, v| f.tipo = v)}
                </div>
                <LocationSelectorFields form=form disabled=Signal::derive(move || submit.saving.get())/>
                <div class="form-grid">
                    {text_field("Dirección", "text", form, |f| f.direccion.clone(), |f, v| f.direccion = v)}
                    {text_field("Referencia", "text", form, |f| f.referencia.clone(), |f, v| f.referencia = v)}
                    {text_field("Horario de atención", "text", form, |f| f.horario_atencion.clone(), |f, v| f.horario_atencion = v)}
                    <label class="field">
                        <span class="field__label">"DNI del representante"</span>
                        <select on:change=on_representative>
                            <option value="">"Seleccione"</option>
                            {move || {
                                let selected = form.with(|f| f.documento_representante.clone());
                                representatives
                                    .get()
                                    .into_iter()
                                    .map(|o| {
                                        let is_selected = o.dni == selected;
                                        let text = format!("{} - {}", o.dni, o.full_name);
                                        view! { <option value=o.dni selected=is_selected>{text}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Representante"</span>
                        <input type="text" readonly=true prop:value=move || form.with(|f| f.representante.clone())/>
                    </label>
                    {text_field("Teléfono", "tel", form, |f| f.telefono.clone(), |f, v| f.telefono = v)}
                    {check_field("Activo", form, |f| f.estado, |f, v| f.estado = v)}
                </div>
                <FormErrorLine error=submit.error/>
                <DialogActions
                    submission=submit
                    blocked=Signal::derive(move || form.with(TamboForm::submit_blocked))
                    on_close=on_close
                />
            </form>
        </ModalFrame>
    }
}
