//! Emergency/family contact dialog.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, id_select, str_select, text_field};
use crate::components::dialog::ModalFrame;
use crate::net::api;
use crate::net::types::Contacto;
use crate::state::forms::contact::{ContactForm, DOCUMENT_TYPES};

const GENDERS: [&str; 2] = ["Masculino", "Femenino"];
const RELATIONSHIPS: [&str; 4] = ["Madre", "Padre", "Tutor", "Hermano"];
const NOTIFICATIONS: [&str; 4] = ["SMS", "Correo", "WhatsApp", "NotificacionApp"];

#[component]
pub fn ContactModal(initial: Option<Contacto>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(initial.as_ref().map(ContactForm::from_contact).unwrap_or_default());
    let submit = Submission::new();
    let patients = RwSignal::new(Vec::<(i64, String)>::new());
    let feedback = submit.feedback();
    let current = initial.as_ref().map(|c| (c.paciente_id, c.paciente_nombre.clone()));

    leptos::task::spawn_local(async move {
        match api::contact_patient_options().await {
            Ok(options) => {
                let mut options: Vec<(i64, String)> = options.into_iter().map(|o| (o.id, o.nombre)).collect();
                if let Some((id, name)) = current
                    && id > 0
                    && !options.iter().any(|(o, _)| *o == id)
                {
                    options.insert(0, (id, name.unwrap_or_else(|| format!("#{id}"))));
                }
                patients.try_set(options);
            }
            Err(e) => feedback.api_error("load contact patients", &e),
        }
    });

    // DNI autofill runs when the document field loses focus.
    let on_document_blur = move |_| {
        let Some(dni) = form.with(ContactForm::dni_lookup_target) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::lookup_dni(&dni).await {
                Ok(found) => {
                    form.try_update(|f| f.apply_dni(&dni, found));
                }
                Err(e) => log::warn!("dni lookup for {dni} failed: {e}"),
            }
        });
    };

    let title = if form.with_untracked(ContactForm::is_edit) { "Editar contacto" } else { "Nuevo contacto" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(ContactForm::validate) {
            Ok(contact) if contact.id > 0 => {
                let id = contact.id;
                submit.send(
                    async move { api::update::<Contacto, _>(id, &contact).await },
                    "Contacto actualizado",
                    on_saved,
                );
            }
            Ok(contact) => submit.send(
                async move { api::create::<Contacto, _>(&contact).await },
                "Contacto creado",
                on_saved,
            ),
            Err(e) => submit.reject(&e),
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                {id_select("Paciente", patients.into(), form, |f| f.record.paciente_id, |f, v| f.record.paciente_id = v)}
                <div class="form-grid">
                    {str_select(
                        "Tipo de documento",
                        &DOCUMENT_TYPES,
                        form,
                        |f| f.record.tipo_documento.clone(),
                        |f, v| f.record.tipo_documento = v,
                    )}
                    <label class="field">
                        <span class="field__label">"Documento"</span>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.record.documento.clone())
                            on:input=move |ev| form.update(|f| f.record.documento = event_target_value(&ev))
                            on:blur=on_document_blur
                        />
                    </label>
                    {text_field("Nombres", "text", form, |f| f.record.nombre_completo.clone(), |f, v| f.record.nombre_completo = v)}
                    {text_field("Apellido paterno", "text", form, |f| f.record.apellido_paterno.clone(), |f, v| f.record.apellido_paterno = v)}
                    {text_field("Apellido materno", "text", form, |f| f.record.apellido_materno.clone(), |f, v| f.record.apellido_materno = v)}
                    {text_field("Teléfono", "tel", form, |f| f.record.telefono.clone(), |f, v| f.record.telefono = v)}
                    {text_field("Fecha de nacimiento", "date", form, |f| f.record.fecha_nacimiento.clone(), |f, v| f.record.fecha_nacimiento = v)}
                    {str_select("Género", &GENDERS, form, |f| f.record.genero.clone(), |f, v| f.record.genero = v)}
                    {text_field("Dirección", "text", form, |f| f.record.direccion.clone(), |f, v| f.record.direccion = v)}
                    {str_select("Parentesco", &RELATIONSHIPS, form, |f| f.record.parentesco.clone(), |f, v| f.record.parentesco = v)}
                    {str_select(
                        "Notificaciones",
                        &NOTIFICATIONS,
                        form,
                        |f| f.record.notificaciones.clone(),
                        |f, v| f.record.notificaciones = v,
                    )}
                </div>
                <FormErrorLine error=submit.error/>
                <DialogActions submission=submit blocked=Signal::stored(false) on_close=on_close/>
            </form>
        </ModalFrame>
    }
}
