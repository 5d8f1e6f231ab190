//! Collaborator (user account) dialog and the field set it shares with the
//! public registration page.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, enum_select, text_field};
use crate::components::dialog::ModalFrame;
use crate::components::modals::phone_verification::PhoneVerificationDialog;
use crate::net::api;
use crate::net::types::{Role, User};
use crate::state::forms::collaborator::CollaboratorForm;

/// Look the DNI up and fill the name fields. A miss leaves the form as is.
pub fn autofill_dni(form: RwSignal<CollaboratorForm>, dni: String) {
    leptos::task::spawn_local(async move {
        match api::lookup_dni(&dni).await {
            Ok(found) => {
                form.try_update(|f| f.apply_dni(&dni, found));
            }
            Err(e) => log::warn!("dni lookup for {dni} failed: {e}"),
        }
    });
}

/// Every user field, DNI first so the name fields can be autofilled.
#[component]
pub fn CollaboratorFields(form: RwSignal<CollaboratorForm>) -> impl IntoView {
    let on_document = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let mut target = None;
        form.update(|f| target = f.set_document(&value));
        if let Some(dni) = target {
            autofill_dni(form, dni);
        }
    };

    view! {
        <div class="form-grid" class:form-grid--autofilled=move || form.with(CollaboratorForm::is_autofilled)>
            <label class="field">
                <span class="field__label">"DNI"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="8"
                    prop:value=move || form.with(|f| f.document_number.clone())
                    on:input=on_document
                />
            </label>
            {text_field("Nombres", "text", form, |f| f.first_name.clone(), |f, v| f.first_name = v)}
            {text_field("Apellido paterno", "text", form, |f| f.last_name_p.clone(), |f, v| f.last_name_p = v)}
            {text_field("Apellido materno", "text", form, |f| f.last_name_m.clone(), |f, v| f.last_name_m = v)}
            {text_field("Teléfono", "tel", form, |f| f.phone.clone(), |f, v| f.phone = v)}
            {text_field("Correo", "email", form, |f| f.email.clone(), |f, v| f.email = v)}
            {text_field("Contraseña", "password", form, |f| f.password.clone(), |f, v| f.password = v)}
            {enum_select("Rol", &Role::ALL, Role::label, form, |f| f.role, |f, v| f.role = v)}
            {text_field("Fecha de nacimiento", "date", form, |f| f.birth_date.clone(), |f, v| f.birth_date = v)}
            {text_field("Género", "text", form, |f| f.gender.clone(), |f, v| f.gender = v)}
            {text_field("Dirección", "text", form, |f| f.address.clone(), |f, v| f.address = v)}
        </div>
    }
}

/// Create or edit a collaborator.
#[component]
pub fn CollaboratorModal(initial: Option<User>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(initial.as_ref().map_or_else(|| CollaboratorForm::new(Role::Gestor), CollaboratorForm::from_user));
    let submit = Submission::new();
    let verifying = RwSignal::new(false);

    let title = if form.with_untracked(CollaboratorForm::is_edit) { "Editar colaborador" } else { "Nuevo colaborador" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(CollaboratorForm::validate) {
            Ok(user) => match form.with(|f| f.id) {
                Some(id) => submit.send(async move { api::update::<User, _>(id, &user).await }, "Colaborador actualizado", on_saved),
                None => submit.send(async move { api::create::<User, _>(&user).await }, "Colaborador creado", on_saved),
            },
            Err(e) => submit.reject(&e),
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <CollaboratorFields form=form/>
                <button type="button" class="btn btn--link" on:click=move |_| verifying.set(true)>
                    "Verificar teléfono"
                </button>
                <FormErrorLine error=submit.error/>
                <DialogActions submission=submit blocked=Signal::stored(false) on_close=on_close/>
            </form>
            <Show when=move || verifying.get()>
                <PhoneVerificationDialog
                    phone=form.with_untracked(|f| f.phone.clone())
                    on_verified=Callback::new(move |phone: String| {
                        form.update(|f| f.phone = phone);
                        verifying.set(false);
                    })
                    on_close=Callback::new(move |()| verifying.set(false))
                />
            </Show>
        </ModalFrame>
    }
}
