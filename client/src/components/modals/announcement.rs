//! Announcement (comunicado) dialog with image/PDF attachments.
//!
//! Attachments upload as soon as a file is picked; the returned URL is stored
//! in the form and previewed. Saving is refused while an upload is running.
//! The same dialog renders read-only for the "view" action.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, check_field, enum_select, text_area, text_field};
use crate::components::channel_checkboxes::ChannelCheckboxes;
use crate::components::dialog::ModalFrame;
use crate::components::feedback::Feedback;
use crate::net::api::{self, media_url};
use crate::net::types::{Comunicado, Destinatario, TipoContenido};
use crate::state::channels::Channel;
use crate::state::forms::announcement::{AnnouncementForm, AttachmentKind};
use crate::util::browser;

fn upload(form: RwSignal<AnnouncementForm>, feedback: Feedback, kind: AttachmentKind, ev: &leptos::ev::Event) {
    #[cfg(feature = "hydrate")]
    {
        let input = event_target::<web_sys::HtmlInputElement>(ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        form.update(|f| f.begin_upload(kind));
        leptos::task::spawn_local(async move {
            match api::upload_attachment(file).await {
                Ok(url) => {
                    form.try_update(|f| f.finish_upload(kind, Some(url)));
                }
                Err(e) => {
                    form.try_update(|f| f.finish_upload(kind, None));
                    feedback.api_error("attachment upload", &e);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, feedback, kind, ev);
    }
}

#[component]
fn AttachmentField(form: RwSignal<AnnouncementForm>, kind: AttachmentKind) -> impl IntoView {
    let feedback = Feedback::expect();
    let label = match kind {
        AttachmentKind::Image => "Imagen",
        AttachmentKind::Pdf => "Documento PDF",
    };
    let current = move || {
        form.with(|f| match kind {
            AttachmentKind::Image => f.imagen_url.clone(),
            AttachmentKind::Pdf => f.url_pdf.clone(),
        })
    };
    let preview = move || {
        let url = current();
        if url.is_empty() {
            return None;
        }
        let src = media_url(&url);
        Some(match kind {
            AttachmentKind::Image => view! { <img class="attachment__image" src=src alt="Imagen del comunicado"/> }.into_any(),
            AttachmentKind::Pdf => view! {
                <button type="button" class="btn btn--link" on:click=move |_| browser::open_in_new_tab(&src)>
                    "Ver PDF"
                </button>
            }
            .into_any(),
        })
    };

    view! {
        <div class="attachment">
            <span class="field__label">{label}</span>
            <input type="file" accept=kind.accept() on:change=move |ev| upload(form, feedback, kind, &ev)/>
            <Show when=move || form.with(|f| f.uploading == Some(kind))>
                <span class="attachment__status">"Subiendo..."</span>
            </Show>
            {preview}
            <Show when=move || !current().is_empty()>
                <button type="button" class="btn btn--link" on:click=move |_| form.update(|f| f.clear_attachment(kind))>
                    "Quitar"
                </button>
            </Show>
        </div>
    }
}

/// Create, edit or (with `read_only`) view an announcement.
#[component]
pub fn AnnouncementModal(
    initial: Option<Comunicado>,
    #[prop(optional)] read_only: bool,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(
        initial.as_ref().map(|c| AnnouncementForm::from_announcement(c, read_only)).unwrap_or_default(),
    );
    let submit = Submission::new();

    let title = match (read_only, form.with_untracked(AnnouncementForm::is_edit)) {
        (true, _) => "Ver comunicado",
        (false, true) => "Editar comunicado",
        (false, false) => "Nuevo comunicado",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if read_only {
            return;
        }
        match form.with(AnnouncementForm::validate) {
            Ok(comunicado) => match comunicado.id {
                Some(id) => submit.send(
                    async move { api::update::<Comunicado, _>(id, &comunicado).await },
                    "Comunicado actualizado",
                    on_saved,
                ),
                None => submit.send(
                    async move { api::create::<Comunicado, _>(&comunicado).await },
                    "Comunicado creado",
                    on_saved,
                ),
            },
            Err(e) => submit.reject(&e),
        }
    };

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <fieldset class="dialog__fields" disabled=read_only>
                    {text_field("Título", "text", form, |f| f.titulo.clone(), |f, v| f.titulo = v)}
                    {text_area("Contenido", form, |f| f.cuerpo.clone(), |f, v| f.cuerpo = v)}
                    <div class="form-grid">
                        {enum_select("Destinatario", &Destinatario::ALL, Destinatario::label, form, |f| f.destinatario, |f, v| f.destinatario = v)}
                        {enum_select(
                            "Tipo de contenido",
                            &TipoContenido::ALL,
                            TipoContenido::label,
                            form,
                            |f| f.tipo_contenido,
                            |f, v| f.tipo_contenido = v,
                        )}
                        {text_field("Fecha de inicio", "date", form, |f| f.fecha_inicio.clone(), |f, v| f.fecha_inicio = v)}
                        {text_field("Fecha de fin", "date", form, |f| f.fecha_fin.clone(), |f, v| f.fecha_fin = v)}
                        {check_field("Destacado", form, |f| f.es_destacado, |f, v| f.es_destacado = v)}
                        {check_field("Programado", form, |f| f.es_programado, |f, v| f.es_programado = v)}
                    </div>
                    <ChannelCheckboxes
                        value=Signal::derive(move || form.with(|f| f.canal_envio))
                        on_toggle=Callback::new(move |channel: Channel| form.update(|f| f.toggle_channel(channel)))
                        disabled=Signal::stored(read_only)
                    />
                    <AttachmentField form=form kind=AttachmentKind::Image/>
                    <AttachmentField form=form kind=AttachmentKind::Pdf/>
                </fieldset>
                <FormErrorLine error=submit.error/>
                {if read_only {
                    view! {
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cerrar"</button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <DialogActions
                            submission=submit
                            blocked=Signal::derive(move || form.with(|f| f.uploading.is_some()))
                            on_close=on_close
                        />
                    }
                    .into_any()
                }}
            </form>
        </ModalFrame>
    }
}
