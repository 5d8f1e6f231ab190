//! Data exports: a generator dialog with the QR of the produced file, and
//! the signed-in user's export history.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::dialog::ModalFrame;
use crate::components::feedback::Feedback;
use crate::components::list_page::{DeleteConfirm, ListStatus, Pager, SearchBox, confirm_delete, fit_page_size, load_list, modal_state};
use crate::components::modals::{FormErrorLine, Submission, text_field};
use crate::net::api;
use crate::net::types::{ExportacionHistorial, TipoExportacion};
use crate::state::forms::export::{ExportForm, file_name};
use crate::state::listing::{ListState, ModalState};
use crate::state::session::SessionState;
use crate::util::clock::display_date;

#[component]
fn ExportDialog(on_close: Callback<()>, on_generated: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(ExportForm::default());
    let submit = Submission::new();
    let feedback = submit.feedback();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with(|f| f.validate(session.with(SessionState::user_id))) {
            Ok(request) => request,
            Err(e) => {
                submit.reject(&e);
                return;
            }
        };
        submit.saving.set(true);
        submit.error.set(None);
        leptos::task::spawn_local(async move {
            let result = api::generate_export(&request).await;
            submit.saving.try_set(false);
            match result {
                Ok(generated) => {
                    let url = generated.registro.and_then(|r| r.url_archivo).map(|u| api::media_url(&u));
                    form.try_update(|f| f.set_result(generated.qr, url));
                    feedback.success("Exportación generada correctamente");
                    on_generated.run(());
                }
                Err(e) => {
                    submit.error.try_set(Some(e.user_message()));
                    feedback.api_error("generate export", &e);
                }
            }
        });
    };

    let on_type = move |ev: leptos::ev::Event| {
        let picked = event_target_value(&ev).parse::<usize>().ok().and_then(|i| TipoExportacion::ALL.get(i).copied());
        form.update(|f| f.tipo = picked);
    };

    let result = move || {
        form.with(|f| {
            f.qr.clone().map(|qr| {
                let download = f.download_url.clone().map(|url| {
                    let name = file_name(&url);
                    let caption = format!("Archivo generado: {name}");
                    view! {
                        <p class="export-result__file">{caption}</p>
                        <a class="btn" href=url target="_blank" rel="noopener noreferrer" download=name>
                            "Descargar archivo"
                        </a>
                    }
                });
                view! {
                    <div class="export-result">
                        <p>"Escanea el QR desde tu celular:"</p>
                        <img class="export-result__qr" src=qr alt="Código QR"/>
                        {download}
                    </div>
                }
            })
        })
    };

    view! {
        <ModalFrame title="Nueva exportación".to_owned() on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Tipo de exportación"</span>
                    <select on:change=on_type>
                        <option value="" selected=move || form.with(|f| f.tipo.is_none())>"Seleccione"</option>
                        {TipoExportacion::ALL
                            .iter()
                            .enumerate()
                            .map(|(i, tipo)| {
                                let tipo = *tipo;
                                view! {
                                    <option value=i.to_string() selected=move || form.with(|f| f.tipo == Some(tipo))>
                                        {tipo.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="form-grid">
                    {text_field("Desde", "date", form, |f| f.fecha_inicio.clone(), |f, v| f.fecha_inicio = v)}
                    {text_field("Hasta", "date", form, |f| f.fecha_fin.clone(), |f, v| f.fecha_fin = v)}
                </div>
                {result}
                <FormErrorLine error=submit.error/>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || submit.saving.get() || !form.with(ExportForm::can_submit)
                    >
                        {move || if submit.saving.get() { "Generando..." } else { "Exportar" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn HistoryTable(list: RwSignal<ListState<ExportacionHistorial>>) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    fit_page_size(list, container);

    let rows = move || {
        list.with(ListState::page_items)
            .into_iter()
            .map(|row| {
                let id = row.id;
                let download = row.url_archivo.as_deref().filter(|u| !u.is_empty()).map(|u| {
                    let url = api::media_url(u);
                    let name = file_name(&url);
                    view! {
                        <a class="btn btn--icon" href=url target="_blank" rel="noopener noreferrer" download=name>
                            "⬇️"
                        </a>
                    }
                });
                view! {
                    <tr>
                        <td>{row.tipo_exportacion.clone()}</td>
                        <td>{display_date(&row.fecha_exportacion)}</td>
                        <td>{row.formato.clone()}</td>
                        <td>{row.estado.clone()}</td>
                        <td class="table__actions">
                            {download}
                            <button
                                class="btn btn--icon btn--danger"
                                title="Eliminar"
                                on:click=move |_| list.update(|l| l.request_delete(id))
                            >
                                "🗑️"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="list-page__table" node_ref=container>
            <ListStatus list=list/>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Tipo"</th>
                        <th>"Fecha"</th>
                        <th>"Formato"</th>
                        <th>"Estado"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Pager list=list/>
        </div>
    }
}

#[component]
pub fn ExportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let feedback = Feedback::expect();
    let list = RwSignal::new(ListState::<ExportacionHistorial>::default());
    let reload = Callback::new(move |()| {
        if let Some(user_id) = session.with_untracked(SessionState::user_id) {
            load_list(list, feedback, move || api::export_history(user_id));
        }
    });
    // Refetch once the session is restored.
    Effect::new(move || {
        if session.with(SessionState::user_id).is_some() {
            reload.run(());
        }
    });

    let modal = modal_state(list);
    let on_close = Callback::new(move |()| list.update(ListState::close_modal));

    view! {
        <section class="list-page">
            <div class="list-page__header">
                <h2>"Exportaciones"</h2>
                <SearchBox list=list placeholder="Buscar por tipo o estado"/>
                <button class="btn btn--primary" on:click=move |_| list.update(ListState::open_create)>
                    "Nueva exportación"
                </button>
            </div>
            <HistoryTable list=list/>
            {move || (modal.get() != ModalState::Closed).then(|| view! { <ExportDialog on_close=on_close on_generated=reload/> })}
            <DeleteConfirm
                list=list
                message="¿Está seguro de eliminar esta exportación del historial?"
                on_confirm=Callback::new(move |()| confirm_delete(list, feedback, api::delete_export, reload))
            />
        </section>
    }
}
