//! Home visit dialog: measurements, household services and the visit
//! location.
//!
//! When the browser reports offline, a new or edited visit is appended to
//! the offline queue instead of being sent.

use leptos::prelude::*;

use super::{DialogActions, FormErrorLine, Submission, check_field, id_select, text_area, text_field};
use crate::components::dialog::ModalFrame;
use crate::components::map::LocationPicker;
use crate::net::api;
use crate::net::types::{Paciente, User, Visita};
use crate::state::forms::visit::{VisitForm, VisitRoute, manager_options};
use crate::state::visit_queue::VisitQueue;
use crate::util::{browser, clock};

#[component]
pub fn VisitModal(
    initial: Option<Visita>,
    queue: RwSignal<VisitQueue>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial.as_ref().map_or_else(|| VisitForm::new(&clock::today()), VisitForm::from_visit));
    let submit = Submission::new();
    let patients = RwSignal::new(Vec::<(i64, String)>::new());
    let managers = RwSignal::new(Vec::<(i64, String)>::new());
    let feedback = submit.feedback();

    leptos::task::spawn_local(async move {
        match api::list::<Paciente>().await {
            Ok(list) => {
                patients.try_set(list.iter().map(|p| (p.id, p.display_name())).collect());
            }
            Err(e) => feedback.api_error("load patients", &e),
        }
    });
    leptos::task::spawn_local(async move {
        match api::list::<User>().await {
            Ok(users) => {
                managers.try_set(manager_options(&users).into_iter().map(|u| (u.id, u.full_name())).collect());
            }
            Err(e) => feedback.api_error("load managers", &e),
        }
    });

    let locate = move |_| {
        form.update(|f| f.locating = true);
        leptos::task::spawn_local(async move {
            match browser::current_position().await {
                Ok((lat, lng)) => {
                    form.try_update(|f| f.set_location(lat, lng));
                }
                Err(e) => {
                    form.try_update(|f| f.locating = false);
                    log::warn!("geolocation failed: {e}");
                    feedback.warn(e.to_string());
                }
            }
        });
    };

    let title = if form.with_untracked(VisitForm::is_edit) { "Editar visita" } else { "Nueva visita" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with(VisitForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                submit.reject(&e);
                return;
            }
        };
        match form.with(|f| f.route(browser::is_online())) {
            VisitRoute::Queue => {
                queue.update(|q| q.enqueue(payload));
                feedback.info("Sin conexión: la visita se guardó para sincronizar más tarde");
                on_saved.run(());
            }
            VisitRoute::Update(id) => submit.send(
                async move { api::update::<Visita, _>(id, &payload).await },
                "Visita actualizada",
                on_saved,
            ),
            VisitRoute::Create => submit.send(
                async move { api::create::<Visita, _>(&payload).await },
                "Visita registrada",
                on_saved,
            ),
        }
    };

    let position = Signal::derive(move || form.with(|f| f.latitud.zip(f.longitud)));

    view! {
        <ModalFrame title=title.to_owned() on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <div class="form-grid">
                    {id_select("Paciente", patients.into(), form, |f| f.paciente_id, |f, v| f.paciente_id = v)}
                    {id_select("Gestor", managers.into(), form, |f| f.gestor_id, |f, v| f.gestor_id = v)}
                    {text_field("Fecha de visita", "date", form, |f| f.fecha_visita.clone(), |f, v| f.fecha_visita = v)}
                    {text_field("Altura (cm)", "text", form, |f| f.altura.clone(), |f, v| f.altura = v)}
                    {text_field("Peso (kg)", "text", form, |f| f.peso.clone(), |f, v| f.peso = v)}
                </div>
                {text_area("Observación", form, |f| f.observacion.clone(), |f, v| f.observacion = v)}
                <div class="form-grid">
                    {check_field("Tiene agua", form, |f| f.tiene_agua, |f, v| f.tiene_agua = v)}
                    {check_field("Tiene luz", form, |f| f.tiene_luz, |f, v| f.tiene_luz = v)}
                    {check_field("Tiene internet", form, |f| f.tiene_internet, |f, v| f.tiene_internet = v)}
                </div>
                <div class="visit-location">
                    <button
                        type="button"
                        class="btn"
                        disabled=move || form.with(|f| f.locating)
                        on:click=locate
                    >
                        {move || if form.with(|f| f.locating) { "Obteniendo ubicación..." } else { "Usar mi ubicación" }}
                    </button>
                    <span class="visit-location__coords">
                        {move || {
                            position
                                .get()
                                .map_or_else(
                                    || "Sin ubicación".to_owned(),
                                    |(lat, lng)| format!("{lat:.5}, {lng:.5}"),
                                )
                        }}
                    </span>
                    <LocationPicker
                        position=position
                        on_pick=Callback::new(move |(lat, lng): (f64, f64)| form.update(|f| f.set_location(lat, lng)))
                    />
                </div>
                <FormErrorLine error=submit.error/>
                <DialogActions submission=submit blocked=Signal::stored(false) on_close=on_close/>
            </form>
        </ModalFrame>
    }
}
