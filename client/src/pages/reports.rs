//! Statistics dashboard: one chart per backend aggregate plus the visit map.
//!
//! Every section loads independently; a failed endpoint only blanks its own
//! chart and is listed in the notice at the top.

use std::future::Future;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::charts::{ChartCanvas, ChartCard, bar_config, gauge_config, line_config, pie_config, radar_config};
use crate::components::map::VisitMap;
use crate::net::error::ApiError;
use crate::net::reports::{self, Agrupacion};
use crate::state::reports::{self as aggregate, ReportsState, Series};

/// Run one section request and fold its rows into the page state.
fn fetch_section<T, Fut>(state: RwSignal<ReportsState>, section: &'static str, request: Fut, apply: fn(&mut ReportsState, T))
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    leptos::task::spawn_local(async move {
        match request.await {
            Ok(rows) => {
                state.try_update(|s| apply(s, rows));
            }
            Err(e) => {
                log::warn!("report section {section} failed: {e}");
                state.try_update(|s| s.section_failed(section));
            }
        }
    });
}

fn load_static_sections(state: RwSignal<ReportsState>) {
    fetch_section(state, "Usuarios por rol", reports::users_by_role(), |s, rows| {
        s.users_by_role = aggregate::users_by_role(&rows);
    });
    fetch_section(state, "Mapa de visitas", reports::visit_coordinates(), |s, rows| {
        s.map_points = aggregate::map_points(&rows);
    });
    fetch_section(state, "Servicios básicos", reports::basic_services(), |s, rows| {
        s.basic_services = aggregate::basic_services(&rows);
    });
    fetch_section(state, "Distritos con más visitas", reports::top_districts(), |s, rows| {
        s.top_districts = aggregate::top_districts(&rows);
    });
    fetch_section(state, "Usuarios verificados", reports::verified_users(), |s, v| {
        s.verification = Some(aggregate::verification_gauge(&v));
    });
    fetch_section(state, "Tambos por departamento", reports::stations_by_region(), |s, rows| {
        s.stations_by_department = aggregate::stations_by_department(&rows);
    });
    fetch_section(state, "Tambos por tipo", reports::stations_by_type(), |s, rows| {
        s.stations_by_type = aggregate::stations_by_type(&rows);
    });
    fetch_section(state, "Anemia por distrito", reports::anemia_by_district(), |s, rows| {
        s.anemia_by_district = aggregate::anemia_by_district(&rows);
    });
    fetch_section(state, "Pacientes por mes", reports::patients_by_month(), |s, rows| {
        s.patients_by_month = aggregate::patients_by_month(&rows);
    });
    fetch_section(state, "Asignaciones por gestor", reports::assignments_by_manager(), |s, rows| {
        s.assignments_by_manager = aggregate::assignments_by_manager(&rows);
    });
}

/// Chart config derived from one series; `None` while it is empty.
fn series_chart(
    state: RwSignal<ReportsState>,
    pick: fn(&ReportsState) -> &Series,
    build: fn(&Series) -> Value,
) -> Signal<Option<Value>> {
    Signal::derive(move || {
        state.with(|s| {
            let series = pick(s);
            (!series.is_empty()).then(|| build(series))
        })
    })
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let state = RwSignal::new(ReportsState::new(Agrupacion::default()));
    let grouping = RwSignal::new(Agrupacion::default());

    Effect::new(move || load_static_sections(state));
    Effect::new(move || {
        let current = grouping.get();
        state.update(|s| s.grouping = current);
        fetch_section(state, "Visitas en el tiempo", reports::visits_over_time(current), |s, rows| {
            s.visits_over_time = aggregate::visits_over_time(&rows);
        });
    });

    let on_grouping = move |ev: leptos::ev::Event| {
        if let Some(g) = Agrupacion::from_query(&event_target_value(&ev)) {
            grouping.set(g);
        }
    };

    let gauge = Signal::derive(move || state.with(|s| s.verification.map(|(value, rest)| gauge_config(value, rest))));
    let gauge_label = move || state.with(|s| s.verification.map(|(value, _)| format!("{value}% verificados")));
    let points = Signal::derive(move || state.with(|s| s.map_points.clone()));

    view! {
        <section class="reports">
            <h2>"Reportes"</h2>
            {move || {
                state
                    .with(|s| {
                        (!s.failed.is_empty())
                            .then(|| format!("No se pudieron cargar: {}", s.failed.join(", ")))
                    })
                    .map(|notice| view! { <p class="reports__notice">{notice}</p> })
            }}
            <div class="reports__grid">
                <ChartCard title="Usuarios por rol">
                    <ChartCanvas config=series_chart(state, |s| &s.users_by_role, |s| pie_config(s, false))/>
                </ChartCard>
                <ChartCard title="Visitas en el tiempo">
                    <select class="reports__grouping" on:change=on_grouping>
                        {Agrupacion::ALL
                            .into_iter()
                            .map(|g| {
                                view! {
                                    <option value=g.query_value() selected=move || grouping.get() == g>
                                        {g.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <ChartCanvas config=series_chart(state, |s| &s.visits_over_time, |s| line_config("Visitas", s))/>
                </ChartCard>
                <ChartCard title="Distritos con más visitas">
                    <ChartCanvas config=series_chart(state, |s| &s.top_districts, |s| bar_config("Visitas", s, true))/>
                </ChartCard>
                <ChartCard title="Servicios básicos">
                    <ChartCanvas config=series_chart(state, |s| &s.basic_services, |s| radar_config("Hogares", s))/>
                </ChartCard>
                <ChartCard title="Usuarios verificados">
                    <ChartCanvas config=gauge/>
                    <p class="reports__gauge-label">{gauge_label}</p>
                </ChartCard>
                <ChartCard title="Tambos por departamento">
                    <ChartCanvas config=series_chart(
                        state,
                        |s| &s.stations_by_department,
                        |s| bar_config("Tambos", s, false),
                    )/>
                </ChartCard>
                <ChartCard title="Tambos por tipo">
                    <ChartCanvas config=series_chart(state, |s| &s.stations_by_type, |s| pie_config(s, true))/>
                </ChartCard>
                <ChartCard title="Anemia por distrito">
                    <ChartCanvas config=series_chart(state, |s| &s.anemia_by_district, |s| bar_config("Pacientes", s, false))/>
                </ChartCard>
                <ChartCard title="Pacientes registrados por mes">
                    <ChartCanvas config=series_chart(state, |s| &s.patients_by_month, |s| line_config("Pacientes", s))/>
                </ChartCard>
                <ChartCard title="Asignaciones por gestor">
                    <ChartCanvas config=series_chart(
                        state,
                        |s| &s.assignments_by_manager,
                        |s| bar_config("Asignaciones", s, true),
                    )/>
                </ChartCard>
            </div>
            <ChartCard title="Mapa de visitas">
                <VisitMap points=points/>
            </ChartCard>
        </section>
    }
}
