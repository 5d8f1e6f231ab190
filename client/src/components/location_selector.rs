//! Department → province → district selects plus the derived station code.
//!
//! DESIGN
//! ======
//! The view only forwards selection events to `LocationSelector` and runs the
//! lookups it hands back. Each lookup resolves into the selector with its
//! epoch; stale answers are dropped there, so an out-of-order response for an
//! earlier department never lands in the province list.

use leptos::prelude::*;

use crate::net::api;
use crate::state::forms::tambo::TamboForm;
use crate::state::location::{LocationPhase, LookupRequest};

fn stale(kind: &str, epoch: u64) {
    log::debug!("dropped stale {kind} lookup (epoch {epoch})");
}

/// Load the department list once.
pub fn load_departments(form: RwSignal<TamboForm>) {
    leptos::task::spawn_local(async move {
        let result = api::departments().await.map_err(|e| e.to_string());
        form.try_update(|f| f.location.departments_loaded(result));
    });
}

/// Run the lookups returned by a selection event.
pub fn run_lookups(form: RwSignal<TamboForm>, requests: impl IntoIterator<Item = LookupRequest>) {
    for request in requests {
        leptos::task::spawn_local(async move {
            match request {
                LookupRequest::Provinces { epoch, department } => {
                    let result = api::provinces(&department).await.map_err(|e| e.to_string());
                    form.try_update(|f| {
                        if !f.location.provinces_loaded(epoch, result) {
                            stale("province", epoch);
                        }
                    });
                }
                LookupRequest::Districts { epoch, department, province } => {
                    let result = api::districts(&department, &province).await.map_err(|e| e.to_string());
                    form.try_update(|f| {
                        if !f.location.districts_loaded(epoch, result) {
                            stale("district", epoch);
                        }
                    });
                }
                LookupRequest::Code { epoch, department, province, district } => {
                    let result = api::next_station_code(&department, &province, &district)
                        .await
                        .map_err(|e| e.to_string());
                    form.try_update(|f| {
                        if !f.location.code_loaded(epoch, result) {
                            stale("code", epoch);
                        }
                    });
                }
            }
        });
    }
}

fn options(list: Vec<String>, selected: String) -> impl IntoView {
    // Keep a stored value selectable even before its option list arrives.
    let mut list = list;
    if !selected.is_empty() && !list.contains(&selected) {
        list.insert(0, selected.clone());
    }
    list.into_iter()
        .map(|value| {
            let is_selected = value == selected;
            let label = value.clone();
            view! { <option value=value selected=is_selected>{label}</option> }
        })
        .collect_view()
}

/// Location fields of the tambo modal.
#[component]
pub fn LocationSelectorFields(form: RwSignal<TamboForm>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let on_department = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let mut request = None;
        form.update(|f| request = f.location.select_department(&value));
        run_lookups(form, request);
    };
    let on_province = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let mut request = None;
        form.update(|f| request = f.location.select_province(&value));
        run_lookups(form, request);
    };
    let on_district = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let mut request = None;
        form.update(|f| request = f.location.select_district(&value));
        run_lookups(form, request);
    };

    let phase = move || form.with(|f| f.location.phase());

    view! {
        <div class="form-grid location-selector">
            <label>
                "Departamento"
                <select on:change=on_department disabled=move || disabled.get()>
                    <option value="">"Seleccione"</option>
                    {move || form.with(|f| options(f.location.departments.clone(), f.location.department.clone()))}
                </select>
            </label>
            <label>
                "Provincia"
                <select
                    on:change=on_province
                    disabled=move || disabled.get() || phase() == LocationPhase::LoadingProvinces
                >
                    <option value="">"Seleccione"</option>
                    {move || form.with(|f| options(f.location.provinces.clone(), f.location.province.clone()))}
                </select>
            </label>
            <label>
                "Distrito"
                <select
                    on:change=on_district
                    disabled=move || disabled.get() || phase() == LocationPhase::LoadingDistricts
                >
                    <option value="">"Seleccione"</option>
                    {move || form.with(|f| options(f.location.districts.clone(), f.location.district.clone()))}
                </select>
            </label>
            <label>
                "Código"
                <input
                    type="text"
                    readonly=true
                    class:location-selector__code--loading=move || phase() == LocationPhase::LoadingCode
                    prop:value=move || {
                        if phase() == LocationPhase::LoadingCode {
                            "Generando...".to_owned()
                        } else {
                            form.with(|f| f.location.code.clone())
                        }
                    }
                />
            </label>
        </div>
    }
}
