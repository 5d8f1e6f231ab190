//! Read-only inbox of published comunicados, newest first.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::net::api;
use crate::net::types::Comunicado;
use crate::util::browser;
use crate::util::clock::display_date;

/// Visible comunicados, most recent start date first.
fn inbox_items(mut items: Vec<Comunicado>) -> Vec<Comunicado> {
    items.retain(|c| !c.eliminado.unwrap_or(false));
    items.sort_by(|a, b| b.fecha_inicio.cmp(&a.fecha_inicio));
    items
}

#[component]
fn InboxCard(item: Comunicado) -> impl IntoView {
    let image = item.imagen_url.as_deref().filter(|u| !u.is_empty()).map(api::media_url);
    let pdf = item.url_pdf.as_deref().filter(|u| !u.is_empty()).map(api::media_url);
    view! {
        <article class="inbox-card" class:inbox-card--featured=item.es_destacado.unwrap_or(false)>
            {image.map(|src| view! { <img class="inbox-card__image" src=src alt=""/> })}
            <div class="inbox-card__body">
                <h3>{item.titulo.clone()}</h3>
                <p>{item.cuerpo.clone()}</p>
                <span class="inbox-card__date">{display_date(&item.fecha_inicio)}</span>
                {pdf.map(|url| {
                    view! {
                        <button class="btn btn--link" on:click=move |_| browser::open_in_new_tab(&url)>
                            "Ver PDF"
                        </button>
                    }
                })}
            </div>
        </article>
    }
}

#[component]
pub fn InboxPage() -> impl IntoView {
    let feedback = Feedback::expect();
    let items = RwSignal::new(None::<Vec<Comunicado>>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::list::<Comunicado>().await {
                Ok(list) => {
                    items.try_set(Some(inbox_items(list)));
                }
                Err(e) => {
                    items.try_set(Some(Vec::new()));
                    feedback.api_error("load inbox", &e);
                }
            }
        });
    });

    view! {
        <section class="inbox">
            <h2>"Buzón de notificaciones"</h2>
            {move || match items.get() {
                None => view! { <p class="list-page__status">"Cargando..."</p> }.into_any(),
                Some(list) if list.is_empty() => {
                    view! { <p class="list-page__status">"No hay notificaciones aún."</p> }.into_any()
                }
                Some(list) => {
                    view! {
                        <div class="inbox__list">
                            {list.into_iter().map(|item| view! { <InboxCard item=item/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
