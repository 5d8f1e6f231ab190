//! Dashboard landing page: welcome banner and headline counts.

use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::net::api;
use crate::net::types::{Paciente, Tambo, User};
use crate::state::session::SessionState;

#[component]
fn StatCard(title: &'static str, count: RwSignal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <strong class="stat-card__value">
                {move || count.get().map_or_else(|| "...".to_owned(), |n| n.to_string())}
            </strong>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let feedback = Feedback::expect();
    let users = RwSignal::new(None::<usize>);
    let tambos = RwSignal::new(None::<usize>);
    let patients = RwSignal::new(None::<usize>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::list::<User>().await {
                Ok(list) => {
                    users.try_set(Some(list.len()));
                }
                Err(e) => feedback.api_error("count users", &e),
            }
        });
        leptos::task::spawn_local(async move {
            match api::list::<Tambo>().await {
                Ok(list) => {
                    tambos.try_set(Some(list.len()));
                }
                Err(e) => feedback.api_error("count tambos", &e),
            }
        });
        leptos::task::spawn_local(async move {
            match api::list::<Paciente>().await {
                Ok(list) => {
                    patients.try_set(Some(list.len()));
                }
                Err(e) => feedback.api_error("count patients", &e),
            }
        });
    });

    let greeting = move || {
        session.with(|s| {
            s.user.as_ref().map(|u| format!("BIENVENIDO, {}", u.full_name().to_uppercase())).unwrap_or_default()
        })
    };

    view! {
        <section class="home">
            <header class="welcome-bar">
                <h2>{greeting}</h2>
            </header>
            <div class="stats-section">
                <StatCard title="Colaboradores" count=users/>
                <StatCard title="Tambos" count=tambos/>
                <StatCard title="Pacientes" count=patients/>
            </div>
        </section>
    }
}
