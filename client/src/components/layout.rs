//! Authenticated dashboard chrome: sidebar navigation, header with the user
//! greeting and a live clock, and the global push listener.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route renders inside this layout through `<Outlet/>`. The
//! layout installs the anonymous-visitor redirect once for all of them and
//! asks for notification permission the first time a signed-in session is
//! seen.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::components::push_listener::PushListener;
use crate::state::notifications::NotificationState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_ROUTE, install_unauth_redirect};

struct NavGroup {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const NAV: &[NavGroup] = &[
    NavGroup {
        title: "GESTIÓN",
        links: &[
            ("/colaboradores", "Colaboradores"),
            ("/tambos", "Tambos"),
            ("/asignaciones", "Asignación de gestores"),
            ("/pacientes", "Pacientes"),
            ("/contactos", "Contactos"),
        ],
    },
    NavGroup {
        title: "ANUNCIOS",
        links: &[("/comunicados", "Comunicado"), ("/buzon", "Buzón"), ("/alertas", "Alertas")],
    },
    NavGroup { title: "CAMPO", links: &[("/visitas", "Visitas domiciliarias")] },
    NavGroup { title: "REPORTES", links: &[("/reportes", "Estadísticas"), ("/exportaciones", "Exportaciones")] },
];

/// Dashboard shell wrapping every protected route.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    Effect::new(move || {
        if session.with(|s| s.user.is_none()) {
            return;
        }
        let mut ask = false;
        notifications.update(|n| ask = n.take_permission_request());
        if ask {
            leptos::task::spawn_local(async move {
                let answer = crate::util::push::request_permission().await;
                notifications.try_update(|n| n.permission_resolved(answer));
            });
        }
    });

    let on_logout = move |_| {
        session.update(SessionState::logout);
        navigate(LOGIN_ROUTE, leptos_router::NavigateOptions::default());
    };

    view! {
        <Show
            when=move || session.with(|s| s.user.is_some())
            fallback=|| view! { <div class="dashboard-loading">"Cargando..."</div> }
        >
            <div class="dashboard" class:dashboard--collapsed=move || ui.get().sidebar_collapsed>
                <aside class="sidebar">
                    <div class="sidebar__logo">"Tambo Admin"</div>
                    <nav class="sidebar__menu">
                        <A href="/" attr:class="sidebar__home">"INICIO"</A>
                        {NAV.iter().map(|group| view! { <SidebarGroup group=group/> }).collect_view()}
                    </nav>
                    <button class="btn sidebar__logout" on:click=on_logout.clone()>"Cerrar sesión"</button>
                </aside>
                <main class="dashboard__main">
                    <DashboardHeader/>
                    <section class="dashboard__body">
                        <Outlet/>
                    </section>
                </main>
                <PushListener owner="layout"/>
            </div>
        </Show>
    }
}

#[component]
fn SidebarGroup(group: &'static NavGroup) -> impl IntoView {
    let open = RwSignal::new(true);
    view! {
        <div class="sidebar__group">
            <button class="sidebar__group-title" on:click=move |_| open.update(|o| *o = !*o)>
                {group.title}
                <span class="sidebar__chevron" class:sidebar__chevron--open=move || open.get()>"▸"</span>
            </button>
            <Show when=move || open.get()>
                <div class="sidebar__submenu">
                    {group
                        .links
                        .iter()
                        .map(|(href, label)| view! { <A href=*href attr:class="sidebar__link">{*label}</A> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Greeting, theme toggle and a clock ticking every second.
#[component]
fn DashboardHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let clock = RwSignal::new(crate::util::clock::header_now());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                clock.try_set(crate::util::clock::header_now());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("{} {}", u.first_name, u.last_name_p).trim().to_owned())
                .unwrap_or_default()
        })
    };

    view! {
        <header class="dashboard-header">
            <button class="btn dashboard-header__menu" title="Menú" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                "☰"
            </button>
            <span class="dashboard-header__user">{greeting}</span>
            <span class="dashboard-header__spacer"></span>
            <span class="dashboard-header__clock">
                {move || clock.with(|(_, date)| date.clone())} " " {move || clock.with(|(time, _)| time.clone())}
            </span>
            <button
                class="btn dashboard-header__theme"
                title="Cambiar tema"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
