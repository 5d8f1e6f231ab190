//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four signals are provided to every route: the session, UI chrome state
//! (toasts, theme, sidebar), push-notification state and the runtime config
//! served by the host. Dashboard routes nest under `DashboardLayout`, which
//! owns the sidebar, the header and the route guard; the public auth pages
//! render standalone.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::components::toast::ToastStack;
use crate::net::types::RuntimeConfig;
use crate::pages::{
    alerts::AlertsPage, announcements::AnnouncementsPage, assignments::AssignmentsPage,
    collaborators::CollaboratorsPage, contacts::ContactsPage, exports::ExportsPage, home::HomePage,
    inbox::InboxPage, login::LoginPage, patients::PatientsPage, recover_password::RecoverPasswordPage,
    register::RegisterPage, reports::ReportsPage, tambos::TambosPage, visits::VisitsPage,
};
use crate::state::notifications::{NotificationState, Permission};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

const FIREBASE_SDK: &str = "https://www.gstatic.com/firebasejs/9.22.1";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const LEAFLET: &str = "https://unpkg.com/leaflet@1.9.4/dist";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=format!("{LEAFLET}/leaflet.css")/>
                <script src=format!("{FIREBASE_SDK}/firebase-app-compat.js")></script>
                <script src=format!("{FIREBASE_SDK}/firebase-messaging-compat.js")></script>
                <script src=CHART_JS></script>
                <script src=format!("{LEAFLET}/leaflet.js")></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationState::new(Permission::Unsupported));
    let runtime = RwSignal::new(None::<RuntimeConfig>);

    provide_context(session);
    provide_context(ui);
    provide_context(notifications);
    provide_context(runtime);

    // Effects only run in the browser: read persisted state and load the
    // runtime config once.
    Effect::new(move || {
        session.set(SessionState::restore());
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        notifications.update(|n| n.permission = crate::util::push::permission());

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_runtime_config().await {
                Ok(config) => {
                    if config.push_enabled() {
                        if let Err(e) = crate::util::push::init(&config.firebase) {
                            log::warn!("push disabled: {e}");
                        }
                    }
                    runtime.set(Some(config));
                }
                Err(e) => log::warn!("runtime config unavailable: {e}"),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tambo-admin.css"/>
        <Title text="Tambo Admin"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("recuperar") view=RecoverPasswordPage/>
                <ParentRoute path=StaticSegment("") view=DashboardLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("colaboradores") view=CollaboratorsPage/>
                    <Route path=StaticSegment("tambos") view=TambosPage/>
                    <Route path=StaticSegment("asignaciones") view=AssignmentsPage/>
                    <Route path=StaticSegment("pacientes") view=PatientsPage/>
                    <Route path=StaticSegment("contactos") view=ContactsPage/>
                    <Route path=StaticSegment("comunicados") view=AnnouncementsPage/>
                    <Route path=StaticSegment("buzon") view=InboxPage/>
                    <Route path=StaticSegment("alertas") view=AlertsPage/>
                    <Route path=StaticSegment("visitas") view=VisitsPage/>
                    <Route path=StaticSegment("exportaciones") view=ExportsPage/>
                    <Route path=StaticSegment("reportes") view=ReportsPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
