#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    // A missing .env is the normal production case.
    if let Err(e) = &dotenv
        && !e.not_found()
    {
        tracing::warn!(error = %e, "ignoring unreadable .env");
    }

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    if config.runtime.push_enabled() {
        tracing::info!(project = %config.runtime.firebase.project_id, "push notifications enabled");
    } else {
        tracing::warn!("FIREBASE_PROJECT_ID or FIREBASE_VAPID_KEY missing, push notifications disabled");
    }
    tracing::info!(upstream = %config.api_upstream_url, media = %config.media_upstream_url, "backend proxy configured");

    let state = state::AppState::new(config).expect("upstream client init failed");
    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tambo admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
