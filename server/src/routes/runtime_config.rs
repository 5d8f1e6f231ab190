//! `GET /config.json`: the public runtime configuration the client reads on
//! start (Firebase web settings and the VAPID key).

use axum::Json;
use axum::extract::State;
use tambo_client::net::types::RuntimeConfig;

use crate::state::AppState;

pub async fn runtime_config(State(state): State<AppState>) -> Json<RuntimeConfig> {
    Json(state.config.runtime.clone())
}
