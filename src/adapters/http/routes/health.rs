use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    waitlist_mode: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        waitlist_mode: app_state.config.sink_mode.as_str(),
    })
}
