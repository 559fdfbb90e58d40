use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators::is_blank,
    domain::entities::chat_message::ChatMessage,
};

#[derive(Deserialize)]
struct SendPayload {
    content: String,
}

#[derive(Serialize, Deserialize)]
pub struct BubbleResponse {
    pub message: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(history).post(send))
        .route("/bubble", get(bubble))
}

/// Stores the message and returns immediately; the reply shows up in the history later.
async fn send(
    State(app_state): State<AppState>,
    Json(payload): Json<SendPayload>,
) -> AppResult<impl IntoResponse> {
    if is_blank(&payload.content) {
        return Err(AppError::InvalidInput("Message must not be empty".into()));
    }

    let turn = app_state
        .chat_use_cases
        .on_user_message(&payload.content)
        .await;

    Ok((StatusCode::ACCEPTED, Json(turn.user)))
}

async fn history(State(app_state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(app_state.chat_use_cases.history().await)
}

async fn bubble(State(app_state): State<AppState>) -> Json<BubbleResponse> {
    Json(BubbleResponse {
        message: app_state.chat_use_cases.current_bubble().await,
    })
}
