use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::ACCEPT_LANGUAGE},
    routing::post,
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    application::{dictionaries::t, language::UserLanguage, validators::is_blank},
    domain::entities::waitlist::WaitlistResponse,
    use_cases::waitlist::{failure_response, submitted_response},
};

#[derive(Deserialize)]
struct SubmitPayload {
    email: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit))
}

/// Always answers with a `WaitlistResponse` body; the status code mirrors `success`.
async fn submit(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitPayload>,
) -> (StatusCode, Json<WaitlistResponse>) {
    let lang = UserLanguage::from_raw(
        headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok()),
    );

    if is_blank(&payload.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(WaitlistResponse::failed(t(lang, "waitlist.emptyEmail"))),
        );
    }

    match app_state
        .waitlist_use_cases
        .try_submit(&payload.email)
        .await
    {
        Ok(delivery) => (StatusCode::OK, Json(submitted_response(lang, delivery))),
        Err(err) => (err.status_code(), Json(failure_response(&err, lang))),
    }
}
